//! Error types for game operations.

use thiserror::Error;

use crate::card::CardId;

/// Errors that can occur while dealing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough undrawn cards left in the deck.
    #[error("not enough cards in the deck: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of undrawn cards.
        available: usize,
    },
}

/// Errors that can occur when picking a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The card is not part of the current hand.
    #[error("card {0} is not in the current hand")]
    CardNotInHand(CardId),
}

/// Errors returned by game transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The pick could not be applied.
    #[error(transparent)]
    Pick(#[from] PickError),
    /// A new hand could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur when validating game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A hand size is zero.
    #[error("hand sizes must be non-zero")]
    ZeroHandSize,
    /// Milestones are not strictly increasing.
    #[error("milestones must be strictly increasing and non-zero")]
    MilestonesOutOfOrder,
    /// A hand has fewer cards than the points needed to reach its milestone.
    #[error("a hand of {hand_size} cards cannot score the {points} points to its next milestone")]
    HandTooSmall {
        /// Cards in the hand.
        hand_size: usize,
        /// Points the hand has to score.
        points: u32,
    },
    /// The three hands of a round do not fit in one deck.
    #[error("a round needs {required} cards but the deck holds {available}")]
    NotEnoughCards {
        /// Cards dealt over a full round.
        required: usize,
        /// Cards in the deck.
        available: usize,
    },
}
