//! Game state types.

use alloc::vec::Vec;

use crate::card::CardId;
use crate::hand::HandCard;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// The player may pick cards.
    #[default]
    Playing,
    /// The player picked a card twice.
    RoundEnded,
    /// The player reached the winning score.
    GameWon,
}

/// Current and best score.
///
/// `best` never drops below `current` and never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    /// Points scored in the current round.
    pub current: u32,
    /// Highest score reached by this game.
    pub best: u32,
}

impl Score {
    /// Adds a point and returns the new current score.
    pub fn add_point(&mut self) -> u32 {
        self.current = self.current.saturating_add(1);
        self.best = self.best.max(self.current);
        self.current
    }

    /// Starts a new round, keeping the best score.
    pub const fn reset_current(&mut self) {
        self.current = 0;
    }
}

/// Snapshot of everything a presentation layer needs to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// Cards in the player's hand, in display order.
    pub hand: Vec<HandCard>,
    /// Current and best score.
    pub score: Score,
    /// Phase of the current round.
    pub phase: Phase,
    /// Number of reshuffles so far. Only useful for forcing fresh view keys.
    pub shuffle_count: u32,
}

impl GameState {
    /// Creates a fresh playing state around a hand.
    #[must_use]
    pub fn new(hand: Vec<HandCard>) -> Self {
        Self {
            hand,
            ..Self::default()
        }
    }

    /// Returns whether the player may pick cards.
    #[must_use]
    pub const fn can_play(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }

    /// Returns the hand card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&HandCard> {
        self.hand.iter().find(|card| card.id == id)
    }

    pub(crate) fn position(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|card| card.id == id)
    }
}
