//! Pure state transitions.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::CardId;
use crate::deck::Deck;
use crate::error::{DealError, GameError, PickError};
use crate::hand::{HandCard, draw_hand};
use crate::options::GameOptions;
use crate::shuffle::shuffle;

use super::state::{GameState, Phase};

/// An input to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The player picked a card.
    Pick(CardId),
    /// The player asked for a new round.
    Reset,
}

/// What a transition did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game is not playable, so the pick was ignored.
    Ignored,
    /// A new card was picked and the hand reshuffled.
    Scored {
        /// The new current score.
        score: u32,
    },
    /// A milestone was reached and a bigger hand dealt.
    Dealt {
        /// The new current score.
        score: u32,
        /// Size of the new hand.
        hand_size: usize,
    },
    /// The winning score was reached.
    Won {
        /// The winning score.
        score: u32,
    },
    /// The card had already been picked, ending the round.
    AlreadyPicked,
    /// A new round was dealt.
    Reset,
}

/// The mutable context a transition deals from.
pub struct Dealer<'a, R: Rng + ?Sized> {
    /// Deck to draw from.
    pub deck: &'a mut Deck,
    /// Source of randomness for draws and reshuffles.
    pub rng: &'a mut R,
    /// Hand sizes and milestones.
    pub options: &'a GameOptions,
}

impl<'a, R: Rng + ?Sized> Dealer<'a, R> {
    /// Bundles a deck, a random number generator, and options.
    pub const fn new(deck: &'a mut Deck, rng: &'a mut R, options: &'a GameOptions) -> Self {
        Self { deck, rng, options }
    }

    fn deal(&mut self, hand_size: usize) -> Result<Vec<HandCard>, DealError> {
        draw_hand(&mut *self.deck, hand_size, &mut *self.rng)
    }
}

/// Computes the state that follows `event`.
///
/// The incoming state is never modified. On error the deck is untouched and
/// `state` remains the current state.
///
/// # Errors
///
/// Returns [`GameError::Pick`] if a picked card is not in the hand, or
/// [`GameError::Deal`] if the deck cannot supply the next hand.
///
/// # Example
///
/// ```
/// use memrs::{Dealer, Deck, Event, GameOptions, GameState, Outcome, reduce};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let options = GameOptions::default();
/// let mut dealer = Dealer::new(&mut deck, &mut rng, &options);
///
/// let (state, outcome) = reduce(&GameState::default(), Event::Reset, &mut dealer).unwrap();
/// assert_eq!(outcome, Outcome::Reset);
/// assert_eq!(state.hand.len(), 3);
/// ```
pub fn reduce<R: Rng + ?Sized>(
    state: &GameState,
    event: Event,
    dealer: &mut Dealer<'_, R>,
) -> Result<(GameState, Outcome), GameError> {
    match event {
        Event::Pick(id) => pick(state, id, dealer),
        Event::Reset => reset(state, dealer),
    }
}

fn pick<R: Rng + ?Sized>(
    state: &GameState,
    id: CardId,
    dealer: &mut Dealer<'_, R>,
) -> Result<(GameState, Outcome), GameError> {
    if !state.can_play() {
        return Ok((state.clone(), Outcome::Ignored));
    }

    let position = state.position(id).ok_or(PickError::CardNotInHand(id))?;
    let mut next = state.clone();

    if next.hand[position].picked {
        next.phase = Phase::RoundEnded;
        tracing::info!(card = %id, score = next.score.current, "card picked twice, round over");
        return Ok((next, Outcome::AlreadyPicked));
    }

    let score = next.score.add_point();
    tracing::debug!(card = %id, score, best = next.score.best, "new card picked");

    let options = dealer.options;
    let milestone_hand = if score == options.first_milestone {
        Some(options.second_hand_size)
    } else if score == options.second_milestone {
        Some(options.third_hand_size)
    } else {
        None
    };

    if let Some(hand_size) = milestone_hand {
        next.hand = dealer.deal(hand_size)?;
        return Ok((next, Outcome::Dealt { score, hand_size }));
    }

    let outcome = if score == options.winning_score {
        next.phase = Phase::GameWon;
        tracing::info!(score, "game won");
        Outcome::Won { score }
    } else {
        Outcome::Scored { score }
    };

    next.hand[position].picked = true;
    shuffle(next.hand.as_mut_slice(), &mut *dealer.rng);
    next.shuffle_count = next.shuffle_count.wrapping_add(1);
    tracing::trace!(shuffle_count = next.shuffle_count, "hand reshuffled");

    Ok((next, outcome))
}

fn reset<R: Rng + ?Sized>(
    state: &GameState,
    dealer: &mut Dealer<'_, R>,
) -> Result<(GameState, Outcome), GameError> {
    let hand_size = dealer.options.starting_hand_size;
    let mut fresh = dealer.deck.clone();
    fresh.reset();
    let hand = draw_hand(&mut fresh, hand_size, &mut *dealer.rng)?;
    *dealer.deck = fresh;

    let mut next = state.clone();
    next.hand = hand;
    next.score.reset_current();
    next.phase = Phase::Playing;
    tracing::debug!(best = next.score.best, "new round dealt");

    Ok((next, Outcome::Reset))
}
