//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::CardId;
use crate::deck::Deck;
use crate::error::{DealError, GameError, OptionsError};
use crate::hand::{HandCard, draw_hand};
use crate::message::{Prompt, select_message};
use crate::options::GameOptions;

mod reducer;
pub mod state;

pub use reducer::{Dealer, Event, Outcome, reduce};
pub use state::{GameState, Phase, Score};

/// A memory game engine that owns the deck, randomness, and round state.
///
/// Every transition goes through [`reduce`]; the game only keeps the result.
/// The same seed and the same sequence of events always produce the same
/// game.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// The deck cards are dealt from.
    deck: Deck,
    /// Random number generator for deals and reshuffles.
    rng: ChaCha8Rng,
    /// Current state.
    state: GameState,
}

impl Game {
    /// Creates a new game with the given seed and deals the starting hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.hand().len(), 3);
    /// assert!(game.can_play());
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        let hand = draw_hand(&mut deck, options.starting_hand_size, &mut rng).map_err(
            |DealError::NotEnoughCards {
                 requested,
                 available,
             }| OptionsError::NotEnoughCards {
                required: requested,
                available,
            },
        )?;

        Ok(Self {
            options,
            deck,
            rng,
            state: GameState::new(hand),
        })
    }

    /// Applies an event and keeps the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be applied. The game is left
    /// unchanged in that case.
    pub fn dispatch(&mut self, event: Event) -> Result<Outcome, GameError> {
        let mut dealer = Dealer::new(&mut self.deck, &mut self.rng, &self.options);
        let (next, outcome) = reduce(&self.state, event, &mut dealer)?;
        self.state = next;
        Ok(outcome)
    }

    /// Picks a card from the hand.
    ///
    /// Picks made while the game is not playable return
    /// [`Outcome::Ignored`] and change nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in the current hand, or if a
    /// milestone deal runs out of cards.
    pub fn pick_card(&mut self, id: CardId) -> Result<Outcome, GameError> {
        self.dispatch(Event::Pick(id))
    }

    /// Starts a new round: returns every card to the deck, deals the starting
    /// hand, and resets the current score. The best score is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting hand cannot be dealt.
    pub fn reset_game(&mut self) -> Result<(), GameError> {
        self.dispatch(Event::Reset).map(|_| ())
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the cards in the hand, in display order.
    #[must_use]
    pub fn hand(&self) -> &[HandCard] {
        &self.state.hand
    }

    /// Returns the score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.state.score
    }

    /// Returns the phase of the current round.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns whether the player may pick cards.
    #[must_use]
    pub const fn can_play(&self) -> bool {
        self.state.can_play()
    }

    /// Returns the number of reshuffles so far.
    #[must_use]
    pub const fn shuffle_count(&self) -> u32 {
        self.state.shuffle_count
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the prompt to show the player.
    #[must_use]
    pub const fn message(&self) -> Prompt {
        select_message(
            self.state.can_play(),
            self.state.score.current,
            &self.options,
        )
    }
}
