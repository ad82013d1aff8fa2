//! A memory-matching card game engine with optional `no_std` support.
//!
//! The player is dealt a small hand and must pick every card exactly once.
//! Each new pick scores a point and reshuffles the hand; picking a card twice
//! ends the round. Reaching a score milestone deals a bigger hand, and the
//! final milestone wins the game.
//!
//! The crate provides a [`Game`] type that owns the deck, the random number
//! generator, and the current [`GameState`]. All transitions go through the
//! pure [`reduce`] function, so presentation layers only need to read the
//! state and forward events.
//!
//! # Example
//!
//! ```
//! use memrs::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! assert_eq!(game.hand().len(), 3);
//!
//! let first = game.hand()[0].id;
//! game.pick_card(first).unwrap();
//! assert_eq!(game.score().current, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod message;
pub mod options;
pub mod shuffle;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, GameError, OptionsError, PickError};
pub use game::{Dealer, Event, Game, GameState, Outcome, Phase, Score, reduce};
pub use hand::{HandCard, draw_hand};
pub use message::{MESSAGES, Prompt, select_message};
pub use options::GameOptions;
pub use shuffle::shuffle;
