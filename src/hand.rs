//! Hand cards and the hand generator.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, Suit};
use crate::deck::Deck;
use crate::error::DealError;

/// A card in the player's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandCard {
    /// The deck identity of the card.
    pub id: CardId,
    /// The suit of the card.
    pub suit: Suit,
    /// The number of the card.
    pub number: u8,
    /// Whether the player has already picked this card.
    pub picked: bool,
}

impl HandCard {
    /// Creates an unpicked hand card for a deck card.
    #[must_use]
    pub const fn new(id: CardId, card: Card) -> Self {
        Self {
            id,
            suit: card.suit,
            number: card.number,
            picked: false,
        }
    }

    /// Returns the underlying card.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card::new(self.suit, self.number)
    }
}

/// Draws `hand_size` undrawn cards at random and marks them drawn.
///
/// Selection is a partial Fisher–Yates over the undrawn ids, so it always
/// finishes in one pass over the deck.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if fewer than `hand_size` cards are
/// undrawn. The deck is left untouched in that case.
///
/// # Example
///
/// ```
/// use memrs::{Deck, draw_hand};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let hand = draw_hand(&mut deck, 6, &mut rng).unwrap();
/// assert_eq!(hand.len(), 6);
/// assert_eq!(deck.drawn_count(), 6);
/// ```
pub fn draw_hand<R: Rng + ?Sized>(
    deck: &mut Deck,
    hand_size: usize,
    rng: &mut R,
) -> Result<Vec<HandCard>, DealError> {
    let mut pool: Vec<(CardId, Card)> =
        deck.iter().filter(|&(id, _)| !deck.is_drawn(id)).collect();
    if pool.len() < hand_size {
        return Err(DealError::NotEnoughCards {
            requested: hand_size,
            available: pool.len(),
        });
    }

    let (chosen, _) = pool.partial_shuffle(rng, hand_size);

    let hand: Vec<HandCard> = chosen
        .iter()
        .map(|&(id, card)| {
            let newly_drawn = deck.mark_drawn(id);
            debug_assert!(newly_drawn, "card {id} was dealt twice");
            HandCard::new(id, card)
        })
        .collect();

    tracing::debug!(hand_size, remaining = deck.undrawn_count(), "dealt hand");

    Ok(hand)
}
