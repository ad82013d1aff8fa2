//! The fixed 52-card pool with per-card drawn tracking.

use alloc::vec::Vec;

use crate::card::{Card, CardId, DECK_SIZE, SUIT_SIZE, Suit};

/// A standard deck where every card carries a drawn flag.
///
/// Cards never leave the deck. Dealing only flips their drawn flag, and
/// [`Deck::reset`] flips every flag back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    drawn: [bool; DECK_SIZE],
}

impl Deck {
    /// Creates a full deck with no card drawn.
    ///
    /// Cards are ordered suit by suit (hearts, diamonds, spades, clubs), each
    /// suit from 1 to 13, so `CardId::new(0)` is the ace of hearts.
    #[must_use]
    pub fn new() -> Self {
        let cards = core::array::from_fn(|position| {
            let suit = Suit::ALL[position / SUIT_SIZE as usize];
            let number = (position % SUIT_SIZE as usize) as u8 + 1;
            Card::new(suit, number)
        });

        Self {
            cards,
            drawn: [false; DECK_SIZE],
        }
    }

    /// Clears every drawn flag.
    pub fn reset(&mut self) {
        self.drawn = [false; DECK_SIZE];
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Card> {
        self.cards.get(id.index()).copied()
    }

    /// Returns whether the card has been drawn.
    ///
    /// Unknown ids are reported as not drawn.
    #[must_use]
    pub fn is_drawn(&self, id: CardId) -> bool {
        self.drawn.get(id.index()).copied().unwrap_or(false)
    }

    /// Returns the number of drawn cards.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.iter().filter(|&&drawn| drawn).count()
    }

    /// Returns the number of cards still available to draw.
    #[must_use]
    pub fn undrawn_count(&self) -> usize {
        DECK_SIZE - self.drawn_count()
    }

    /// Returns the ids of every undrawn card in deck order.
    #[must_use]
    pub fn undrawn_ids(&self) -> Vec<CardId> {
        self.iter()
            .filter(|(id, _)| !self.is_drawn(*id))
            .map(|(id, _)| id)
            .collect()
    }

    /// Iterates over every card with its id.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(position, &card)| (CardId::new(position as u8), card))
    }

    /// Marks a card as drawn. Returns `false` if it was already drawn or the
    /// id is unknown.
    pub(crate) fn mark_drawn(&mut self, id: CardId) -> bool {
        match self.drawn.get_mut(id.index()) {
            Some(drawn) if !*drawn => {
                *drawn = true;
                true
            }
            _ => false,
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
