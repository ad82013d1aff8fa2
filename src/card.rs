//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the symbol used when rendering the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is rendered in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The number of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub number: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the number. Cards built by
    /// [`Deck`](crate::Deck) always hold a number in 1..=13.
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.suit.symbol())
    }
}

/// Identity of a card: its position in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u8);

impl CardId {
    /// Creates an id from a deck position.
    ///
    /// Positions outside `0..DECK_SIZE` are accepted but never resolve to a
    /// card.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self(position)
    }

    /// Returns the deck position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards per suit.
pub const SUIT_SIZE: u8 = 13;
