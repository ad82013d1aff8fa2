//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::error::OptionsError;

/// Configuration options for a memory game.
///
/// The defaults reproduce the classic three-level game: start with three
/// cards, get six at 3 points, nine at 9 points, and win at 18.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use memrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_sizes(4, 8, 12)
///     .with_milestones(4, 12, 24);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Hand size dealt at the start of a round.
    pub starting_hand_size: usize,
    /// Hand size dealt when the first milestone is reached.
    pub second_hand_size: usize,
    /// Hand size dealt when the second milestone is reached.
    pub third_hand_size: usize,
    /// Score that deals the second hand.
    pub first_milestone: u32,
    /// Score that deals the third hand.
    pub second_milestone: u32,
    /// Score that wins the game.
    pub winning_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_hand_size: 3,
            second_hand_size: 6,
            third_hand_size: 9,
            first_milestone: 3,
            second_milestone: 9,
            winning_score: 18,
        }
    }
}

impl GameOptions {
    /// Sets the three hand sizes of a round.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_sizes(2, 4, 8);
    /// assert_eq!(options.starting_hand_size, 2);
    /// assert_eq!(options.third_hand_size, 8);
    /// ```
    #[must_use]
    pub const fn with_hand_sizes(mut self, starting: usize, second: usize, third: usize) -> Self {
        self.starting_hand_size = starting;
        self.second_hand_size = second;
        self.third_hand_size = third;
        self
    }

    /// Sets the score milestones.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_milestones(2, 6, 12);
    /// assert_eq!(options.second_milestone, 6);
    /// assert_eq!(options.winning_score, 12);
    /// ```
    #[must_use]
    pub const fn with_milestones(mut self, first: u32, second: u32, winning: u32) -> Self {
        self.first_milestone = first;
        self.second_milestone = second;
        self.winning_score = winning;
        self
    }

    /// Sets the score that wins the game.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(16);
    /// assert_eq!(options.winning_score, 16);
    /// assert!(options.validate().is_ok());
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Returns the number of cards dealt over a full round.
    #[must_use]
    pub const fn cards_per_round(&self) -> usize {
        self.starting_hand_size
            .saturating_add(self.second_hand_size)
            .saturating_add(self.third_hand_size)
    }

    /// Checks that a full round can be won with one deck.
    ///
    /// Each hand must hold at least as many cards as the points needed to
    /// reach the next milestone, since every point takes a card that has not
    /// been picked yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand size is zero, the milestones are not
    /// strictly increasing, a hand is too small to reach its milestone, or
    /// the three hands need more than one deck.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.starting_hand_size == 0 || self.second_hand_size == 0 || self.third_hand_size == 0
        {
            return Err(OptionsError::ZeroHandSize);
        }

        if self.first_milestone == 0
            || self.first_milestone >= self.second_milestone
            || self.second_milestone >= self.winning_score
        {
            return Err(OptionsError::MilestonesOutOfOrder);
        }

        let stages = [
            (self.starting_hand_size, self.first_milestone),
            (
                self.second_hand_size,
                self.second_milestone - self.first_milestone,
            ),
            (
                self.third_hand_size,
                self.winning_score - self.second_milestone,
            ),
        ];
        let mut stage = 0;
        while stage < stages.len() {
            let (hand_size, points) = stages[stage];
            if hand_size < points as usize {
                return Err(OptionsError::HandTooSmall { hand_size, points });
            }
            stage += 1;
        }

        let required = self.cards_per_round();
        if required > DECK_SIZE {
            return Err(OptionsError::NotEnoughCards {
                required,
                available: DECK_SIZE,
            });
        }

        Ok(())
    }
}
