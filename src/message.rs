//! Player-facing prompts derived from the game state.

use crate::options::GameOptions;

/// Messages shown while the game goes well, indexed by progress.
pub const MESSAGES: [&str; 8] = [
    "Pick a card, and remember which card you picked.",
    "Now pick a different card.",
    "Nicely done! There's one more you haven't picked...",
    "Fantastic! I'll deal you a new hand. Can you do it with more cards?",
    "Good! Keep going...",
    "Level 3! Can you do it one more time with an even bigger hand?",
    "Your memory is incredible. Keep going!",
    "You beat the game!",
];

/// Message shown after picking a card twice.
pub const ALREADY_PICKED: &str = "You already picked that card!";

const FIRST_PICK: usize = 0;
const NEXT_PICK: usize = 1;
const LAST_PICK: usize = 2;
const NEW_HAND: usize = 3;
const GOOD: usize = 4;
const LEVEL_THREE: usize = 5;
const INCREDIBLE: usize = 6;
const WON: usize = 7;

/// Points into the second hand at which the third level is first announced.
const EARLY_LEVEL_THREE: u32 = 2;

/// A prompt for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prompt {
    /// Text to display.
    pub text: &'static str,
    /// Whether a "play again" action should be offered.
    pub offers_reset: bool,
}

impl Prompt {
    const fn info(text: &'static str) -> Self {
        Self {
            text,
            offers_reset: false,
        }
    }

    const fn with_reset(text: &'static str) -> Self {
        Self {
            text,
            offers_reset: true,
        }
    }
}

/// Selects the prompt for the given playability and current score.
///
/// Before the first milestone the prompts walk the player through the first
/// hand, and the milestone itself announces the new hand. With the default
/// options this maps scores 0 to 5 straight onto [`MESSAGES`].
///
/// A won game always shows the winning message, even though play has
/// stopped. Any other stopped game shows the "already picked" message.
///
/// # Example
///
/// ```
/// use memrs::{GameOptions, select_message};
///
/// let options = GameOptions::default();
/// assert_eq!(select_message(true, 0, &options).text, memrs::MESSAGES[0]);
///
/// let won = select_message(false, 18, &options);
/// assert_eq!(won.text, "You beat the game!");
/// assert!(won.offers_reset);
/// ```
#[must_use]
pub const fn select_message(can_play: bool, current: u32, options: &GameOptions) -> Prompt {
    if current == options.winning_score {
        return Prompt::with_reset(MESSAGES[WON]);
    }

    if !can_play {
        return Prompt::with_reset(ALREADY_PICKED);
    }

    let first = options.first_milestone;
    let index = if current == 0 {
        FIRST_PICK
    } else if current.saturating_add(1) < first {
        NEXT_PICK
    } else if current < first {
        LAST_PICK
    } else if current == first {
        NEW_HAND
    } else if current < options.second_milestone {
        if current - first == EARLY_LEVEL_THREE {
            LEVEL_THREE
        } else {
            GOOD
        }
    } else if current == options.second_milestone {
        LEVEL_THREE
    } else if current < options.winning_score {
        INCREDIBLE
    } else {
        return Prompt::with_reset(MESSAGES[WON]);
    };

    Prompt::info(MESSAGES[index])
}
