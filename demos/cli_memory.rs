//! CLI memory game example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use memrs::{Game, GameOptions, HandCard, Outcome};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Memory CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Options error: {err}");
            return;
        }
    };

    loop {
        print_table(&game);

        let prompt = game.message();
        println!("{}", prompt.text);

        if prompt.offers_reset {
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => {
                    if let Err(err) = game.reset_game() {
                        println!("Reset error: {err}");
                        break;
                    }
                    continue;
                }
                _ => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        let count = game.hand().len();
        let Some(choice) = prompt_usize(&format!("Pick a card (1-{count}): ")) else {
            println!("Goodbye.");
            break;
        };

        let Some(card) = choice
            .checked_sub(1)
            .and_then(|index| game.hand().get(index).copied())
        else {
            println!("No card at position {choice}.");
            continue;
        };

        match game.pick_card(card.id) {
            Ok(Outcome::Dealt { hand_size, .. }) => println!("New hand of {hand_size} cards!"),
            Ok(_) => {}
            Err(err) => println!("Pick error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_owned(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    let score = game.score();
    println!("\nCurrent score: {}  Best score: {}", score.current, score.best);

    let cards: Vec<String> = game
        .hand()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect();
    println!("{}", cards.join("  "));
}

fn format_card(card: &HandCard) -> String {
    let color = if card.suit.is_red() { "r" } else { "b" };
    format!("[{}{color}]", card.card())
}
