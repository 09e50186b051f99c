//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::MAX_ATTEMPTS;
use crate::game::{Game, SessionStatus};
use crate::output::{print_board, print_outcome, print_statistics};
use crate::storage::StatsStore;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// secret cannot be drawn.
pub fn run_simple<S: StatsStore, R: Rng>(game: &mut Game<S, R>) -> Result<()> {
    let stdin = io::stdin();
    play(game, &mut stdin.lock())
}

fn play<S: StatsStore, R: Rng>(game: &mut Game<S, R>, input: &mut impl BufRead) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 6 tries.");
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        " G ".black().on_green(),
        " Y ".black().on_yellow(),
        " - ".white().on_bright_black()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    loop {
        let prompt = format!("Guess {}/{MAX_ATTEMPTS}", game.session().attempts_used() + 1);

        let Some(line) = get_user_input(&prompt, input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.new_session()?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "stats" => {
                print_statistics(&game.current_statistics());
                continue;
            }
            _ => {}
        }

        match game.guess(&line) {
            Ok(outcome) => {
                print_board(game.session());

                if outcome.status != SessionStatus::InProgress {
                    print_outcome(game.session());
                    print_statistics(&game.current_statistics());

                    let answer = get_user_input("Play again? (yes/no)", input)?;
                    match answer.as_deref().map(str::to_lowercase).as_deref() {
                        Some("yes" | "y") => {
                            game.new_session()?;
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Err(err) if err.is_rejected_guess() => {
                println!("❌ {err}\n");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str, input: &mut impl BufRead) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::WordSource;
    use crate::storage::MemoryStore;
    use crate::wordlists::Vocabulary;
    use std::io::Cursor;

    fn media_game() -> Game<MemoryStore> {
        let vocabulary = Vocabulary::new(vec![Word::new("media").unwrap()]);
        Game::new(WordSource::seeded(vocabulary, 0), MemoryStore::new()).unwrap()
    }

    #[test]
    fn scripted_win_then_quit() {
        let mut game = media_game();
        let mut input = Cursor::new("abc\npiano\nmedia\nno\n");

        play(&mut game, &mut input).unwrap();

        assert_eq!(game.session().status(), SessionStatus::Won);
        assert_eq!(game.session().attempts_used(), 2);
        assert_eq!(game.current_statistics().games_played, 1);
    }

    #[test]
    fn scripted_new_game_discards_progress() {
        let mut game = media_game();
        let mut input = Cursor::new("piano\nnew\nquit\n");

        play(&mut game, &mut input).unwrap();

        assert_eq!(game.session().attempts_used(), 0);
        assert_eq!(game.current_statistics().games_played, 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut game = media_game();
        let mut input = Cursor::new("");
        play(&mut game, &mut input).unwrap();
    }
}
