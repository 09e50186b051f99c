//! Display functions for game events

use super::formatters::{create_progress_bar, guess_tiles};
use crate::game::{Session, SessionStatus, StatsSnapshot};
use colored::Colorize;

/// Print every guess of the session as colored tiles
pub fn print_board(session: &Session) {
    println!();
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "  {}  {}",
            (i + 1).to_string().bright_black(),
            guess_tiles(&record.guess, record.feedback)
        );
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_outcome(session: &Session) {
    let attempts = session.attempts_used();
    println!("{}", "═".repeat(60).bright_cyan());
    match session.status() {
        SessionStatus::Won => {
            println!(
                "{}",
                format!(
                    "  🎉 You won in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        SessionStatus::Lost => {
            println!(
                "  {} {}",
                "You lost! The word was:".red().bold(),
                session.secret().text().bright_yellow().bold()
            );
        }
        SessionStatus::InProgress => {}
    }

    println!("\n  Guess history:");
    for record in session.history() {
        println!(
            "    {} {}",
            record.guess.text().bright_white().bold(),
            record.feedback.to_emoji()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the statistics panel
pub fn print_statistics(stats: &StatsSnapshot) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win %:           [{}] {}",
        create_progress_bar(f64::from(stats.win_percentage), 100.0, 20).green(),
        format!("{}%", stats.win_percentage).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!();
}
