//! Display functions for game events
//!
//! Every [`GuessResult`] and prompt is rendered through the message
//! catalog, so the core never formats player-facing text itself.

use super::formatters::{capitalize, join_guessed};
use crate::core::{GameOutcome, GuessResult, GuessState};
use crate::i18n::Catalog;
use crate::version::{FetchError, RELEASE_PAGE_URL, VersionStatus};
use colored::Colorize;

/// Print the round banner
pub fn print_welcome(catalog: &Catalog) {
    println!("{}", catalog.get("welcome_message").blue());
}

/// Print the remaining-tries line
///
/// The first print of a round is emphasized; later ones are dimmed so
/// the feedback line above them stands out.
pub fn print_tries(catalog: &Catalog, tries: u32, emphasized: bool) {
    let line = catalog.format("tries_left", &[&tries.to_string()]);
    if emphasized {
        println!("{}", line.truecolor(252, 144, 3));
    } else {
        println!("{}", line.truecolor(138, 138, 138));
    }
}

/// Print the partially-revealed word, followed by a blank line
pub fn print_progress(state: &GuessState) {
    println!("{}\n", state.render_progress());
}

/// Print the guessed-characters line, once anything has been guessed
pub fn print_guessed(catalog: &Catalog, state: &GuessState) {
    if let Some(line) = guessed_line(catalog, state) {
        println!("{}", line.truecolor(138, 138, 138));
    }
}

/// The guessed-characters line, or `None` before the first guess
#[must_use]
pub fn guessed_line(catalog: &Catalog, state: &GuessState) -> Option<String> {
    let guessed = state.guessed_chars();
    if guessed.is_empty() {
        return None;
    }
    Some(catalog.format("guessed_so_far", &[&join_guessed(&guessed)]))
}

/// Print the feedback line for one submitted guess
pub fn print_guess_feedback(catalog: &Catalog, result: &GuessResult, lock_threshold: Option<u32>) {
    match result {
        GuessResult::RejectedInvalid => {
            println!("{}", catalog.get("invalid_guess").red());
        }
        GuessResult::AlreadyGuessed(c) => {
            println!(
                "{}",
                catalog.format("already_guessed", &[&c.to_string()]).yellow()
            );
        }
        GuessResult::CorrectLetter(c) => {
            println!(
                "{}",
                catalog.format("good_guess", &[&c.to_string()]).green()
            );
        }
        GuessResult::WrongLetter(c) => {
            println!(
                "{}",
                catalog.format("not_in_word", &[&c.to_string()]).red()
            );
        }
        GuessResult::CorrectWord => {
            // The win banner is printed by print_round_end.
        }
        GuessResult::WrongWord(text) => {
            println!("{}", catalog.format("not_the_word", &[text]).red());
        }
        GuessResult::WordGuessLockedOut => {
            let threshold = lock_threshold.unwrap_or_default().to_string();
            println!(
                "{}",
                catalog.format("word_guess_locked", &[&threshold]).red()
            );
        }
    }
}

/// Print the end-of-round banner
pub fn print_round_end(catalog: &Catalog, state: &GuessState) {
    match state.outcome() {
        GameOutcome::Won => {
            println!(
                "{}",
                catalog
                    .format("congratulations", &[state.word().text()])
                    .green()
            );
        }
        GameOutcome::Lost => {
            println!(
                "{}",
                catalog.format("out_of_tries", &[state.word().text()]).red()
            );
        }
        GameOutcome::InProgress => {}
    }
}

/// Print the numbered category menu
pub fn print_category_menu(catalog: &Catalog, categories: &[String]) {
    println!("{}", catalog.get("choose_category"));
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, capitalize(category));
    }
}

/// Print the outcome of a version check
pub fn print_version_status(catalog: &Catalog, status: &VersionStatus) {
    match status {
        VersionStatus::UpToDate(_) => {
            println!("{}", catalog.get("up_to_date"));
        }
        VersionStatus::UpdateAvailable { local, remote } => {
            println!(
                "{}",
                catalog
                    .format("update_available", &[remote, local])
                    .yellow()
            );
            println!("{}", catalog.format("release_page", &[RELEASE_PAGE_URL]));
        }
        VersionStatus::NoLocalVersion => {
            warn(catalog.get("local_version_missing"));
        }
    }
}

/// Print a version-check failure as a warning and move on
pub fn print_version_failure(catalog: &Catalog, err: &FetchError) {
    warn(&catalog.format("version_check_failed", &[&err.to_string()]));
}

/// Print a non-fatal warning to stderr
pub fn warn(message: &str) {
    eprintln!("{}", message.yellow());
}

/// Print an error to stderr
pub fn error(message: &str) {
    eprintln!("{}", message.red());
}
