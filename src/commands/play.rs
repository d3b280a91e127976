//! The game loop
//!
//! Category menu, rounds of guessing, and the play-again prompts. All
//! input is read line by line from stdin; reaching end of input anywhere
//! quits cleanly.

use super::GameContext;
use crate::core::{GameOutcome, GuessState, Word};
use crate::i18n::Catalog;
use crate::output::display;
use crate::wordlists::{self, WordlistError};
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run the interactive game
///
/// # Errors
/// Returns an error when the category list cannot be loaded or stdin
/// and stdout stop working; everything else is handled by re-prompting.
pub fn run_play(ctx: &GameContext) -> Result<()> {
    if ctx.check_updates {
        super::startup_notice(ctx);
    }

    let categories = match wordlists::list_categories(&ctx.data_dir) {
        Ok(categories) => categories,
        Err(err) => anyhow::bail!("{}", localize_categories_error(&ctx.catalog, &err)),
    };

    let Some(mut words) = choose_category(ctx, &categories)? else {
        return Ok(());
    };

    loop {
        let word = wordlists::choose_word(&words)
            .cloned()
            .context("category unexpectedly empty")?;

        if play_round(ctx, word)?.is_none() {
            return Ok(());
        }

        let Some(again) = prompt(&ctx.catalog, "play_again")? else {
            return Ok(());
        };
        if !is_yes(&again) {
            println!("{}", ctx.catalog.get("thanks_for_playing"));
            return Ok(());
        }

        let Some(switch) = prompt(&ctx.catalog, "choose_new_category")? else {
            return Ok(());
        };
        if is_yes(&switch) {
            match choose_category(ctx, &categories)? {
                Some(new_words) => words = new_words,
                None => return Ok(()),
            }
        }
    }
}

/// One round from fresh state to Won/Lost
///
/// Returns `None` when stdin ends mid-round.
fn play_round(ctx: &GameContext, word: Word) -> Result<Option<GameOutcome>> {
    let mut state = GuessState::new(word, ctx.rules.clone());

    display::print_welcome(&ctx.catalog);
    display::print_tries(&ctx.catalog, state.tries_remaining(), true);
    display::print_progress(&state);

    while !state.is_over() {
        let Some(input) = prompt(&ctx.catalog, "guess_prompt")? else {
            return Ok(None);
        };

        let result = state.submit(&input);
        display::print_guess_feedback(&ctx.catalog, &result, ctx.rules.word_guess_unlock_below);

        // A losing guess still echoes the final counter and progress,
        // so the player sees the zero before the round-end banner.
        if echo_state_after(state.outcome()) {
            display::print_tries(&ctx.catalog, state.tries_remaining(), false);
            display::print_guessed(&ctx.catalog, &state);
            display::print_progress(&state);
        }
    }

    display::print_round_end(&ctx.catalog, &state);
    Ok(Some(state.outcome()))
}

/// Show the menu and keep prompting until a valid, non-empty category
/// is picked
///
/// Malformed numbers, out-of-range choices, and categories whose word
/// list is missing or empty all re-prompt instead of crashing. Returns
/// `None` when stdin ends.
fn choose_category(ctx: &GameContext, categories: &[String]) -> Result<Option<Vec<Word>>> {
    display::print_category_menu(&ctx.catalog, categories);

    loop {
        let Some(input) = prompt(&ctx.catalog, "category_choice_prompt")? else {
            return Ok(None);
        };

        let Ok(choice) = input.trim().parse::<usize>() else {
            display::error(ctx.catalog.get("invalid_input"));
            continue;
        };

        if choice == 0 || choice > categories.len() {
            display::error(ctx.catalog.get("invalid_choice"));
            continue;
        }

        match wordlists::load_words(&ctx.data_dir, &categories[choice - 1]) {
            Ok(words) => return Ok(Some(words)),
            Err(err) => {
                display::error(&localize_wordlist_error(&ctx.catalog, &err));
            }
        }
    }
}

/// Map a category-list error onto the catalog messages
pub(super) fn localize_categories_error(catalog: &Catalog, err: &WordlistError) -> String {
    match err {
        WordlistError::FileMissing(path) => {
            catalog.format("categories_file_not_found", &[&path.display().to_string()])
        }
        WordlistError::Empty(_) => catalog.get("no_categories_available").to_string(),
        WordlistError::Io(..) => err.to_string(),
    }
}

/// Map a word-list error onto the catalog messages
pub(super) fn localize_wordlist_error(catalog: &Catalog, err: &WordlistError) -> String {
    match err {
        WordlistError::FileMissing(path) => {
            catalog.format("words_file_not_found", &[&path.display().to_string()])
        }
        WordlistError::Empty(_) => catalog.get("no_words_available").to_string(),
        WordlistError::Io(..) => err.to_string(),
    }
}

/// Print a localized prompt and read one line
///
/// Only the trailing newline is stripped, so a guess of a single space
/// survives. Returns `None` at end of input.
fn prompt(catalog: &Catalog, key: &str) -> Result<Option<String>> {
    print!("{}", catalog.get(key));
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Whether the tries counter and progress are reprinted after a guess
///
/// Everything except a win: a winning guess goes straight to the
/// banner, while a losing one still shows the exhausted counter first.
fn echo_state_after(outcome: GameOutcome) -> bool {
    outcome != GameOutcome::Won
}

fn is_yes(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_echo_follows_every_guess_except_a_win() {
        assert!(echo_state_after(GameOutcome::InProgress));
        assert!(echo_state_after(GameOutcome::Lost));
        assert!(!echo_state_after(GameOutcome::Won));
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes("Y"));
        assert!(is_yes(" yes "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yeah"));
    }

    #[test]
    fn wordlist_errors_localize() {
        let catalog = Catalog::embedded_english();

        let missing = WordlistError::FileMissing("data/wordlists/x.txt".into());
        assert!(localize_wordlist_error(&catalog, &missing).contains("data/wordlists/x.txt"));

        let empty = WordlistError::Empty("data/wordlists/x.txt".into());
        assert_eq!(
            localize_wordlist_error(&catalog, &empty),
            catalog.get("no_words_available")
        );
    }

    #[test]
    fn category_errors_localize() {
        let catalog = Catalog::embedded_english();

        let missing = WordlistError::FileMissing("data/categories.txt".into());
        assert!(localize_categories_error(&catalog, &missing).contains("data/categories.txt"));

        let empty = WordlistError::Empty("data/categories.txt".into());
        assert_eq!(
            localize_categories_error(&catalog, &empty),
            catalog.get("no_categories_available")
        );
    }
}
