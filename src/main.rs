//! WordGuessr - CLI
//!
//! Terminal word-guessing game with categories, localization, and an
//! advisory update notice.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordguessr::{
    commands::{GameContext, run_categories, run_check_update, run_play},
    core::RoundRules,
    i18n::{self, Catalog, DEFAULT_LANGUAGE, LANGUAGES_DIR, SETTINGS_FILE},
    output::display,
    version::LOCAL_VERSION_FILE,
};

/// Tries threshold below which whole-word guessing unlocks, when the
/// lockout variant is enabled
const WORD_GUESS_UNLOCK_TRIES: u32 = 10;

#[derive(Parser)]
#[command(
    name = "wordguessr",
    about = "Terminal word-guessing game: pick a category, beat the tries counter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding categories.txt and wordlists/
    #[arg(short, long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Language code override (skips language.ini)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Skip the startup update notice
    #[arg(long, global = true)]
    no_update_check: bool,

    /// Disallow whole-word guesses until fewer than 10 tries remain
    #[arg(long, global = true)]
    lock_word_guesses: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// List categories and their word counts
    Categories,

    /// Check whether a newer version has been released
    CheckUpdate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(cli.language.as_deref());
    let ctx = GameContext {
        catalog,
        data_dir: cli.data_dir,
        version_file: PathBuf::from(LOCAL_VERSION_FILE),
        rules: RoundRules {
            accept_space: true,
            word_guess_unlock_below: cli.lock_word_guesses.then_some(WORD_GUESS_UNLOCK_TRIES),
        },
        check_updates: !cli.no_update_check,
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&ctx),
        Commands::Categories => run_categories(&ctx),
        Commands::CheckUpdate => {
            run_check_update(&ctx);
            Ok(())
        }
    }
}

/// Resolve the language and load its catalog
///
/// Order: CLI override, then `language.ini` (created with the default
/// when absent), then the default. A catalog file that fails to load
/// falls back to the embedded English one, with a warning unless the
/// language already was English.
fn load_catalog(override_code: Option<&str>) -> Catalog {
    let code = match override_code {
        Some(code) => code.to_string(),
        None => match i18n::load_or_init(Path::new(SETTINGS_FILE)) {
            Ok(setting) => {
                if setting.created {
                    display::warn(Catalog::embedded_english().get("language_ini_not_found"));
                }
                setting.code
            }
            Err(err) => {
                display::warn(&format!("Could not read {SETTINGS_FILE}: {err}"));
                DEFAULT_LANGUAGE.to_string()
            }
        },
    };

    match Catalog::load(Path::new(LANGUAGES_DIR), &code) {
        Ok(catalog) => catalog,
        Err(_) => {
            let fallback = Catalog::embedded_english();
            if code != DEFAULT_LANGUAGE {
                display::warn(&fallback.format("translation_file_not_found", &[&code]));
            }
            fallback
        }
    }
}
