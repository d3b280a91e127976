//! Category listing command

use super::GameContext;
use super::play::{localize_categories_error, localize_wordlist_error};
use crate::output::formatters::capitalize;
use crate::wordlists;
use anyhow::Result;

/// Print every category with its word count
///
/// Categories whose word list is missing or empty are still listed,
/// with the problem shown instead of a count.
///
/// # Errors
/// Returns an error when the category list itself cannot be loaded.
pub fn run_categories(ctx: &GameContext) -> Result<()> {
    let categories = match wordlists::list_categories(&ctx.data_dir) {
        Ok(categories) => categories,
        Err(err) => anyhow::bail!("{}", localize_categories_error(&ctx.catalog, &err)),
    };

    println!("{}", ctx.catalog.get("choose_category"));
    for (i, category) in categories.iter().enumerate() {
        match wordlists::load_words(&ctx.data_dir, category) {
            Ok(words) => {
                let count = ctx
                    .catalog
                    .format("word_count", &[&words.len().to_string()]);
                println!("{}. {} ({count})", i + 1, capitalize(category));
            }
            Err(err) => {
                println!(
                    "{}. {} ({})",
                    i + 1,
                    capitalize(category),
                    localize_wordlist_error(&ctx.catalog, &err)
                );
            }
        }
    }

    Ok(())
}
