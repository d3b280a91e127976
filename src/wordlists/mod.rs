//! Category and word-list loading
//!
//! Word lists live on disk, one file per category, so players can edit
//! or add categories without rebuilding.

pub mod loader;

pub use loader::{
    WordlistError, choose_word, list_categories, load_words, sanitize_filename, word_list_path,
};
