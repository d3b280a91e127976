//! WordGuessr
//!
//! A terminal word-guessing game: pick a category, get a random word,
//! and guess letters (or the whole word) before the tries run out.
//!
//! # Quick Start
//!
//! ```rust
//! use wordguessr::core::{GameOutcome, GuessState, RoundRules, Word};
//!
//! let word = Word::new("cat").unwrap();
//! let mut state = GuessState::new(word, RoundRules::default());
//!
//! state.submit("c");
//! state.submit("a");
//! state.submit("t");
//! assert_eq!(state.outcome(), GameOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Category and word-list loading
pub mod wordlists;

// Localization
pub mod i18n;

// Advisory update check
pub mod version;

// Terminal output formatting
pub mod output;

// Command implementations
pub mod commands;
