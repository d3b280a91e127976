//! Core domain types for the guessing game
//!
//! Contains the secret-word representation, guess parsing, and the
//! round state machine.

pub mod guess;
pub mod state;
pub mod word;

pub use guess::{Guess, GuessError};
pub use state::{GameOutcome, GuessResult, GuessState, RoundRules};
pub use word::{Word, WordError};
