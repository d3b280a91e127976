//! Guess classification
//!
//! Raw player input is parsed into a tagged variant before any state is
//! touched, so the state machine can match exhaustively instead of
//! branching on string lengths.

use std::fmt;

/// A classified guess
///
/// Produced by [`Guess::parse`]; the round state machine only ever sees
/// one of these two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single guessable character (letter, digit, or space)
    Letter(char),
    /// A whole-word attempt, uppercased, same length as the secret word
    Whole(String),
}

/// Error type for unparseable guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    UnguessableCharacter(char),
    WrongLength { got: usize, expected: usize },
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess must not be empty"),
            Self::UnguessableCharacter(c) => {
                write!(f, "'{c}' is not a guessable character")
            }
            Self::WrongLength { got, expected } => {
                write!(
                    f,
                    "Guess must be one character or {expected} characters, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Classify raw input against a word of `word_len` characters
    ///
    /// The input is uppercased first, so guessing is case-insensitive.
    /// A single alphanumeric character (or a single space, when
    /// `accept_space` is set) is a letter guess; this takes precedence
    /// over the whole-word shape for one-character words. Input whose
    /// character count equals `word_len` is a whole-word guess.
    ///
    /// # Errors
    /// Returns a `GuessError` when the input is empty, a single
    /// unguessable character, or any other length than one or
    /// `word_len`.
    pub fn parse(input: &str, word_len: usize, accept_space: bool) -> Result<Self, GuessError> {
        let input = input.to_uppercase();
        let len = input.chars().count();

        if len == 0 {
            return Err(GuessError::Empty);
        }

        if len == 1 {
            let c = input.chars().next().unwrap_or_default();
            if c.is_alphanumeric() || (accept_space && c == ' ') {
                return Ok(Self::Letter(c));
            }
            // A lone unguessable character can still be a whole-word
            // attempt against a one-character word.
            if word_len == 1 {
                return Ok(Self::Whole(input));
            }
            return Err(GuessError::UnguessableCharacter(c));
        }

        if len == word_len {
            return Ok(Self::Whole(input));
        }

        Err(GuessError::WrongLength {
            got: len,
            expected: word_len,
        })
    }
}
