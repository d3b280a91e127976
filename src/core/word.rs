//! Secret-word representation
//!
//! A Word stores an uppercase word or phrase along with its distinct
//! character sets for fast membership and win checks.

use rustc_hash::FxHashSet;
use std::fmt;

/// A secret word or phrase, normalized to uppercase
///
/// Words may contain letters, digits, spaces, and punctuation. All
/// comparisons against guesses are case-insensitive because both sides
/// are uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: FxHashSet<char>,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is trimmed and uppercased. Interior spaces are kept so
    /// multi-word phrases stay intact.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if the trimmed input is empty.
    ///
    /// # Examples
    /// ```
    /// use wordguessr::core::Word;
    ///
    /// let word = Word::new("giraffe").unwrap();
    /// assert_eq!(word.text(), "GIRAFFE");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars: FxHashSet<char> = text.chars().collect();
        let letters = chars.iter().copied().filter(|c| c.is_alphabetic()).collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the word has zero characters
    ///
    /// Always false for a constructed Word; present for API completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific character
    #[inline]
    #[must_use]
    pub fn has_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The distinct alphabetic characters of the word
    ///
    /// Guessing all of these wins the round. Digits and punctuation are
    /// excluded because the progress display always reveals them.
    #[inline]
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
