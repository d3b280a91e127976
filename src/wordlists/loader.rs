//! Word-list loading utilities
//!
//! Categories come from `<dir>/categories.txt`, one name per line; each
//! category maps to `<dir>/wordlists/<name>.txt` after file-name
//! sanitization. Lines are trimmed and uppercased on load.

use crate::core::Word;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the category list inside the data directory
pub const CATEGORIES_FILE: &str = "categories.txt";

/// Subdirectory holding one word list per category
pub const WORDLISTS_DIR: &str = "wordlists";

/// Error type for word-list access
#[derive(Debug)]
pub enum WordlistError {
    /// The file does not exist
    FileMissing(PathBuf),
    /// The file exists but yields no usable entries
    Empty(PathBuf),
    /// The file could not be read
    Io(PathBuf, io::Error),
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileMissing(path) => write!(f, "File {} does not exist", path.display()),
            Self::Empty(path) => write!(f, "File {} contains no entries", path.display()),
            Self::Io(path, err) => write!(f, "Could not read {}: {err}", path.display()),
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, WordlistError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            WordlistError::FileMissing(path.to_path_buf())
        } else {
            WordlistError::Io(path.to_path_buf(), err)
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Load the ordered category list from `<dir>/categories.txt`
///
/// Blank lines are skipped; order is preserved because the menu is
/// 1-indexed against it.
///
/// # Errors
/// Returns `WordlistError` when the file is missing, unreadable, or
/// contains no categories.
pub fn list_categories(data_dir: &Path) -> Result<Vec<String>, WordlistError> {
    let path = data_dir.join(CATEGORIES_FILE);
    let categories = read_lines(&path)?;

    if categories.is_empty() {
        return Err(WordlistError::Empty(path));
    }
    Ok(categories)
}

/// Make a category name safe to use as a file name
///
/// Lowercases the name and collapses every run of characters other than
/// letters, digits, `_`, `/`, and `.` into a single underscore, so
/// "Video Games" and "video   games" both map to `video_games`.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.to_lowercase().chars() {
        if c.is_alphanumeric() || matches!(c, '_' | '/' | '.') {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}

/// Path of the word list backing a category
#[must_use]
pub fn word_list_path(data_dir: &Path, category: &str) -> PathBuf {
    data_dir
        .join(WORDLISTS_DIR)
        .join(format!("{}.txt", sanitize_filename(category)))
}

/// Load the words of a category
///
/// Returns uppercase [`Word`]s, one per non-blank line, in file order.
///
/// # Errors
/// Returns `WordlistError` when the backing file is missing, unreadable,
/// or contains no usable words; an empty category is invalid.
pub fn load_words(data_dir: &Path, category: &str) -> Result<Vec<Word>, WordlistError> {
    let path = word_list_path(data_dir, category);
    let words: Vec<Word> = read_lines(&path)?
        .iter()
        .filter_map(|line| Word::new(line).ok())
        .collect();

    if words.is_empty() {
        return Err(WordlistError::Empty(path));
    }
    Ok(words)
}

/// Pick a word uniformly at random
///
/// Returns `None` only for an empty slice, which loading already rules
/// out.
#[must_use]
pub fn choose_word(words: &[Word]) -> Option<&Word> {
    words.choose(&mut rand::rng())
}
