//! Message catalogs
//!
//! A catalog is one JSON object per language mapping message keys to
//! templates. Missing keys fall back to the key itself, so an
//! incomplete translation degrades to readable English-ish text rather
//! than crashing.

use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Language used when nothing else is configured or loadable
pub const DEFAULT_LANGUAGE: &str = "en";

/// Directory holding one `<code>.json` catalog per language
pub const LANGUAGES_DIR: &str = "languages";

const EMBEDDED_EN: &str = include_str!("../../languages/en.json");

/// Error type for catalog loading
#[derive(Debug)]
pub enum CatalogError {
    FileMissing(PathBuf),
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileMissing(path) => {
                write!(f, "Translation file {} does not exist", path.display())
            }
            Self::Io(path, err) => write!(f, "Could not read {}: {err}", path.display()),
            Self::Parse(path, err) => write!(f, "Could not parse {}: {err}", path.display()),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Parse(_, err) => Some(err),
            Self::FileMissing(_) => None,
        }
    }
}

/// A loaded message catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: FxHashMap<String, String>,
}

impl Catalog {
    /// The English catalog compiled into the binary
    ///
    /// If the embedded JSON were ever malformed the catalog comes back
    /// empty and every lookup echoes its key, which still keeps the
    /// game playable.
    #[must_use]
    pub fn embedded_english() -> Self {
        let messages = serde_json::from_str(EMBEDDED_EN).unwrap_or_default();
        Self { messages }
    }

    /// Load the catalog for a language code from `<dir>/<code>.json`
    ///
    /// # Errors
    /// Returns `CatalogError` when the file is missing, unreadable, or
    /// not a JSON object of strings.
    pub fn load(languages_dir: &Path, code: &str) -> Result<Self, CatalogError> {
        let path = languages_dir.join(format!("{code}.json"));
        let content = fs::read_to_string(&path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                CatalogError::FileMissing(path.clone())
            } else {
                CatalogError::Io(path.clone(), err)
            }
        })?;

        let messages =
            serde_json::from_str(&content).map_err(|err| CatalogError::Parse(path, err))?;
        Ok(Self { messages })
    }

    /// Look up a message template, falling back to the key itself
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map_or(key, String::as_str)
    }

    /// Look up a template and substitute positional arguments
    ///
    /// `{}` placeholders consume arguments in order; `{0}`, `{1}`, ...
    /// select by index. Placeholders without a matching argument are
    /// left verbatim.
    #[must_use]
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = self.get(key);
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars();
        let mut next_positional = 0;

        while let Some(c) = chars.next() {
            if c != '{' {
                out.push(c);
                continue;
            }

            let mut spec = String::new();
            let mut closed = false;
            for d in chars.by_ref() {
                if d == '}' {
                    closed = true;
                    break;
                }
                spec.push(d);
            }

            if !closed {
                out.push('{');
                out.push_str(&spec);
                break;
            }

            let index = if spec.is_empty() {
                let i = next_positional;
                next_positional += 1;
                Some(i)
            } else {
                spec.parse::<usize>().ok()
            };

            if let Some(arg) = index.and_then(|i| args.get(i)) {
                out.push_str(arg);
            } else {
                out.push('{');
                out.push_str(&spec);
                out.push('}');
            }
        }

        out
    }
}
