//! Language settings file
//!
//! A two-line INI (`[Settings]` section, `language=<code>`) keeps the
//! chosen language across runs. When the file is absent it is created
//! with the default so the next run finds it.

use super::catalog::DEFAULT_LANGUAGE;
use std::fs;
use std::io;
use std::path::Path;

/// Default name of the settings file
pub const SETTINGS_FILE: &str = "language.ini";

/// Result of reading (or creating) the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSetting {
    /// Language code to use
    pub code: String,
    /// True when the file was absent and has just been written
    pub created: bool,
}

/// Read the language code, creating the file with the default if absent
///
/// Malformed content falls back to the default language without
/// rewriting the file.
///
/// # Errors
/// Returns an I/O error when the file exists but cannot be read, or
/// when it is absent and cannot be created.
pub fn load_or_init(path: &Path) -> io::Result<LanguageSetting> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(LanguageSetting {
            code: parse_language(&content).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            created: false,
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::write(path, format!("[Settings]\nlanguage={DEFAULT_LANGUAGE}\n"))?;
            Ok(LanguageSetting {
                code: DEFAULT_LANGUAGE.to_string(),
                created: true,
            })
        }
        Err(err) => Err(err),
    }
}

/// Extract `language=<code>` from the `[Settings]` section
fn parse_language(content: &str) -> Option<String> {
    let mut in_settings = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_settings = line[1..line.len() - 1].trim().eq_ignore_ascii_case("settings");
            continue;
        }

        if in_settings {
            if let Some((key, value)) = line.split_once('=') {
                if key.trim().eq_ignore_ascii_case("language") {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_language_from_settings_section() {
        let content = "[Settings]\nlanguage=nl\n";
        assert_eq!(parse_language(content), Some("nl".to_string()));
    }

    #[test]
    fn parse_ignores_other_sections() {
        let content = "[Display]\nlanguage=nl\n";
        assert_eq!(parse_language(content), None);
    }

    #[test]
    fn parse_tolerates_spacing_and_case() {
        let content = "[ settings ]\n Language = de \n";
        assert_eq!(parse_language(content), Some("de".to_string()));
    }

    #[test]
    fn parse_skips_comments() {
        let content = "[Settings]\n; language=xx\n# language=yy\nlanguage=fr\n";
        assert_eq!(parse_language(content), Some("fr".to_string()));
    }

    #[test]
    fn parse_malformed_yields_none() {
        assert_eq!(parse_language("garbage"), None);
        assert_eq!(parse_language("[Settings]\nlanguage=\n"), None);
    }

    #[test]
    fn load_or_init_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "[Settings]\nlanguage=nl\n").unwrap();

        let setting = load_or_init(&path).unwrap();
        assert_eq!(setting.code, "nl");
        assert!(!setting.created);
    }

    #[test]
    fn load_or_init_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let setting = load_or_init(&path).unwrap();
        assert_eq!(setting.code, DEFAULT_LANGUAGE);
        assert!(setting.created);

        // The next run reads what was just written.
        let again = load_or_init(&path).unwrap();
        assert_eq!(again.code, DEFAULT_LANGUAGE);
        assert!(!again.created);
    }

    #[test]
    fn load_or_init_defaults_on_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not an ini at all").unwrap();

        let setting = load_or_init(&path).unwrap();
        assert_eq!(setting.code, DEFAULT_LANGUAGE);
        assert!(!setting.created);
    }
}
