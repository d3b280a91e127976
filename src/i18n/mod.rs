//! Localization
//!
//! Messages are looked up by key in a per-language JSON catalog and
//! formatted with positional placeholders. The language code comes from
//! a small settings file; English is embedded in the binary as the
//! final fallback so the game always has text.

pub mod catalog;
pub mod settings;

pub use catalog::{Catalog, CatalogError, DEFAULT_LANGUAGE, LANGUAGES_DIR};
pub use settings::{LanguageSetting, SETTINGS_FILE, load_or_init};
