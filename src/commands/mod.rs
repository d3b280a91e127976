//! Command implementations

pub mod categories;
pub mod play;
pub mod update;

pub use categories::run_categories;
pub use play::run_play;
pub use update::{run_check_update, startup_notice};

use crate::core::RoundRules;
use crate::i18n::Catalog;
use std::path::PathBuf;

/// Everything the commands need, loaded once at startup
///
/// Passed explicitly instead of living in process-wide globals, so the
/// presentation layer and the game loop share one message catalog and
/// one set of paths.
pub struct GameContext {
    /// Message catalog for the configured language
    pub catalog: Catalog,
    /// Directory holding `categories.txt` and `wordlists/`
    pub data_dir: PathBuf,
    /// Local version file for the update notice
    pub version_file: PathBuf,
    /// Per-round behavior configuration
    pub rules: RoundRules,
    /// Whether `play` shows the startup update notice
    pub check_updates: bool,
}
