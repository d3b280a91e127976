//! Update check commands
//!
//! Both entry points funnel through [`crate::version::check`]; failures
//! are warnings, never errors, because the check is purely advisory.

use super::GameContext;
use crate::output::display;
use crate::version::{self, REMOTE_VERSION_URL};

/// Run an explicit version check and report the result
pub fn run_check_update(ctx: &GameContext) {
    match version::check(&ctx.version_file, REMOTE_VERSION_URL) {
        Ok(status) => display::print_version_status(&ctx.catalog, &status),
        Err(err) => display::print_version_failure(&ctx.catalog, &err),
    }
}

/// Version notice shown before the game starts
///
/// Quieter than the explicit check: only speaks up when an update is
/// available or the check failed.
pub fn startup_notice(ctx: &GameContext) {
    match version::check(&ctx.version_file, REMOTE_VERSION_URL) {
        Ok(status @ version::VersionStatus::UpdateAvailable { .. }) => {
            display::print_version_status(&ctx.catalog, &status);
        }
        Ok(_) => {}
        Err(err) => display::print_version_failure(&ctx.catalog, &err),
    }
}
