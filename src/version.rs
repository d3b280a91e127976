//! Advisory update check
//!
//! Compares the local `version.txt` against a raw version file hosted
//! in the project repository. Purely informational: every failure class
//! maps to a warning and gameplay proceeds regardless.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Raw file holding the latest released version string
pub const REMOTE_VERSION_URL: &str =
    "https://raw.githubusercontent.com/WorkSquash/WordGuessr/master/version.txt";

/// Page to visit when an update is available
pub const RELEASE_PAGE_URL: &str = "https://github.com/WorkSquash/WordGuessr/releases";

/// Local file holding the installed version string
pub const LOCAL_VERSION_FILE: &str = "version.txt";

/// How long the remote fetch may take before it is reported as a timeout
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure classes for the remote fetch
///
/// Distinguished so each can be reported with its own message, the way
/// users expect network problems to be described.
#[derive(Debug)]
pub enum FetchError {
    /// Could not reach the server (DNS, refused, unreachable)
    Connection,
    /// The request took longer than [`FETCH_TIMEOUT`]
    Timeout,
    /// The server answered with a non-success status
    HttpStatus(u16),
    /// Anything else (TLS, malformed response, local I/O)
    Other(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection => write!(f, "Could not connect to the update server"),
            Self::Timeout => write!(f, "The update check timed out"),
            Self::HttpStatus(code) => write!(f, "The update server answered with HTTP {code}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// What the version comparison concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    /// Local and remote match
    UpToDate(String),
    /// Remote differs from local
    UpdateAvailable { local: String, remote: String },
    /// No local version file, so there is nothing to compare
    NoLocalVersion,
}

/// Read the installed version string, if any
#[must_use]
pub fn local_version(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Fetch the latest released version string
///
/// # Errors
/// Returns a [`FetchError`] classifying what went wrong; never panics
/// and never retries.
pub fn fetch_remote_version(url: &str) -> Result<String, FetchError> {
    let agent = ureq::AgentBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .build();

    match agent.get(url).call() {
        Ok(response) => response
            .into_string()
            .map(|body| body.trim().to_string())
            .map_err(|err| FetchError::Other(err.to_string())),
        Err(ureq::Error::Status(code, _)) => Err(FetchError::HttpStatus(code)),
        Err(ureq::Error::Transport(transport)) => Err(classify_transport(&transport)),
    }
}

fn classify_transport(transport: &ureq::Transport) -> FetchError {
    match transport.kind() {
        ureq::ErrorKind::Dns | ureq::ErrorKind::ConnectionFailed => FetchError::Connection,
        ureq::ErrorKind::Io => {
            let message = transport.to_string();
            if message.contains("timed out") {
                FetchError::Timeout
            } else {
                FetchError::Other(message)
            }
        }
        _ => FetchError::Other(transport.to_string()),
    }
}

/// Compare local and remote versions
///
/// # Errors
/// Returns a [`FetchError`] when the remote version cannot be
/// retrieved; a missing local file is not an error, it yields
/// [`VersionStatus::NoLocalVersion`] without touching the network.
pub fn check(local_path: &Path, url: &str) -> Result<VersionStatus, FetchError> {
    let Some(local) = local_version(local_path) else {
        return Ok(VersionStatus::NoLocalVersion);
    };

    let remote = fetch_remote_version(url)?;
    if local == remote {
        Ok(VersionStatus::UpToDate(local))
    } else {
        Ok(VersionStatus::UpdateAvailable { local, remote })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_version_reads_and_trims() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_VERSION_FILE);
        fs::write(&path, "  1.2.0\n").unwrap();
        assert_eq!(local_version(&path), Some("1.2.0".to_string()));
    }

    #[test]
    fn local_version_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(local_version(&dir.path().join("nope.txt")), None);
    }

    #[test]
    fn local_version_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOCAL_VERSION_FILE);
        fs::write(&path, "  \n").unwrap();
        assert_eq!(local_version(&path), None);
    }

    #[test]
    fn check_without_local_version_skips_network() {
        let dir = tempfile::tempdir().unwrap();
        // URL is never contacted because there is no local version.
        let status = check(&dir.path().join("nope.txt"), "http://invalid.invalid").unwrap();
        assert_eq!(status, VersionStatus::NoLocalVersion);
    }

    #[test]
    fn fetch_error_messages_name_the_class() {
        assert!(FetchError::Connection.to_string().contains("connect"));
        assert!(FetchError::Timeout.to_string().contains("timed out"));
        assert!(FetchError::HttpStatus(404).to_string().contains("404"));
    }
}
