//! Harness error type.

use std::path::PathBuf;

use aixnet_core::LookupError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("invalid argument '{raw}': {reason}")]
    InvalidArgument { raw: String, reason: String },
    /// No fixture set could be loaded. `skipped` lists the `*.json` files that
    /// were found but failed to parse.
    #[error("no fixture sets loaded from {}{}", .dir.display(), skipped_summary(.skipped))]
    NoFixtures {
        dir: PathBuf,
        skipped: Vec<(PathBuf, HarnessError)>,
    },
    #[error("verification failed: {failed} of {total} cases")]
    VerificationFailed { failed: usize, total: usize },
}

fn skipped_summary(skipped: &[(PathBuf, HarnessError)]) -> String {
    if skipped.is_empty() {
        return " (no *.json files)".to_string();
    }
    skipped
        .iter()
        .map(|(path, err)| format!("\n  skipped {}: {err}", path.display()))
        .collect()
}
