//! Fixture loading and management.

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Current fixture schema version.
pub const FIXTURE_VERSION: &str = "v1";

/// A single fixture case.
///
/// A case without `input` checks a constant's value; a case with `input`
/// checks the result of calling a helper on it. Results are compared as
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Constant or helper name, exactly as spelled in the header.
    pub symbol: String,
    /// Include path of the header the symbol must come from.
    pub header: String,
    /// Helper argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<u32>,
    /// Expected output.
    pub expected_output: String,
}

/// A collection of fixture cases for one header (or the whole table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Header path, or `all`.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Load every `*.json` fixture set in `dir`, sorted by file name.
    ///
    /// Files that fail to parse are returned separately so callers can report
    /// them without aborting the run. When nothing loads, the parse failures
    /// travel in [`HarnessError::NoFixtures`].
    pub fn load_dir(
        dir: &std::path::Path,
    ) -> Result<(Vec<Self>, Vec<(std::path::PathBuf, HarnessError)>), HarnessError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        paths.sort();

        let mut sets = Vec::new();
        let mut skipped = Vec::new();
        for path in paths {
            match Self::from_file(&path) {
                Ok(set) => sets.push(set),
                Err(err) => skipped.push((path, err)),
            }
        }
        if sets.is_empty() {
            return Err(HarnessError::NoFixtures {
                dir: dir.to_path_buf(),
                skipped,
            });
        }
        Ok((sets, skipped))
    }
}
