use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Release information stamped into every output document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    #[serde(rename = "COMPANY_NAME")]
    pub company_name: String,
    #[serde(rename = "TOOL")]
    pub tool: String,
    #[serde(rename = "RELEASE")]
    pub release: String,
    #[serde(rename = "COMMIT_ID")]
    pub commit_id: String,
    #[serde(rename = "VERSION")]
    pub version: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            company_name: "company".to_string(),
            tool: "tool".to_string(),
            release: "r0".to_string(),
            commit_id: "commit_id".to_string(),
            version: "v0.0".to_string(),
        }
    }
}

impl VersionInfo {
    /// Reads `path`, falling back to defaults when it is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "Version file {} could not be read ({}), using defaults",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("Version file {} is invalid ({}), using defaults", path.display(), e);
            Self::default()
        })
    }

    /// `<company>-<tool>-<release>-<commit>`
    pub fn folder_name(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.company_name, self.tool, self.release, self.commit_id
        )
    }
}
