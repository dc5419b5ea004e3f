//! Optional settings.json in the app config directory. Read once at start-up, never written.

use crate::constants::{APP_NAME, SETTINGS_FILE};
use crate::geometry::CenterRule;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a frame does when the hexagon geometry is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log and leave the frame blank
    #[default]
    SkipFrame,
    /// Log and terminate the process
    Abort,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub on_invalid_geometry: FailurePolicy,
    pub center_rule: CenterRule,
}

impl Settings {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }

    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                warn!(error = %e, path = %path.display(), "Failed to parse settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!(path = %path.display(), "No settings file found, using defaults");
                Self::default()
            }
        }
    }

    fn parse(s: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(s)?;
        debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}
