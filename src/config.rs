// Page-level configuration, embedded as JSON in the host page:
// <script id="portfolio-config" type="application/json">{ ... }</script>
use serde::{Deserialize, Serialize};

use crate::model::GestureConfig;
use crate::theme::{OsKind, detect_os_from_navigator};

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gesture: GestureConfig,
    /// Forces a desktop look instead of the detected one.
    pub os_override: Option<OsKind>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            os_override: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the embedded config. A missing element means defaults; a malformed one is
    /// reported and also yields defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn resolve_os(&self) -> OsKind {
        self.os_override.unwrap_or_else(detect_os_from_navigator)
    }
}
