//! Page configuration.

use serde::Deserialize;

use crate::grid::EMPTY_MESSAGE;
use crate::loader::APP_LIST_PATH;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "appGridConfig";

/// Element ids, selectors and literals the frontend works with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// App list location (default: data/app_list.json)
    pub data_path: String,
    /// Id of the grid container (default: appGrid)
    pub grid_id: String,
    /// Id of the manual dark mode checkbox (default: darkModeToggle)
    pub toggle_id: String,
    /// Selector of the element whose display gates the manual toggle (default: .darkmode-toggle)
    pub toggle_container_selector: String,
    /// Body class applied in dark mode (default: dark)
    pub dark_class: String,
    /// Media query for the OS color scheme preference
    pub color_scheme_query: String,
    /// Placeholder text for an empty grid
    pub empty_message: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            data_path: APP_LIST_PATH.to_string(),
            grid_id: "appGrid".to_string(),
            toggle_id: "darkModeToggle".to_string(),
            toggle_container_selector: ".darkmode-toggle".to_string(),
            dark_class: "dark".to_string(),
            color_scheme_query: "(prefers-color-scheme: dark)".to_string(),
            empty_message: EMPTY_MESSAGE.to_string(),
        }
    }
}

impl GridConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults with an optional override applied.
    ///
    /// A malformed override is logged and ignored.
    pub fn with_override(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}
