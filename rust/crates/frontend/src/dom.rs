//! DOM lookups shared by the grid and theme code.

use grid_core::{CONFIG_ELEMENT_ID, GridConfig};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Errors from required DOM lookups.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type for DOM operations.
pub type Result<T> = std::result::Result<T, FrontendError>;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FrontendError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(FrontendError::NoDocument)
}

/// Defaults, merged with the page's `#appGridConfig` JSON if present.
pub fn read_config() -> GridConfig {
    let json = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    GridConfig::with_override(json.as_deref())
}
