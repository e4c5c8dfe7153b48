//! Declarative tile description.

use crate::descriptor::AppDescriptor;
use crate::initials::initials_from_name;

/// Link target used when a descriptor has no URL.
pub const PLACEHOLDER_HREF: &str = "#";

/// Tiles open in a new browsing context.
pub const LINK_TARGET: &str = "_blank";

/// Referrer and opener isolation for tile links.
pub const LINK_REL: &str = "noopener noreferrer";

/// Everything the frontend needs to render one tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    /// Zero-based position in the app list
    pub index: usize,
    /// Link target (URL or `#`)
    pub href: String,
    /// Accessible name of the link
    pub aria_label: String,
    /// Glyph text
    pub initials: String,
    /// Visible label under the glyph (may be empty)
    pub label: String,
}

impl TileView {
    /// Build the tile for a descriptor at the given position.
    pub fn build(app: &AppDescriptor, index: usize) -> Self {
        let name = app.name();

        Self {
            index,
            href: app.url().unwrap_or(PLACEHOLDER_HREF).to_string(),
            aria_label: name
                .map(str::to_string)
                .unwrap_or_else(|| format!("App {}", index + 1)),
            initials: initials_from_name(name),
            label: name.unwrap_or_default().to_string(),
        }
    }
}

/// Keys a focused tile reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKey {
    /// Follow the tile link, as if it had been clicked
    Activate,
}

impl TileKey {
    /// Classify a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }
}
