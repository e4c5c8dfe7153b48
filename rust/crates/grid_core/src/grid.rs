//! Grid contents derived from the loaded payload.

use serde_json::Value;

use crate::descriptor::AppDescriptor;
use crate::tile::TileView;

/// Text shown when there is nothing to render.
pub const EMPTY_MESSAGE: &str = "No apps available.";

/// What the grid container holds after a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// A single informational placeholder
    Empty,
    /// One tile per descriptor, in list order
    Tiles(Vec<TileView>),
}

impl GridView {
    /// Build the grid from the raw loader payload.
    ///
    /// Anything that is not a non-empty JSON array renders as `Empty`.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.as_array() {
            Some(entries) if !entries.is_empty() => Self::Tiles(
                entries
                    .iter()
                    .enumerate()
                    .map(|(idx, entry)| TileView::build(&AppDescriptor::from_entry(entry), idx))
                    .collect(),
            ),
            _ => Self::Empty,
        }
    }

    #[cfg(test)]
    fn tiles(&self) -> &[TileView] {
        match self {
            Self::Empty => &[],
            Self::Tiles(tiles) => tiles,
        }
    }

    /// Number of direct children the grid container ends up with.
    pub fn child_count(&self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Tiles(tiles) => tiles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
