//! Core logic for the app grid page.
//!
//! This crate holds everything that does not need a browser:
//! - AppDescriptor: one entry of the static app list
//! - TileView / GridView: declarative descriptions of what the grid shows
//! - ThemeController: the dark/light state machine and its `ThemeSurface` seam
//! - AppListError: the single "data source unavailable" failure class
//! - GridConfig: element ids, paths and literals used by the frontend

mod config;
mod descriptor;
mod grid;
mod initials;
mod loader;
mod theme;
mod tile;

pub use config::{CONFIG_ELEMENT_ID, GridConfig};
pub use descriptor::AppDescriptor;
pub use grid::{EMPTY_MESSAGE, GridView};
pub use initials::{MAX_INITIALS, initials_from_name};
pub use loader::{
    APP_LIST_PATH, AppListError, Result, absorb_failure, check_status, parse_app_list,
};
pub use theme::{Theme, ThemeController, ThemeSignal, ThemeSurface, ThemeUpdate};
pub use tile::{LINK_REL, LINK_TARGET, PLACEHOLDER_HREF, TileKey, TileView};
