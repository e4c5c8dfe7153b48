//! Reusable UI components.

mod app_tile;
mod empty_grid;

pub use app_tile::AppTile;
pub use empty_grid::EmptyGrid;
