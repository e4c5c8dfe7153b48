//! Grid root component and mounting.

use grid_core::{GridConfig, GridView};
use serde_json::Value;
use yew::prelude::*;

use crate::components::{AppTile, EmptyGrid};
use crate::dom::{self, FrontendError};

/// Properties for AppGrid.
#[derive(Properties, PartialEq)]
pub struct AppGridProps {
    pub view: GridView,
    #[prop_or(AttrValue::from(grid_core::EMPTY_MESSAGE))]
    pub empty_message: AttrValue,
}

/// Contents of the grid container.
#[function_component(AppGrid)]
pub fn app_grid(props: &AppGridProps) -> Html {
    match &props.view {
        GridView::Empty => html! { <EmptyGrid message={props.empty_message.clone()} /> },
        GridView::Tiles(tiles) => html! {
            <>
                { for tiles.iter().map(|tile| html! { <AppTile tile={tile.clone()} /> }) }
            </>
        },
    }
}

/// Replace everything inside the grid container with the rendered payload.
pub fn render_grid(config: &GridConfig, payload: &Value) -> dom::Result<()> {
    let grid = dom::document()?
        .get_element_by_id(&config.grid_id)
        .ok_or_else(|| FrontendError::MissingElement(config.grid_id.clone()))?;

    // Drop static fallback content before Yew takes over
    grid.set_inner_html("");

    let view = GridView::from_payload(payload);
    log::debug!("rendering {} grid children", view.child_count());

    yew::Renderer::<AppGrid>::with_root_and_props(
        grid,
        AppGridProps {
            view,
            empty_message: AttrValue::from(config.empty_message.clone()),
        },
    )
    .render();

    Ok(())
}
