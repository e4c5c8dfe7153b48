//! App tile component.

use grid_core::{LINK_REL, LINK_TARGET, TileKey, TileView};
use web_sys::HtmlElement;
use yew::prelude::*;

/// Properties for AppTile component.
#[derive(Properties, PartialEq)]
pub struct AppTileProps {
    pub tile: TileView,
}

/// One focusable grid item wrapping the app link.
///
/// Enter or Space on the focused item clicks the inner link.
#[function_component(AppTile)]
pub fn app_tile(props: &AppTileProps) -> Html {
    let tile = &props.tile;
    let link_ref = use_node_ref();

    let onkeydown = {
        let link_ref = link_ref.clone();
        Callback::from(move |ev: KeyboardEvent| {
            if TileKey::from_key(&ev.key()) == Some(TileKey::Activate) {
                // Space would otherwise scroll the page
                ev.prevent_default();
                if let Some(link) = link_ref.cast::<HtmlElement>() {
                    link.click();
                }
            }
        })
    };

    html! {
        <div
            class="app-item"
            role="listitem"
            data-index={tile.index.to_string()}
            tabindex="0"
            {onkeydown}
        >
            <a
                ref={link_ref}
                class="app-link"
                href={tile.href.clone()}
                target={LINK_TARGET}
                rel={LINK_REL}
                aria-label={tile.aria_label.clone()}
            >
                <span class="initials">{ &tile.initials }</span>
            </a>
            <div class="app-label">{ &tile.label }</div>
        </div>
    }
}
