//! Browser bindings for the theme controller.

use std::cell::RefCell;
use std::rc::Rc;

use grid_core::{GridConfig, ThemeController, ThemeSurface};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, HtmlInputElement, MediaQueryList, Window};

use crate::dom::{self, FrontendError};

/// Theme mirrors and signal sources located on the page.
///
/// Only the window is required. Everything else may be missing.
struct DomThemeSurface {
    window: Window,
    body: Option<HtmlElement>,
    toggle: Option<HtmlInputElement>,
    toggle_container: Option<Element>,
    media: Option<MediaQueryList>,
    dark_class: String,
}

impl DomThemeSurface {
    fn locate(config: &GridConfig) -> dom::Result<Self> {
        let window = dom::window()?;
        let document = window.document().ok_or(FrontendError::NoDocument)?;

        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let toggle_container = document
            .query_selector(&config.toggle_container_selector)
            .ok()
            .flatten();
        let media = window.match_media(&config.color_scheme_query).ok().flatten();

        if media.is_none() {
            log::warn!("matchMedia unavailable, assuming light color scheme");
        }

        Ok(Self {
            body: document.body(),
            window,
            toggle,
            toggle_container,
            media,
            dark_class: config.dark_class.clone(),
        })
    }
}

impl ThemeSurface for DomThemeSurface {
    fn prefers_dark(&self) -> bool {
        self.media.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn toggle_visible(&self) -> bool {
        let Some(container) = &self.toggle_container else {
            return false;
        };

        match self.window.get_computed_style(container) {
            Ok(Some(style)) => style
                .get_property_value("display")
                .is_ok_and(|display| display != "none"),
            _ => false,
        }
    }

    fn set_dark_class(&self, dark: bool) {
        let Some(body) = &self.body else {
            return;
        };

        if let Err(err) = body.class_list().toggle_with_force(&self.dark_class, dark) {
            log::warn!("Failed to update body class: {err:?}");
        }
    }

    fn set_toggle_checked(&self, checked: bool) {
        if let Some(toggle) = &self.toggle {
            toggle.set_checked(checked);
        }
    }
}

/// Apply the initial theme and subscribe to OS, resize and toggle changes.
///
/// Listeners live for the rest of the page.
pub fn install(config: &GridConfig) -> dom::Result<()> {
    let surface = Rc::new(DomThemeSurface::locate(config)?);
    let controller = Rc::new(RefCell::new(ThemeController::attach(surface.as_ref())));
    log::debug!("initial theme {:?}", controller.borrow().theme());

    let on_system_change = {
        let surface = Rc::clone(&surface);
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut()>::new(move || {
            controller.borrow_mut().on_system_change(surface.as_ref());
        })
    };

    if let Some(media) = &surface.media {
        listen_for_scheme_change(media, &on_system_change);
    }
    // Resize doubles as a change signal where the media query never fires
    surface
        .window
        .add_event_listener_with_callback("resize", on_system_change.as_ref().unchecked_ref())?;
    on_system_change.forget();

    if let Some(toggle) = surface.toggle.clone() {
        let on_toggle = {
            let surface = Rc::clone(&surface);
            let controller = Rc::clone(&controller);
            let toggle = toggle.clone();
            Closure::<dyn FnMut()>::new(move || {
                controller
                    .borrow_mut()
                    .on_manual_toggle(surface.as_ref(), toggle.checked());
            })
        };
        toggle.add_event_listener_with_callback("change", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }

    Ok(())
}

fn listen_for_scheme_change(media: &MediaQueryList, handler: &Closure<dyn FnMut()>) {
    let callback = handler.as_ref().unchecked_ref();

    if media.add_event_listener_with_callback("change", callback).is_err() {
        // Older engines only have the deprecated addListener
        if let Err(err) = media.add_listener_with_opt_callback(Some(callback)) {
            log::warn!("Color scheme changes will not be observed: {err:?}");
        }
    }
}
