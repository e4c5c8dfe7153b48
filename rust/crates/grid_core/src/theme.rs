//! Dark/light theme state machine.
//!
//! The controller owns the single `dark` flag. OS preference changes and
//! manual toggle changes both go through [`ThemeController::apply`], which
//! returns the mirror updates the page has to perform.

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Inputs to the theme controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSignal {
    /// Color scheme change notification or window resize
    SystemPreference {
        /// Current OS preference
        prefers_dark: bool,
        /// Whether the manual toggle container is currently displayed
        toggle_visible: bool,
    },
    /// The user changed the manual toggle
    ManualToggle {
        /// New checked state of the toggle
        checked: bool,
    },
}

/// Mirror updates produced by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeUpdate {
    /// Desired presence of the dark class on the body
    pub dark: bool,
    /// Whether the toggle's checked state must be rewritten too
    pub sync_toggle: bool,
}

impl ThemeUpdate {
    /// Push this update onto a surface.
    pub fn apply_to<S: ThemeSurface + ?Sized>(&self, surface: &S) {
        surface.set_dark_class(self.dark);
        if self.sync_toggle {
            surface.set_toggle_checked(self.dark);
        }
    }
}

/// The page elements the theme is mirrored onto.
///
/// Implementations must tolerate missing optional elements: setting the
/// toggle when there is none is a no-op, and a missing toggle container
/// reads as not visible.
pub trait ThemeSurface {
    /// Current OS-level dark color scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Whether the manual toggle container is displayed.
    fn toggle_visible(&self) -> bool;

    /// Add or remove the dark class on the page body.
    fn set_dark_class(&self, dark: bool);

    /// Set the checked state of the manual toggle, if present.
    fn set_toggle_checked(&self, checked: bool);
}

/// Owner of the page-wide dark flag.
#[derive(Debug, Clone)]
pub struct ThemeController {
    dark: bool,
}

impl ThemeController {
    /// Start from the OS preference. Both mirrors are set.
    pub fn init(prefers_dark: bool) -> (Self, ThemeUpdate) {
        let update = ThemeUpdate {
            dark: prefers_dark,
            sync_toggle: true,
        };
        (Self { dark: prefers_dark }, update)
    }

    /// Initialise from a surface and apply the initial state to it.
    pub fn attach<S: ThemeSurface + ?Sized>(surface: &S) -> Self {
        let (controller, update) = Self::init(surface.prefers_dark());
        update.apply_to(surface);
        controller
    }

    /// Feed one signal through the state machine.
    ///
    /// Returns `None` when the signal leaves the page untouched.
    pub fn apply(&mut self, signal: ThemeSignal) -> Option<ThemeUpdate> {
        match signal {
            // A visible toggle means the user's choice wins
            ThemeSignal::SystemPreference {
                toggle_visible: true,
                ..
            } => None,
            ThemeSignal::SystemPreference { prefers_dark, .. } => {
                self.dark = prefers_dark;
                Some(ThemeUpdate {
                    dark: prefers_dark,
                    sync_toggle: true,
                })
            }
            ThemeSignal::ManualToggle { checked } => {
                self.dark = checked;
                Some(ThemeUpdate {
                    dark: checked,
                    sync_toggle: false,
                })
            }
        }
    }

    /// Re-evaluate after a color scheme change or resize.
    pub fn on_system_change<S: ThemeSurface + ?Sized>(&mut self, surface: &S) -> bool {
        let signal = ThemeSignal::SystemPreference {
            prefers_dark: surface.prefers_dark(),
            toggle_visible: surface.toggle_visible(),
        };
        self.dispatch(surface, signal)
    }

    /// Follow a manual toggle change.
    pub fn on_manual_toggle<S: ThemeSurface + ?Sized>(
        &mut self,
        surface: &S,
        checked: bool,
    ) -> bool {
        self.dispatch(surface, ThemeSignal::ManualToggle { checked })
    }

    fn dispatch<S: ThemeSurface + ?Sized>(&mut self, surface: &S, signal: ThemeSignal) -> bool {
        match self.apply(signal) {
            Some(update) => {
                log::debug!("theme -> {:?} ({signal:?})", self.theme());
                update.apply_to(surface);
                true
            }
            None => false,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// In-memory page with an optional toggle.
    struct FakePage {
        os_dark: Cell<bool>,
        has_toggle: bool,
        toggle_shown: Cell<bool>,
        body_dark: Cell<bool>,
        toggle_checked: Cell<bool>,
    }

    impl FakePage {
        fn new(os_dark: bool, has_toggle: bool, toggle_shown: bool) -> Self {
            Self {
                os_dark: Cell::new(os_dark),
                has_toggle,
                toggle_shown: Cell::new(toggle_shown),
                body_dark: Cell::new(false),
                toggle_checked: Cell::new(false),
            }
        }

        /// User clicks the checkbox: the control changes, then the event fires.
        fn click_toggle(&self, controller: &mut ThemeController, checked: bool) {
            self.toggle_checked.set(checked);
            controller.on_manual_toggle(self, checked);
        }
    }

    impl ThemeSurface for FakePage {
        fn prefers_dark(&self) -> bool {
            self.os_dark.get()
        }

        fn toggle_visible(&self) -> bool {
            self.has_toggle && self.toggle_shown.get()
        }

        fn set_dark_class(&self, dark: bool) {
            self.body_dark.set(dark);
        }

        fn set_toggle_checked(&self, checked: bool) {
            if self.has_toggle {
                self.toggle_checked.set(checked);
            }
        }
    }

    #[test]
    fn test_init_sets_both_mirrors() {
        let page = FakePage::new(true, true, false);
        let controller = ThemeController::attach(&page);

        assert!(controller.is_dark());
        assert!(page.body_dark.get());
        assert!(page.toggle_checked.get());

        let page = FakePage::new(false, true, true);
        let controller = ThemeController::attach(&page);

        assert_eq!(controller.theme(), Theme::Light);
        assert!(!page.body_dark.get());
        assert!(!page.toggle_checked.get());
    }

    #[test]
    fn test_hidden_toggle_follows_os() {
        let page = FakePage::new(true, true, false);
        let mut controller = ThemeController::attach(&page);
        assert!(page.body_dark.get());

        // OS flips to light, then a change/resize arrives
        page.os_dark.set(false);
        assert!(controller.on_system_change(&page));

        assert!(!controller.is_dark());
        assert!(!page.body_dark.get());
        assert!(!page.toggle_checked.get());
    }

    #[test]
    fn test_visible_toggle_keeps_manual_choice() {
        let page = FakePage::new(false, true, true);
        let mut controller = ThemeController::attach(&page);

        page.click_toggle(&mut controller, true);
        assert!(page.body_dark.get());

        page.os_dark.set(true);
        assert!(!controller.on_system_change(&page));
        page.os_dark.set(false);
        assert!(!controller.on_system_change(&page));

        assert!(controller.is_dark());
        assert!(page.body_dark.get());
        assert!(page.toggle_checked.get());
    }

    #[test]
    fn test_hiding_toggle_lets_os_override_manual_choice() {
        let page = FakePage::new(false, true, true);
        let mut controller = ThemeController::attach(&page);
        page.click_toggle(&mut controller, true);

        // Viewport change hides the toggle; the resize re-evaluates
        page.toggle_shown.set(false);
        assert!(controller.on_system_change(&page));

        assert!(!page.body_dark.get());
        assert!(!page.toggle_checked.get());
    }

    #[test]
    fn test_manual_toggle_only_touches_body_class() {
        let mut controller = ThemeController::init(false).0;

        let update = controller.apply(ThemeSignal::ManualToggle { checked: true });

        assert_eq!(
            update,
            Some(ThemeUpdate {
                dark: true,
                sync_toggle: false
            })
        );
        assert!(controller.is_dark());
    }

    #[test]
    fn test_manual_toggle_ignores_os_preference() {
        let page = FakePage::new(true, true, true);
        let mut controller = ThemeController::attach(&page);

        page.click_toggle(&mut controller, false);

        assert_eq!(controller.theme(), Theme::Light);
        assert!(!page.body_dark.get());
    }

    #[test]
    fn test_no_toggle_element_is_pure_os_follower() {
        let page = FakePage::new(false, false, false);
        let mut controller = ThemeController::attach(&page);

        for os_dark in [true, true, false, true] {
            page.os_dark.set(os_dark);
            assert!(controller.on_system_change(&page));
            assert_eq!(page.body_dark.get(), os_dark);
            assert!(!page.toggle_checked.get());
        }
    }

    #[test]
    fn test_system_signal_is_noop_while_visible() {
        let mut controller = ThemeController::init(true).0;

        let update = controller.apply(ThemeSignal::SystemPreference {
            prefers_dark: false,
            toggle_visible: true,
        });

        assert_eq!(update, None);
        assert!(controller.is_dark());
    }
}
