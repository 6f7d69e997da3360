//! Mobile navigation menu state
//!
//! The panel and its toggle icon are driven from a single `open` flag so they
//! can never disagree: open ⇔ close icon.

/// Icon shown on the menu toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    /// Hamburger, shown while the panel is closed
    Menu,
    /// Cross, shown while the panel is open
    Close,
}

impl NavIcon {
    /// The icon state that is not shown
    pub fn other(self) -> NavIcon {
        match self {
            NavIcon::Menu => NavIcon::Close,
            NavIcon::Close => NavIcon::Menu,
        }
    }
}

/// Visible state after a menu operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
    pub icon: NavIcon,
}

impl NavState {
    fn from_open(open: bool) -> Self {
        Self {
            open,
            icon: if open { NavIcon::Close } else { NavIcon::Menu },
        }
    }
}

/// Navigation panel toggle
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Create a menu in the state the markup was rendered in
    pub fn new(initially_open: bool) -> Self {
        Self {
            open: initially_open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> NavState {
        NavState::from_open(self.open)
    }

    /// Flip the panel
    pub fn toggle(&mut self) -> NavState {
        self.open = !self.open;
        self.state()
    }

    /// A navigation link was followed. Returns the new state only if the
    /// panel had to be closed.
    pub fn link_selected(&mut self) -> Option<NavState> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_icon_in_sync() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.state().icon, NavIcon::Menu);

        for _ in 0..5 {
            let state = menu.toggle();
            assert_eq!(state.open, menu.is_open());
            assert_eq!(state.open, state.icon == NavIcon::Close);
        }
    }

    #[test]
    fn test_link_closes_open_menu() {
        let mut menu = NavMenu::default();
        menu.toggle();

        let state = menu.link_selected().unwrap();
        assert!(!state.open);
        assert_eq!(state.icon, NavIcon::Menu);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_on_closed_menu_is_noop() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.link_selected(), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_initially_open_markup() {
        let menu = NavMenu::new(true);
        assert_eq!(menu.state().icon, NavIcon::Close);
    }

    #[test]
    fn test_icon_other() {
        assert_eq!(NavIcon::Menu.other(), NavIcon::Close);
        assert_eq!(NavIcon::Close.other(), NavIcon::Menu);
    }
}
