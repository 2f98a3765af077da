//! Mobile navigation menu state.

/// The hamburger menu on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link inside the menu was followed.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page.
    pub fn page_clicked(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.open = false;
        }
    }

    /// Class applied to both the button and the menu.
    pub fn css_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = NavMenu::new();
        assert!(!nav.is_open());

        nav.toggle();
        assert_eq!(nav.css_class(), Some("active"));
        nav.page_clicked(true);
        assert!(nav.is_open());
        nav.page_clicked(false);
        assert!(!nav.is_open());

        nav.toggle();
        nav.link_clicked();
        assert_eq!(nav.css_class(), None);
    }
}
