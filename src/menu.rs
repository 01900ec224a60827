#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Document click handler: anything outside both the toggle and the panel closes the menu.
    pub fn handle_document_click(&mut self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close();
        }
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        menu.handle_document_click(true, false);
        assert!(menu.is_open());
        menu.handle_document_click(false, true);
        assert!(menu.is_open());
        menu.handle_document_click(false, false);
        assert!(!menu.is_open());
    }
}
