/// Mobile overlay menu. Opens only through the toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Outside clicks and navigation actions.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        let menu = menu.toggled();
        assert!(menu.is_open());
        assert_eq!(menu.toggled(), MenuState::Closed);
    }

    #[test]
    fn close_never_opens() {
        assert_eq!(MenuState::Open.closed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.closed(), MenuState::Closed);
    }
}
