//! Open/closed state of a dropdown menu.

use std::cell::Cell;

/// Dropdown state. Starts `Closed`; there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    /// Transition for a click on the menu's own anchor.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Transition for an interaction outside the menu.
    pub fn dismissed(self) -> Self {
        MenuState::Closed
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

/// Where a menu keeps its state.
///
/// A plain [`Cell`] natively; a reactive signal in the browser so that
/// transitions re-render whatever read the state.
pub trait MenuStateCell {
    fn get(&self) -> MenuState;
    fn set(&self, state: MenuState);
}

impl MenuStateCell for Cell<MenuState> {
    fn get(&self) -> MenuState {
        Cell::get(self)
    }

    fn set(&self, state: MenuState) {
        Cell::set(self, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn dismiss_always_closes() {
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closed);
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }

    #[test]
    fn cell_holds_state() {
        let cell = Cell::new(MenuState::Closed);
        MenuStateCell::set(&cell, MenuState::Open);
        assert!(MenuStateCell::get(&cell).is_open());
    }
}
