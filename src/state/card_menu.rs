//! View state for the interview card context menu.
//!
//! DESIGN
//! ======
//! The menu is one of three views. Keeping them in a single enum means the
//! option list and the delete confirmation can never render together. The
//! `deleting` flag only guards against a second confirm while the first
//! delete is still in flight; it does not affect which view is shown.

#[cfg(test)]
#[path = "card_menu_test.rs"]
mod card_menu_test;

/// Which part of the menu is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuView {
    #[default]
    Closed,
    OptionList,
    ConfirmPending,
}

/// Local state of one card menu instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardMenuState {
    view: MenuView,
    deleting: bool,
}

impl CardMenuState {
    pub fn view(&self) -> MenuView {
        self.view
    }

    /// True in any non-closed view. The outside-click listener is live
    /// exactly while this holds.
    pub fn is_open(&self) -> bool {
        self.view != MenuView::Closed
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Open the option list, or close whatever is open.
    ///
    /// Toggling from the confirmation closes the menu and discards the
    /// pending confirmation.
    pub fn toggle(&mut self) {
        self.view = match self.view {
            MenuView::Closed => MenuView::OptionList,
            MenuView::OptionList | MenuView::ConfirmPending => MenuView::Closed,
        };
    }

    /// Move from the option list to the delete confirmation.
    ///
    /// Returns `false` (and changes nothing) from any other view.
    pub fn request_delete(&mut self) -> bool {
        if self.view != MenuView::OptionList {
            return false;
        }
        self.view = MenuView::ConfirmPending;
        true
    }

    /// Back out of the confirmation.
    pub fn cancel(&mut self) {
        if self.view == MenuView::ConfirmPending {
            self.view = MenuView::Closed;
        }
    }

    /// Mark the delete as started.
    ///
    /// Returns `false` unless the confirmation is showing and no delete is
    /// already in flight.
    pub fn begin_delete(&mut self) -> bool {
        if self.view != MenuView::ConfirmPending || self.deleting {
            return false;
        }
        self.deleting = true;
        true
    }

    /// Return to rest after a delete finishes, whatever the outcome.
    pub fn settle(&mut self) {
        self.view = MenuView::Closed;
        self.deleting = false;
    }

    /// Close in response to a pointer press outside the menu.
    ///
    /// Returns whether anything changed.
    pub fn dismiss_outside(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.view = MenuView::Closed;
        true
    }
}
