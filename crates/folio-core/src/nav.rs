//! Scroll-dependent navigation chrome.

use crate::constants::{
    ANCHOR_SCROLL_OFFSET_PX, BACK_TO_TOP_AFTER_PX, NAV_SCROLLED_AFTER_PX, SECTION_ACTIVE_OFFSET_PX,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavFlags {
    pub scrolled: bool,
    pub back_to_top: bool,
}

impl NavFlags {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > NAV_SCROLLED_AFTER_PX,
            back_to_top: scroll_y > BACK_TO_TOP_AFTER_PX,
        }
    }
}

/// Scroll position that puts a section just below the fixed nav bar.
pub fn anchor_scroll_top(section_top: f64) -> f64 {
    (section_top - ANCHOR_SCROLL_OFFSET_PX).max(0.0)
}

/// The section the reader is in: the last one, in document order, whose top
/// is within 200px below the current scroll position.
pub fn current_section<'a>(scroll_y: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| scroll_y >= top - SECTION_ACTIVE_OFFSET_PX)
        .map(|(id, _)| *id)
}

/// Menu open state. Every way of closing it funnels through `close`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true when the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }
}
