//! View capability system
//!
//! Views declare what kind of input they take, and the keyboard middleware
//! routes keys accordingly. A view with `TEXT_INPUT` receives typed characters
//! instead of the global single-key bindings.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewCapabilities: u32 {
        /// View accepts typed text (forms)
        const TEXT_INPUT = 1 << 0;

        /// Up/Down/Tab move between entries or fields
        const ITEM_NAVIGATION = 1 << 1;

        /// Content may be taller than the viewport
        const SCROLL_VERTICAL = 1 << 2;
    }
}

impl ViewCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn supports_vertical_scroll(self) -> bool {
        self.contains(Self::SCROLL_VERTICAL)
    }
}

impl Default for ViewCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
