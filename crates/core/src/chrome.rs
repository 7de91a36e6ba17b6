//! Open/closed state for the collapsible parts of the page: the mobile
//! navigation menu and the FAQ accordion.

/// Where a document click landed, relative to the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Menu,
    MenuButton,
    Outside,
}

/// Mobile navigation menu. Hidden until its button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    hidden: bool,
}

impl Default for MobileMenu {
    fn default() -> Self {
        MobileMenu { hidden: true }
    }
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.hidden
    }

    /// Menu button pressed.
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Any click on the document. Clicks inside the menu or on its button
    /// leave it alone.
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.hidden = true;
        }
    }

    /// A navigation link inside the menu was followed.
    pub fn on_link_click(&mut self) {
        self.hidden = true;
    }
}

/// FAQ list where at most one answer is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    entries: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new(entries: usize) -> Self {
        FaqAccordion {
            entries,
            open: None,
        }
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Question `index` clicked: collapses it if it was open, otherwise opens
    /// it and collapses every other entry. Unknown indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
