use tracing::debug;

use crate::page::{NodeId, Page};

/// Id of the menu toggle control.
pub const TOGGLE_ID: &str = "hamburger";
/// Id of the navigation panel the toggle controls.
pub const PANEL_ID: &str = "navMenu";
/// Class flipped on the panel to show or hide it.
pub const ACTIVE_CLASS: &str = "active";

/// Click-to-toggle wiring for the navigation menu.
///
/// The page is the source of truth: no open/closed flag is kept, each click
/// inverts whatever state the panel currently has.
pub struct MenuToggle {
    toggle: NodeId,
    panel: Option<NodeId>,
}

impl MenuToggle {
    /// Wire the toggle control. Returns `None` when the page has no toggle;
    /// a missing panel still wires (clicks then do nothing).
    pub fn wire(page: &Page) -> Option<Self> {
        let toggle = page.element_by_id(TOGGLE_ID)?;
        let panel = page.element_by_id(PANEL_ID);
        debug!(toggle = ?toggle, panel_present = panel.is_some(), "menu toggle wired");
        Some(Self { toggle, panel })
    }

    /// Whether `node` is the wired toggle control.
    pub fn matches(&self, node: NodeId) -> bool {
        node == self.toggle
    }

    /// Flip the panel's active class.
    pub fn on_click(&self, page: &mut Page) {
        if let Some(panel) = self.panel {
            page.toggle_class(panel, ACTIVE_CLASS);
        }
    }
}
