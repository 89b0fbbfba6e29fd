use tracing::debug;

use crate::page::{NodeId, Page};

/// Class carried by every alert close control.
pub const CLOSE_CLASS: &str = "close-alert";

/// Click wiring for alert banners.
///
/// Close controls are collected once at boot; controls added later are not
/// wired. Clicking a control hides its immediate parent with
/// `display: none` - the banner stays in the tree, only its visibility
/// changes.
pub struct AlertDismisser {
    closers: Vec<NodeId>,
}

impl AlertDismisser {
    pub fn wire(page: &Page) -> Self {
        let closers = page.elements_by_class(CLOSE_CLASS);
        debug!(count = closers.len(), "alert close controls wired");
        Self { closers }
    }

    /// Whether `node` is one of the wired close controls.
    pub fn matches(&self, node: NodeId) -> bool {
        self.closers.contains(&node)
    }

    /// Hide the clicked control's parent.
    pub fn on_click(&self, page: &mut Page, node: NodeId) {
        if let Some(parent) = page.parent(node) {
            page.set_style(parent, "display", "none");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    #[test]
    fn test_click_hides_own_parent_only() {
        let mut page = Page::new();
        let first = page.append_to_root(Element::new("div").class("alert"));
        let first_close = page.append(first, Element::new("button").class(CLOSE_CLASS));
        let second = page.append_to_root(Element::new("div").class("alert"));
        let _second_close = page.append(second, Element::new("button").class(CLOSE_CLASS));

        let alerts = AlertDismisser::wire(&page);
        alerts.on_click(&mut page, first_close);

        assert!(page.is_hidden(first));
        assert!(!page.is_hidden(second));
    }

    #[test]
    fn test_late_controls_are_not_wired() {
        let mut page = Page::new();
        let alerts = AlertDismisser::wire(&page);
        let alert = page.append_to_root(Element::new("div").class("alert"));
        let close = page.append(alert, Element::new("button").class(CLOSE_CLASS));
        assert!(!alerts.matches(close));
    }
}
