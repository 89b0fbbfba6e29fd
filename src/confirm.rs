use tracing::debug;

use crate::page::{NodeId, Page};

/// Substring marking an anchor as a destructive action.
pub const DELETE_MARKER: &str = "/delete/";

/// Question put to the user before a delete link navigates.
pub const CONFIRM_MESSAGE: &str = "Are you sure?";

/// Interactive confirmation seam.
///
/// The delete guard asks through this trait instead of a dialog so tests and
/// embedders decide how (and whether) to prompt.
pub trait ConfirmPrompt {
    /// Present `message` and report whether the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that accepts everything. Suits non-interactive embeddings.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Whether a click's default navigation should proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the default action happen.
    Default,
    /// Suppress the default action; the link does not navigate.
    Prevented,
}

/// Confirmation gate on delete links.
///
/// Anchors whose href contains [`DELETE_MARKER`] are collected once at boot.
/// The guard never issues a request itself - it only decides whether the
/// navigation a click would trigger is allowed to proceed.
pub struct DeleteGuard {
    links: Vec<NodeId>,
    prompt: Box<dyn ConfirmPrompt>,
}

impl DeleteGuard {
    pub fn wire(page: &Page, prompt: Box<dyn ConfirmPrompt>) -> Self {
        let links = page.anchors_with_href_containing(DELETE_MARKER);
        debug!(count = links.len(), "delete links wired");
        Self { links, prompt }
    }

    /// Whether `node` is one of the wired delete links.
    pub fn matches(&self, node: NodeId) -> bool {
        self.links.contains(&node)
    }

    /// Gate a click on a wired delete link.
    pub fn on_click(&self, node: NodeId) -> Disposition {
        let confirmed = self.prompt.confirm(CONFIRM_MESSAGE);
        debug!(node = ?node, confirmed, "delete link clicked");
        if confirmed {
            Disposition::Default
        } else {
            Disposition::Prevented
        }
    }
}
