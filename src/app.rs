use tracing::info;

use crate::alerts::AlertDismisser;
use crate::confirm::{ConfirmPrompt, DeleteGuard, Disposition};
use crate::menu::MenuToggle;
use crate::page::{NodeId, Page};
use crate::search::{LiveSearch, SearchClient};

/// Page-ready bootstrapper and event dispatcher.
///
/// [`App::boot`] wires the menu toggle, alert dismisser, live search, and
/// delete guard over a page, each independently: a component whose target
/// elements are missing is simply not wired and the others are unaffected.
/// Events are fed in through [`click`] and [`input`]; completed search
/// requests are applied with [`pump`].
///
/// [`click`]: App::click
/// [`input`]: App::input
/// [`pump`]: App::pump
pub struct App {
    menu: Option<MenuToggle>,
    alerts: AlertDismisser,
    search: Option<LiveSearch>,
    delete: DeleteGuard,
}

impl App {
    /// Wire all components against `page`.
    pub fn boot(page: &Page, client: SearchClient, prompt: Box<dyn ConfirmPrompt>) -> Self {
        let menu = MenuToggle::wire(page);
        let alerts = AlertDismisser::wire(page);
        let search = LiveSearch::wire(page, client);
        let delete = DeleteGuard::wire(page, prompt);
        info!(
            menu_wired = menu.is_some(),
            search_wired = search.is_some(),
            "page booted"
        );
        Self {
            menu,
            alerts,
            search,
            delete,
        }
    }

    /// Deliver a click on `node`. The returned disposition says whether the
    /// click's default action (navigation, for links) may proceed.
    pub fn click(&mut self, page: &mut Page, node: NodeId) -> Disposition {
        if let Some(menu) = &self.menu {
            if menu.matches(node) {
                menu.on_click(page);
            }
        }
        if self.alerts.matches(node) {
            self.alerts.on_click(page, node);
        }
        if self.delete.matches(node) {
            return self.delete.on_click(node);
        }
        Disposition::Default
    }

    /// Deliver an input event on `node` carrying the field's current value.
    pub fn input(&mut self, node: NodeId, value: &str) {
        if let Some(search) = &self.search {
            if search.matches(node) {
                search.on_input(value);
            }
        }
    }

    /// Apply search completions that have already arrived.
    pub fn pump(&mut self, page: &mut Page) -> usize {
        match &mut self.search {
            Some(search) => search.pump(page),
            None => 0,
        }
    }

    /// Wait for at least one search completion, then drain the rest.
    /// Returns immediately when search is not wired.
    pub fn pump_blocking(&mut self, page: &mut Page) -> usize {
        match &mut self.search {
            Some(search) => search.pump_blocking(page),
            None => 0,
        }
    }

    /// Total search requests issued so far (0 when search is not wired).
    pub fn search_requests_issued(&self) -> u64 {
        self.search
            .as_ref()
            .map(LiveSearch::requests_issued)
            .unwrap_or(0)
    }
}
