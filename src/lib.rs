//! # petpage
//!
//! **petpage** is the client-side interactivity layer of a pet-adoption
//! website, rebuilt as a headless Rust library so every behavior is
//! unit-testable without a live document.
//!
//! ## Overview
//!
//! The original page script wired four independent behaviors on page-ready:
//! a navigation menu toggle, alert banner dismissal, a live pet search, and
//! confirmation gates on delete links. This crate keeps that flat shape but
//! replaces ambient document access with an explicit [`Page`] model handed to
//! each component, and feeds events in through an [`App`] dispatcher.
//!
//! ## Architecture
//!
//! - **[`page`]** - arena-backed element tree standing in for the document
//! - **[`app`]** - bootstrapper wiring all components and dispatching events
//! - **[`menu`]** - navigation menu toggle
//! - **[`alerts`]** - alert banner dismissal
//! - **[`search`]** - live search: HTTP client, input guard, coroutine
//!   request dispatch, generation-ordered response application
//! - **[`render`]** - askama-templated results-grid markup (HTML-escaped)
//! - **[`confirm`]** - delete-link confirmation gate behind a prompt trait
//! - **[`model`]** - wire model of the search endpoint's JSON
//! - **[`config`]** - environment-based configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use petpage::{App, AlwaysConfirm, Element, Page, SearchClient};
//!
//! let mut page = Page::new();
//! let input = page.append_to_root(Element::new("input").id("searchInput"));
//! page.append_to_root(Element::new("div").class("pets-grid"));
//!
//! let mut app = App::boot(
//!     &page,
//!     SearchClient::new("http://127.0.0.1:8000"),
//!     Box::new(AlwaysConfirm),
//! );
//! app.input(input, "golden");
//! app.pump_blocking(&mut page);
//! ```
//!
//! ## Failure Behavior
//!
//! Failures are invisible to the page: transport and decode errors are
//! logged through `tracing` and leave the rendered results untouched, and a
//! non-success status is silently ignored. A stale search response - one
//! issued before a response that has already rendered - is dropped rather
//! than applied.

pub mod alerts;
pub mod app;
pub mod config;
pub mod confirm;
pub mod menu;
pub mod model;
pub mod page;
pub mod render;
pub mod search;

pub use app::App;
pub use config::UiConfig;
pub use confirm::{AlwaysConfirm, ConfirmPrompt, Disposition};
pub use model::{Pet, SearchResponse};
pub use page::{Element, NodeId, Page};
pub use search::{SearchClient, SearchError};
