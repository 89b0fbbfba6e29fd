//! # Live Search Module
//!
//! Issues asynchronous requests against the pet search endpoint and applies
//! the responses to the page.
//!
//! ## Overview
//!
//! Two layers:
//!
//! - [`SearchClient`] - blocking HTTP client for `GET /pets/search/?q=…`
//! - [`LiveSearch`] - the input-event controller: guards short queries,
//!   spawns one coroutine per request, and applies completions in
//!   generation order so a stale response never overwrites a newer one
//!
//! ## Concurrency
//!
//! Requests are fire-and-forget: the input handler returns immediately and
//! each request runs on its own `may` coroutine, posting its outcome on an
//! MPSC channel. [`LiveSearch::pump`] drains completions on the caller's
//! thread. Several requests may be in flight at once; completion order is
//! decided by the network, and the generation counter decides what renders.

mod client;
mod error;
mod live;

pub use client::SearchClient;
pub use error::SearchError;
pub use live::{LiveSearch, SEARCH_INPUT_ID};
