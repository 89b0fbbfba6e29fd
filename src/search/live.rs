use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use may::sync::mpsc;
use tracing::{debug, warn};

use super::{SearchClient, SearchError};
use crate::model::SearchResponse;
use crate::page::{NodeId, Page};
use crate::render;

/// Id of the search input element.
pub const SEARCH_INPUT_ID: &str = "searchInput";

/// A trimmed query must be strictly longer than this to trigger a request.
const MIN_QUERY_CHARS: usize = 2;

struct Completion {
    generation: u64,
    outcome: Result<SearchResponse, SearchError>,
}

/// Input-event controller for the live pet search.
///
/// Each qualifying input event issues one request on a spawned coroutine and
/// tags it with a generation number. Completions are applied by [`pump`];
/// a completion older than the last rendered generation is dropped, so the
/// newest query wins regardless of arrival order.
///
/// [`pump`]: LiveSearch::pump
pub struct LiveSearch {
    input: NodeId,
    client: Arc<SearchClient>,
    issued: Arc<AtomicU64>,
    rendered: u64,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
}

impl LiveSearch {
    /// Wire the controller to the page's search input. Returns `None` when
    /// the page has no search input.
    pub fn wire(page: &Page, client: SearchClient) -> Option<Self> {
        let input = page.element_by_id(SEARCH_INPUT_ID)?;
        let (tx, rx) = mpsc::channel();
        debug!(input = ?input, "live search wired");
        Some(Self {
            input,
            client: Arc::new(client),
            issued: Arc::new(AtomicU64::new(0)),
            rendered: 0,
            tx,
            rx,
        })
    }

    /// Whether `node` is the wired search input.
    pub fn matches(&self, node: NodeId) -> bool {
        node == self.input
    }

    /// Handle an input event carrying the field's current value.
    ///
    /// Returns immediately; the request, if any, runs on its own coroutine.
    pub fn on_input(&self, value: &str) {
        let query = value.trim();
        if query.chars().count() <= MIN_QUERY_CHARS {
            return;
        }
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, query = %query, "search issued");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let query = query.to_string();
        may::go!(move || {
            let outcome = client.search(&query);
            // A closed receiver means the controller is gone; drop silently.
            let _ = tx.send(Completion {
                generation,
                outcome,
            });
        });
    }

    /// Total requests issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Apply every completion that has already arrived. Returns how many
    /// renders were performed.
    pub fn pump(&mut self, page: &mut Page) -> usize {
        let mut renders = 0;
        while let Ok(completion) = self.rx.try_recv() {
            if self.apply(page, completion) {
                renders += 1;
            }
        }
        renders
    }

    /// Wait for at least one completion, then drain the rest. Returns how
    /// many renders were performed.
    pub fn pump_blocking(&mut self, page: &mut Page) -> usize {
        let mut renders = 0;
        if let Ok(completion) = self.rx.recv() {
            if self.apply(page, completion) {
                renders += 1;
            }
        }
        renders + self.pump(page)
    }

    fn apply(&mut self, page: &mut Page, completion: Completion) -> bool {
        if completion.generation <= self.rendered {
            debug!(
                generation = completion.generation,
                rendered = self.rendered,
                "stale search completion dropped"
            );
            return false;
        }
        match completion.outcome {
            Ok(response) => {
                self.rendered = completion.generation;
                render::render_results(page, &response.pets);
                true
            }
            Err(SearchError::Status(code)) => {
                debug!(status = code, "search returned non-success status");
                false
            }
            Err(err) => {
                warn!(error = %err, "search request failed");
                false
            }
        }
    }
}
