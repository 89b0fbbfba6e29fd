use tracing::debug;

use super::SearchError;
use crate::model::SearchResponse;

/// Path of the search endpoint, relative to the site base.
const SEARCH_PATH: &str = "/pets/search/";

/// Header marking the request as programmatic rather than a page load; the
/// endpoint answers JSON only when it is present.
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Blocking client for the pet search endpoint.
///
/// The HTTP client is built per request, matching the request's
/// fire-and-forget lifetime; builder failures surface as transport errors.
/// No timeout is applied: a hung response simply never completes.
#[derive(Debug, Clone)]
pub struct SearchClient {
    base: String,
}

impl SearchClient {
    /// Create a client against `base`, e.g. `http://127.0.0.1:8000`.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Full request URL for `query`, percent-encoded as the single `q`
    /// parameter.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}?q={}",
            self.base,
            SEARCH_PATH,
            urlencoding::encode(query)
        )
    }

    /// Issue one search request and decode the response.
    pub fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(query);
        debug!(url = %url, "issuing search request");
        let http = reqwest::blocking::Client::builder().build()?;
        let response = http
            .get(&url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
