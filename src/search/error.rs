use std::fmt;

/// Failure classes for a search request.
///
/// Transport and decode failures are logged and dropped by the caller;
/// non-success statuses are ignored without a diagnostic. In every case the
/// previously rendered results stay on screen.
#[derive(Debug)]
pub enum SearchError {
    /// Network-level failure: connect, write, or read failed.
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Status(u16),
    /// The body was not the expected JSON shape.
    Decode(serde_json::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Transport(err) => write!(f, "search request failed: {err}"),
            SearchError::Status(code) => write!(f, "search returned status {code}"),
            SearchError::Decode(err) => write!(f, "error parsing search response: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Transport(err) => Some(err),
            SearchError::Status(_) => None,
            SearchError::Decode(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err)
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err)
    }
}
