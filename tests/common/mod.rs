use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Response, Server};

/// One request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path plus query string, e.g. `/pets/search/?q=rex`.
    pub url: String,
    /// Value of the `X-Requested-With` header, if sent.
    pub requested_with: Option<String>,
}

/// Canned search endpoint. The `q` parameter picks the behavior:
///
/// - `empty`   -> `{"pets":[]}`
/// - `mo`      -> one pet without an image
/// - `broken`  -> a body that is not JSON
/// - `error`   -> HTTP 500
/// - `slow…`   -> 400 ms delay, then a pet named Slowpoke
/// - anything else -> one full record (Rex)
pub struct MockSearch {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSearch {
    pub fn start() -> Self {
        // Search requests block their coroutine; give the scheduler enough
        // threads that overlapping requests really overlap.
        may::config().set_workers(4);
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        // Two workers so a delayed response does not serialize behind a
        // fast one.
        for _ in 0..2 {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                while let Ok(request) = server.recv() {
                    let url = request.url().to_string();
                    let requested_with = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("X-Requested-With"))
                        .map(|h| h.value.to_string());
                    requests.lock().unwrap().push(RecordedRequest {
                        url: url.clone(),
                        requested_with,
                    });

                    let query = query_param(&url);
                    if query.starts_with("slow") {
                        thread::sleep(Duration::from_millis(400));
                    }
                    let (status, body) = canned_response(&query);
                    let response = Response::from_string(body)
                        .with_status_code(status)
                        .with_header(
                            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            });
        }
        Self {
            base: format!("http://{addr}"),
            requests,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn query_param(url: &str) -> String {
    url.split_once("?q=")
        .map(|(_, q)| {
            urlencoding::decode(q)
                .map(|s| s.into_owned())
                .unwrap_or_default()
        })
        .unwrap_or_default()
}

fn canned_response(query: &str) -> (u16, String) {
    match query {
        "empty" => (200, r#"{"pets":[]}"#.to_string()),
        "mo" => (
            200,
            r#"{"pets":[{"id":1,"name":"Mo","breed":"Pug"}]}"#.to_string(),
        ),
        "broken" => (200, "{not json".to_string()),
        "error" => (500, "server error".to_string()),
        q if q.starts_with("slow") => (
            200,
            r#"{"pets":[{"id":2,"name":"Slowpoke","breed":"Basset"}]}"#.to_string(),
        ),
        _ => (
            200,
            r#"{"pets":[{"id":7,"name":"Rex","breed":"Lab","image":"http://x/r.jpg"}]}"#
                .to_string(),
        ),
    }
}
