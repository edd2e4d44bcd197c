// src/checker/http.rs
// =============================================================================
// This module checks whether URLs are alive by making HTTP requests.
//
// Key functionality:
// - One GET request per check, no retries
// - Status >= 400 means the link is dead; anything else is reachable
// - Transport failures (refused connection, DNS, timeout) become an
//   Error outcome instead of aborting the crawl
// - Every result is emitted to an injected sink (a channel), so the
//   consumer decides how to present it
//
// Rust concepts:
// - async/await: For network I/O that doesn't block other tasks
// - Enums: To represent the possible outcomes of a check
// - Channels: To hand results to whoever is listening
// =============================================================================

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

// Where check results go: an unbounded channel sender
//
// The crawler emits results as they happen, from many tasks at once, and
// the receiving end (the CLI's printer, or a test) consumes them as a
// stream. Consumers who want structured data take the CheckResult values
// straight from the channel instead of parsing printed lines.
pub type ResultSink = UnboundedSender<CheckResult>;

// How a single link check turned out
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
// The serde(tag) attribute makes the variant name a field in the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// The server answered with a status below 400
    Reachable { status: u16 },
    /// The server answered with a status of 400 or above
    Dead { status: u16 },
    /// The request never completed (connection refused, DNS failure, ...)
    Error { cause: String },
}

// The result of checking a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The URL that was checked
    pub url: String,
    /// What happened when we checked it
    #[serde(flatten)] // merges the CheckOutcome fields into CheckResult
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// Helper method: true when the link answered with a status below 400
    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Reachable { .. })
    }
}

// The human-readable line format for a check result
//
// One line per check:
//   "Ok LINK: <url> -> <status>"
//   "DEAD LINK: <url> -> <status>"
//   "Error: <url> -> <cause>"
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CheckOutcome::Reachable { status } => {
                write!(f, "Ok LINK: {} -> {}", self.url, status)
            }
            CheckOutcome::Dead { status } => {
                write!(f, "DEAD LINK: {} -> {}", self.url, status)
            }
            CheckOutcome::Error { cause } => {
                write!(f, "Error: {} -> {}", self.url, cause)
            }
        }
    }
}

// Checks a single link and emits the result to the sink
//
// Parameters:
//   client: shared reqwest client (borrowed, connection pooling)
//   url: the URL to check
//   sink: where the CheckResult is sent
//
// The response body is never read; only the status matters here. A page
// that is about to be crawled still does its own, separate fetch for
// extraction. Redirects follow the client's default policy.
//
// There is no retry: a transport failure is reported once and the crawl
// moves on. If the sink's receiver has gone away there is nobody left to
// tell, so a failed send is ignored.
pub async fn check_link(client: &Client, url: &str, sink: &ResultSink) {
    let outcome = match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if status >= 400 {
                CheckOutcome::Dead { status }
            } else {
                CheckOutcome::Reachable { status }
            }
        }
        Err(e) => CheckOutcome::Error {
            cause: e.to_string(),
        },
    };

    let _ = sink.send(CheckResult {
        url: url.to_string(),
        outcome,
    });
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why GET and not HEAD?
//    - Plenty of servers answer HEAD with 405 or other surprises
//    - GET is what a browser would do, so the status we see is the
//      status a visitor would see
//
// 2. What is an UnboundedSender?
//    - One half of a tokio mpsc channel (multi-producer, single-consumer)
//    - Many crawl tasks hold clones of the sender; one consumer receives
//    - send() never blocks, which keeps the checker simple
//
// 3. Why does a 404 count as Dead and not Error?
//    - The server answered, so the network worked fine
//    - "this link points at a missing page" is exactly the finding this
//      tool exists to report
//
// 4. What is #[serde(flatten)]?
//    - It inlines the enum's fields into the surrounding struct
//    - Serialized form: {"url": "...", "outcome": "dead", "status": 404}
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reachable_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let (tx, mut rx) = unbounded_channel();
        let url = format!("{}/ok", server.uri());
        check_link(&Client::new(), &url, &tx).await;

        let result = rx.recv().await.unwrap();
        assert_eq!(result.url, url);
        assert_eq!(result.outcome, CheckOutcome::Reachable { status: 200 });
        assert!(result.is_reachable());
    }

    #[tokio::test]
    async fn test_missing_page_is_dead_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (tx, mut rx) = unbounded_channel();
        let url = format!("{}/gone", server.uri());
        check_link(&Client::new(), &url, &tx).await;

        let result = rx.recv().await.unwrap();
        assert_eq!(result.outcome, CheckOutcome::Dead { status: 404 });
        assert!(!result.is_reachable());
    }

    #[tokio::test]
    async fn test_server_error_status_is_dead() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (tx, mut rx) = unbounded_channel();
        let url = format!("{}/boom", server.uri());
        check_link(&Client::new(), &url, &tx).await;

        let result = rx.recv().await.unwrap();
        assert_eq!(result.outcome, CheckOutcome::Dead { status: 503 });
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error_outcome() {
        // Port 1 on localhost refuses connections
        let (tx, mut rx) = unbounded_channel();
        check_link(&Client::new(), "http://127.0.0.1:1/", &tx).await;

        let result = rx.recv().await.unwrap();
        assert!(matches!(result.outcome, CheckOutcome::Error { .. }));
    }

    #[test]
    fn test_display_line_format() {
        let ok = CheckResult {
            url: "https://example.com/".to_string(),
            outcome: CheckOutcome::Reachable { status: 200 },
        };
        assert_eq!(ok.to_string(), "Ok LINK: https://example.com/ -> 200");

        let dead = CheckResult {
            url: "https://example.com/gone".to_string(),
            outcome: CheckOutcome::Dead { status: 404 },
        };
        assert_eq!(dead.to_string(), "DEAD LINK: https://example.com/gone -> 404");

        let error = CheckResult {
            url: "https://example.com/".to_string(),
            outcome: CheckOutcome::Error {
                cause: "connection refused".to_string(),
            },
        };
        assert_eq!(
            error.to_string(),
            "Error: https://example.com/ -> connection refused"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let dead = CheckResult {
            url: "https://example.com/gone".to_string(),
            outcome: CheckOutcome::Dead { status: 404 },
        };
        let value = serde_json::to_value(&dead).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://example.com/gone",
                "outcome": "dead",
                "status": 404,
            })
        );
    }
}
