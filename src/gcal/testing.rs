//! Test doubles for the dispatch seam.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::dispatch::{Dispatch, DispatchError, DispatchOutcome, HttpRequest};

/// Records every dispatched request and returns a programmed outcome.
pub struct MockDispatch {
    outcome: DispatchOutcome,
    calls: Mutex<Vec<(String, HttpRequest)>>,
}

impl MockDispatch {
    pub fn succeeding(body: Value) -> Self {
        Self {
            outcome: DispatchOutcome::Success { body },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: DispatchOutcome::Failure(Some(DispatchError {
                message: message.to_string(),
            })),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_without_message() -> Self {
        Self {
            outcome: DispatchOutcome::Failure(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Requests dispatched so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    /// Connection identities dispatched so far, in order.
    pub fn connections(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }
}

#[async_trait]
impl Dispatch for MockDispatch {
    async fn dispatch(&self, connection: &str, request: HttpRequest) -> DispatchOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((connection.to_string(), request));
        self.outcome.clone()
    }
}

/// Split a dispatched path into (path, decoded query pairs).
pub fn split_query(path: &str) -> (&str, BTreeMap<String, String>) {
    match path.split_once('?') {
        Some((p, q)) => {
            let pairs: Vec<(String, String)> = serde_urlencoded::from_str(q).unwrap();
            (p, pairs.into_iter().collect())
        }
        None => (path, BTreeMap::new()),
    }
}
