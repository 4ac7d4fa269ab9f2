//! Scripted transport shared by the integration tests
//!
//! Replies are matched by URL prefix and consumed in order. A reply can be
//! held back behind a `Notify` so tests decide which response arrives first.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use fetchdeck::api::{ApiClient, Endpoints, Transport};
use fetchdeck::logic::errors::FetchError;

struct Reply {
    body: Result<String, FetchError>,
    gate: Option<Arc<Notify>>,
}

#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<(String, VecDeque<Reply>)>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, prefix: &str, reply: Reply) {
        let mut routes = self.routes.lock().unwrap();
        match routes.iter_mut().find(|(p, _)| p == prefix) {
            Some((_, replies)) => replies.push_back(reply),
            None => routes.push((prefix.to_string(), VecDeque::from([reply]))),
        }
    }

    /// Answer the next request starting with `prefix` with `body`
    pub fn reply(&self, prefix: &str, body: &str) {
        self.push(
            prefix,
            Reply {
                body: Ok(body.to_string()),
                gate: None,
            },
        );
    }

    /// Fail the next request starting with `prefix`
    pub fn fail(&self, prefix: &str, error: FetchError) {
        self.push(
            prefix,
            Reply {
                body: Err(error),
                gate: None,
            },
        );
    }

    /// Answer with `body`, but only once `gate` is notified
    pub fn reply_after(&self, prefix: &str, body: &str, gate: Arc<Notify>) {
        self.push(
            prefix,
            Reply {
                body: Ok(body.to_string()),
                gate: Some(gate),
            },
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let reply = {
            let mut routes = self.routes.lock().unwrap();
            routes
                .iter_mut()
                .find(|(prefix, _)| url.starts_with(prefix.as_str()))
                .and_then(|(_, replies)| replies.pop_front())
        };

        let Some(reply) = reply else {
            return Err(FetchError::network(format!("no reply scripted for {}", url)));
        };

        if let Some(gate) = reply.gate {
            gate.notified().await;
        }
        reply.body
    }
}

pub fn client(transport: Arc<MockTransport>) -> ApiClient {
    ApiClient::new(transport, Endpoints::default())
}
