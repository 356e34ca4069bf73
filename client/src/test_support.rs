//! Test utilities shared by integration tests.
//!
//! Only compiled with the `test-support` feature.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::WireRequest;
use crate::domain::ports::{GraphQlHttpResponse, GraphQlTransport, GraphQlTransportError};

type ScriptedReply = Result<GraphQlHttpResponse, GraphQlTransportError>;

#[derive(Debug)]
struct Script {
    pending: VecDeque<ScriptedReply>,
    last: Option<ScriptedReply>,
}

impl Script {
    fn advance(&mut self) -> Option<ScriptedReply> {
        if let Some(reply) = self.pending.pop_front() {
            self.last = Some(reply);
        }
        self.last.clone()
    }
}

/// Transport replaying a fixed script of replies.
///
/// Replies are served in order. Once the script runs out, the last reply is
/// repeated, so a single-entry script acts as a deterministic server.
#[derive(Debug)]
pub struct ScriptedGraphQlTransport {
    script: Mutex<Script>,
    requests: Mutex<Vec<Vec<u8>>>,
    calls: AtomicUsize,
}

impl ScriptedGraphQlTransport {
    /// Build a transport serving `scripted` replies in order.
    #[must_use]
    pub fn new(scripted: Vec<ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(Script {
                pending: scripted.into(),
                last: None,
            }),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Build a transport that always answers `status` with `body`.
    #[must_use]
    pub fn replying(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(vec![Ok(GraphQlHttpResponse {
            status,
            body: body.into(),
        })])
    }

    /// Build a transport that always fails with `error`.
    #[must_use]
    pub fn failing(error: GraphQlTransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Bodies of every request received, in arrival order.
    #[must_use]
    pub fn request_bodies(&self) -> Vec<Vec<u8>> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn next_reply(&self) -> ScriptedReply {
        let Ok(mut script) = self.script.lock() else {
            return Err(GraphQlTransportError::transport("scripted transport poisoned"));
        };
        script.advance().unwrap_or_else(|| {
            Err(GraphQlTransportError::transport(
                "scripted transport has no replies",
            ))
        })
    }
}

#[async_trait]
impl GraphQlTransport for ScriptedGraphQlTransport {
    async fn send(&self, request: &WireRequest) -> ScriptedReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.body().to_vec());
        }
        self.next_reply()
    }
}
