use std::sync::{Arc, Mutex};

use futures_util::future::{self, BoxFuture, FutureExt};
use serde_json::Value;

use super::{Upstream, UpstreamReply};
use crate::error::ProxyError;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post(String, Value),
}

/// Returns the same canned outcome for every call and records what was asked.
#[derive(Clone)]
pub struct ScriptedUpstream {
    outcome: Result<UpstreamReply, ProxyError>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedUpstream {
    pub fn replying(reply: UpstreamReply) -> Self {
        Self::with_outcome(Ok(reply))
    }

    pub fn failing(err: ProxyError) -> Self {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<UpstreamReply, ProxyError>) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> BoxFuture<'static, Result<UpstreamReply, ProxyError>> {
        self.calls.lock().unwrap().push(call);
        future::ready(self.outcome.clone()).boxed()
    }
}

impl Upstream for ScriptedUpstream {
    fn get_json<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>> {
        self.answer(Call::Get(path.to_string()))
    }

    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: &'a Value,
    ) -> BoxFuture<'a, Result<UpstreamReply, ProxyError>> {
        self.answer(Call::Post(path.to_string(), body.clone()))
    }
}
