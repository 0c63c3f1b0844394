//! Shared test helpers: a scripted transport that records every request.

#![allow(dead_code)]

use journey_core::submission::{HttpReply, RelayRequest, Transport};
use std::cell::RefCell;

#[derive(Clone, Debug)]
pub enum Reply {
    Ok(u16, &'static str),
    NetworkDown(&'static str),
    /// Never answers.
    Hang,
}

pub struct FakeTransport {
    reply: Reply,
    requests: RefCell<Vec<(String, RelayRequest)>>,
}

impl FakeTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<(String, RelayRequest)> {
        self.requests.borrow().last().cloned()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: &str, body: &RelayRequest) -> Result<HttpReply, String> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        match &self.reply {
            Reply::Ok(status, body) => Ok(HttpReply {
                status: *status,
                body: body.to_string(),
            }),
            Reply::NetworkDown(msg) => Err(msg.to_string()),
            Reply::Hang => std::future::pending().await,
        }
    }
}
