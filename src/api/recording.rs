//! In-memory manager used by unit tests

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use super::{ApiError, HttpMethod, ManagerApi};

/// One request seen by [`RecordingApi`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
}

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct RecordingApi {
    responses: RefCell<VecDeque<Result<Option<Value>, ApiError>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 2xx response
    pub fn respond(self, value: Option<Value>) -> Self {
        self.responses.borrow_mut().push_back(Ok(value));
        self
    }

    /// Queue a rejected response
    pub fn reject(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(ApiError::Status {
            status,
            body: body.to_string(),
        }));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, reason: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(reason.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl ManagerApi for RecordingApi {
    fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<Option<Value>, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.map(str::to_string),
        });
        // An unqueued call acts like an empty 200.
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(None))
    }
}
