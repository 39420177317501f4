// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording handlers for tests
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::args::Args;
use crate::handler::{Handler, HandlerError};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded handler invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub label: String,
    pub args: Args,
}

/// Shared log of handler invocations
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records its invocation under `label` and returns `result`
    pub fn handler(&self, label: &str, result: impl Into<Value>) -> Handler {
        let log = self.clone();
        let label = label.to_string();
        let result = result.into();
        Handler::new(move |args| {
            log.record(&label, args);
            Ok(result.clone())
        })
    }

    /// A handler that records its invocation under `label` and then fails
    pub fn failing(&self, label: &str, message: &str) -> Handler {
        let log = self.clone();
        let label = label.to_string();
        let message = message.to_string();
        Handler::new(move |args| {
            log.record(&label, args);
            Err(HandlerError::from(message.clone()))
        })
    }

    pub fn record(&self, label: &str, args: &Args) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Call {
                label: label.to_string(),
                args: args.clone(),
            });
    }

    /// All recorded calls, oldest first
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Labels of all recorded calls, oldest first
    pub fn labels(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.label).collect()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}
