// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the event core itself
//!
//! Handler and validator failures are not represented here; they reach the
//! caller unchanged as [`HandlerError`](crate::HandlerError).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("handler not registered on event {event}")]
    HandlerNotFound { event: String },
    #[error("unknown event variant: {0}")]
    UnknownVariant(String),
}
