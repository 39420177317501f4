// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! herald-core: in-process event dispatch
//!
//! This crate provides:
//! - `EventManager` - a namespace of events created on first reference
//! - `Event` - an ordered handler registry with validate-then-invoke firing
//! - `EventKind` - the closed set of event behaviors, including the
//!   replaying `LoadEvent`
//! - `EventsConfig` - TOML declarations of documented events (`config`
//!   feature)

pub mod args;
#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod kind;
pub mod manager;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use args::{is_truthy, Args};
#[cfg(feature = "config")]
pub use config::{ConfigError, EventDecl, EventsConfig};
pub use error::EventError;
pub use event::Event;
pub use handler::{Handler, HandlerError, HandlerResult, HandlerSlot, Validator};
pub use kind::{EventKind, VariantSelector};
pub use manager::EventManager;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use testing::{Call, CallLog};
