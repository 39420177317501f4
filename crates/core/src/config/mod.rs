// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod events;

pub use events::{ConfigError, EventDecl, EventsConfig};
