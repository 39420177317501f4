// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event declarations
//!
//! Declares events up front with their documentation and kind:
//!
//! ```toml
//! [events.on_config_loaded]
//! doc = "Fired once configuration has been read"
//! kind = "LoadEvent"
//! ```

use crate::error::EventError;
use crate::kind::EventKind;
use crate::manager::EventManager;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event declarations: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Event(#[from] EventError),
}

/// One declared event
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventDecl {
    pub doc: String,
    #[serde(default)]
    pub kind: EventKind,
}

/// A set of event declarations keyed by event name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsConfig {
    #[serde(default)]
    pub events: BTreeMap<String, EventDecl>,
}

impl EventsConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Document every declared event and switch it to its declared kind
    ///
    /// Events that already exist keep their handlers.
    pub fn apply(&self, manager: &EventManager) -> Result<(), ConfigError> {
        for (name, decl) in &self.events {
            manager.doc(name, decl.doc.clone());
            if manager.get(name).kind() != decl.kind {
                manager.transmogrify(name, decl.kind)?;
            }
        }
        tracing::debug!(declared = self.events.len(), "event declarations applied");
        Ok(())
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
