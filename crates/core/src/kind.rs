// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event variants and how they are selected by name

use crate::error::EventError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of event behaviors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventKind {
    /// Fires handlers on demand
    #[default]
    Event,
    /// Remembers its last fire and replays it to late subscribers
    Load,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Event, EventKind::Load];

    /// Identifier used when selecting this variant by string
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Event => "Event",
            EventKind::Load => "LoadEvent",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EventError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| EventError::UnknownVariant(name.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for EventKind {
    type Error = EventError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_name(&s)
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

/// How a caller names the variant to switch an event to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSelector {
    Kind(EventKind),
    Name(String),
}

impl VariantSelector {
    pub fn resolve(&self) -> Result<EventKind, EventError> {
        match self {
            VariantSelector::Kind(kind) => Ok(*kind),
            VariantSelector::Name(name) => EventKind::from_name(name),
        }
    }
}

impl From<EventKind> for VariantSelector {
    fn from(kind: EventKind) -> Self {
        VariantSelector::Kind(kind)
    }
}

impl From<&str> for VariantSelector {
    fn from(name: &str) -> Self {
        VariantSelector::Name(name.to_string())
    }
}

impl From<String> for VariantSelector {
    fn from(name: String) -> Self {
        VariantSelector::Name(name)
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
