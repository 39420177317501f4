// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lazily populated namespace of events

use crate::error::EventError;
use crate::event::Event;
use crate::kind::{EventKind, VariantSelector};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

#[derive(Default)]
struct Registry {
    events: BTreeMap<String, Event>,
    /// Documentation supplied before its event existed
    pending_docs: HashMap<String, String>,
}

impl Registry {
    /// Lookup-or-insert; the only place events are created
    fn get_or_create(&mut self, name: &str) -> Event {
        if let Some(event) = self.events.get(name) {
            return event.clone();
        }

        let event = Event::new(name, EventKind::default());
        if let Some(doc) = self.pending_docs.remove(name) {
            event.set_doc(doc);
        }
        tracing::debug!(event = name, "event created");
        self.events.insert(name.to_string(), event.clone());
        event
    }
}

/// Namespace mapping names to events
///
/// Events come into existence the first time their name is referenced.
/// `EventManager` is a handle; clones share the same namespace.
#[derive(Clone, Default)]
pub struct EventManager {
    registry: Arc<RwLock<Registry>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(|e| e.into_inner())
    }

    /// The event bound to `name`, created if absent
    pub fn get(&self, name: &str) -> Event {
        if let Some(event) = self
            .registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .get(name)
        {
            return event.clone();
        }

        self.write().get_or_create(name)
    }

    /// Whether `name` is bound, without creating it
    pub fn exists(&self, name: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .contains_key(name)
    }

    /// Attach documentation to `name`, replacing any previous text
    pub fn doc(&self, name: &str, text: impl Into<String>) {
        let text = text.into();
        let mut registry = self.write();

        match registry.events.get(name) {
            Some(event) => event.set_doc(text),
            None => {
                registry.pending_docs.insert(name.to_string(), text);
                registry.get_or_create(name);
            }
        }
        tracing::debug!(event = name, "documented");
    }

    /// Replace the event bound to `name` with a new instance of `kind`
    ///
    /// The new instance holds the same handlers, in the same order and with
    /// the same validators, and the same documentation. The previous instance
    /// is no longer reachable through the manager.
    ///
    /// Fire history is not carried over, even when `kind` is the current
    /// kind: a [`EventKind::Load`] event transmogrified to `LoadEvent` starts
    /// unfired, and handlers registered afterwards get no replay until it
    /// fires again.
    pub fn transmogrify(
        &self,
        name: &str,
        kind: impl Into<VariantSelector>,
    ) -> Result<Event, EventError> {
        let kind = kind.into().resolve()?;
        let mut registry = self.write();

        let old = registry.get_or_create(name);
        let new = old.with_kind(kind);
        registry.events.insert(name.to_string(), new.clone());

        tracing::debug!(
            event = name,
            from = %old.kind(),
            to = %kind,
            handlers = new.len(),
            "transmogrified"
        );
        Ok(new)
    }

    /// Names of every bound event, sorted
    pub fn names(&self) -> Vec<String> {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .keys()
            .cloned()
            .collect()
    }

    /// Every bound event, ordered by name
    pub fn events(&self) -> Vec<Event> {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .values()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .events
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("events", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
