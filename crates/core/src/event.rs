// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named events: ordered handler registries with validate-then-invoke firing
//!
//! An event is split into a state record (handlers and documentation) and a
//! behavior chosen from [`EventKind`]. Switching the kind builds a new event
//! from a copy of the state record, which is how the manager transmogrifies
//! events without losing their handlers.

use crate::args::Args;
use crate::error::EventError;
use crate::handler::{Handler, HandlerError, HandlerSlot, Validator};
use crate::kind::EventKind;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A slot tagged with its registration sequence number
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    slot: HandlerSlot,
}

/// Everything an event carries across a change of kind
#[derive(Debug, Clone, Default)]
struct EventState {
    handlers: Vec<Entry>,
    doc: Option<String>,
    next_seq: u64,
}

/// Firing behavior of one event instance
#[derive(Debug)]
enum Behavior {
    Standard,
    Replay { last_args: Option<Args> },
}

impl Behavior {
    fn for_kind(kind: EventKind) -> Self {
        match kind {
            EventKind::Event => Behavior::Standard,
            EventKind::Load => Behavior::Replay { last_args: None },
        }
    }

    fn kind(&self) -> EventKind {
        match self {
            Behavior::Standard => EventKind::Event,
            Behavior::Replay { .. } => EventKind::Load,
        }
    }

    /// Called once every qualifying handler of a fire has returned
    ///
    /// Returns true when this is the first fire a replay event records.
    /// Handlers registered before that point were not replayed at
    /// registration.
    fn fired(&mut self, args: &Args) -> bool {
        match self {
            Behavior::Standard => false,
            Behavior::Replay { last_args } => last_args.replace(args.clone()).is_none(),
        }
    }

    /// Arguments a newly registered handler must be invoked with right away
    fn replay_args(&self) -> Option<&Args> {
        match self {
            Behavior::Standard => None,
            Behavior::Replay { last_args } => last_args.as_ref(),
        }
    }
}

struct Shared {
    state: EventState,
    behavior: Behavior,
}

struct Inner {
    name: String,
    shared: RwLock<Shared>,
}

/// A named event
///
/// `Event` is a handle: clones refer to the same instance. Instances are
/// created by [`EventManager`](crate::EventManager) only.
#[derive(Clone)]
pub struct Event {
    inner: Arc<Inner>,
}

impl Event {
    pub(crate) fn new(name: impl Into<String>, kind: EventKind) -> Self {
        Self::from_state(name.into(), kind, EventState::default())
    }

    fn from_state(name: String, kind: EventKind, state: EventState) -> Self {
        Self {
            inner: Arc::new(Inner {
                name,
                shared: RwLock::new(Shared {
                    state,
                    behavior: Behavior::for_kind(kind),
                }),
            }),
        }
    }

    /// A new instance of `kind` holding this event's handlers and documentation
    pub(crate) fn with_kind(&self, kind: EventKind) -> Event {
        let state = self.read().state.clone();
        Self::from_state(self.inner.name.clone(), kind, state)
    }

    fn read(&self) -> RwLockReadGuard<'_, Shared> {
        self.inner.shared.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shared> {
        self.inner.shared.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> EventKind {
        self.read().behavior.kind()
    }

    /// Whether both handles refer to the same event instance
    pub fn ptr_eq(&self, other: &Event) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Register a handler, returning it unchanged
    ///
    /// On a [`EventKind::Load`] event that has already fired, the handler is
    /// also invoked immediately with the arguments of the last fire. A
    /// failure of that invocation is returned; the handler stays registered.
    pub fn register(&self, handler: Handler) -> Result<Handler, HandlerError> {
        self.register_slot(HandlerSlot::new(handler, None))
    }

    /// Register a handler guarded by `validator`
    pub fn register_with(
        &self,
        handler: Handler,
        validator: Validator,
    ) -> Result<Handler, HandlerError> {
        self.register_slot(HandlerSlot::new(handler, Some(validator)))
    }

    fn register_slot(&self, slot: HandlerSlot) -> Result<Handler, HandlerError> {
        let handler = slot.handler().clone();

        let replay = {
            let mut shared = self.write();
            let seq = shared.state.next_seq;
            shared.state.next_seq += 1;
            shared.state.handlers.push(Entry {
                seq,
                slot: slot.clone(),
            });
            tracing::debug!(
                event = %self.inner.name,
                handlers = shared.state.handlers.len(),
                "handler registered"
            );
            shared.behavior.replay_args().cloned()
        };

        // Lock is released before user code runs
        if let Some(args) = replay {
            tracing::debug!(event = %self.inner.name, "replaying last fire to late handler");
            if let Err(e) = slot.invoke(&args) {
                tracing::warn!(event = %self.inner.name, error = %e, "replay failed");
                return Err(e);
            }
        }

        Ok(handler)
    }

    /// Set the validator of the most recent registration of `handler`
    pub fn attach_validator(
        &self,
        handler: &Handler,
        validator: Validator,
    ) -> Result<(), EventError> {
        let mut shared = self.write();
        let entry = shared
            .state
            .handlers
            .iter_mut()
            .rev()
            .find(|entry| entry.slot.handler().ptr_eq(handler))
            .ok_or_else(|| EventError::HandlerNotFound {
                event: self.inner.name.clone(),
            })?;
        entry.slot.set_validator(validator);
        Ok(())
    }

    /// Remove the most recent registration of `handler`
    ///
    /// Returns false if the handler is not registered.
    pub fn remove(&self, handler: &Handler) -> bool {
        let mut shared = self.write();
        let handlers = &mut shared.state.handlers;
        let position = handlers
            .iter()
            .rposition(|entry| entry.slot.handler().ptr_eq(handler));
        match position {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handler: &Handler) -> bool {
        self.read()
            .state
            .handlers
            .iter()
            .any(|entry| entry.slot.handler().ptr_eq(handler))
    }

    /// Drop every registration. Documentation and fire history are kept.
    pub fn clear(&self) {
        self.write().state.handlers.clear();
    }

    /// Fire the event
    ///
    /// Handlers run in registration order on the calling thread. A handler
    /// whose validator rejects `args` is skipped and contributes no result.
    /// The first handler or validator failure stops the fire and is returned
    /// as is.
    ///
    /// On the first completed fire of a [`EventKind::Load`] event, handlers
    /// registered while it ran are then invoked with `args` too, since they
    /// found nothing to replay when they registered. Their results are not
    /// part of the returned values.
    pub fn fire(&self, args: impl Into<Args>) -> Result<Vec<Value>, HandlerError> {
        let args = args.into();
        let span = tracing::debug_span!("event.fire", event = %self.inner.name);
        let _guard = span.enter();

        // Snapshot so handlers may register on or fire this event
        let (start_seq, slots) = {
            let shared = self.read();
            let slots: Vec<HandlerSlot> = shared
                .state
                .handlers
                .iter()
                .map(|entry| entry.slot.clone())
                .collect();
            (shared.state.next_seq, slots)
        };

        let mut results = Vec::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            match slot.invoke(&args) {
                Ok(Some(value)) => results.push(value),
                Ok(None) => tracing::trace!(index, "validator rejected, skipping"),
                Err(e) => {
                    tracing::warn!(index, error = %e, "handler failed");
                    return Err(e);
                }
            }
        }

        let pending: Vec<HandlerSlot> = {
            let mut shared = self.write();
            if shared.behavior.fired(&args) {
                shared
                    .state
                    .handlers
                    .iter()
                    .filter(|entry| entry.seq >= start_seq)
                    .map(|entry| entry.slot.clone())
                    .collect()
            } else {
                Vec::new()
            }
        };
        tracing::debug!(handlers = slots.len(), invoked = results.len(), "fired");

        for slot in &pending {
            tracing::debug!("notifying handler registered during first fire");
            if let Err(e) = slot.invoke(&args) {
                tracing::warn!(error = %e, "late handler failed");
                return Err(e);
            }
        }

        Ok(results)
    }

    /// Number of registrations, whatever their validators would decide
    pub fn len(&self) -> usize {
        self.read().state.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().state.handlers.is_empty()
    }

    pub fn doc(&self) -> Option<String> {
        self.read().state.doc.clone()
    }

    pub fn set_doc(&self, text: impl Into<String>) {
        self.write().state.doc = Some(text.into());
    }

    /// Whether a replay event has completed a fire. Always false for
    /// [`EventKind::Event`].
    pub fn has_fired(&self) -> bool {
        self.read().behavior.replay_args().is_some()
    }

    /// Arguments of the last completed fire of a replay event
    pub fn last_args(&self) -> Option<Args> {
        self.read().behavior.replay_args().cloned()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.read();
        f.debug_struct("Event")
            .field("name", &self.inner.name)
            .field("kind", &shared.behavior.kind())
            .field("handlers", &shared.state.handlers.len())
            .field("doc", &shared.state.doc)
            .finish()
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
