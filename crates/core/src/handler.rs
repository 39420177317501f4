// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handlers, validators, and the slots that pair them

use crate::args::Args;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Failure raised by a handler or validator
///
/// The core never wraps it: the caller of `fire` receives the same boxed
/// error the handler returned and can downcast it to the concrete type.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a handler returns for one invocation
pub type HandlerResult = Result<Value, HandlerError>;

type HandlerFn = dyn Fn(&Args) -> HandlerResult + Send + Sync;
type ValidatorFn = dyn Fn(&Args) -> Result<bool, HandlerError> + Send + Sync;

/// A callable registered against an event
///
/// Clones share the callable, so a clone is the same handler for
/// identity-based lookups (`attach_validator`, `remove`).
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Args) -> HandlerResult + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a handler that cannot fail
    pub fn infallible<F, V>(f: F) -> Self
    where
        F: Fn(&Args) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::new(move |args| Ok(f(args).into()))
    }

    pub fn call(&self, args: &Args) -> HandlerResult {
        (self.0)(args)
    }

    /// Whether both handles refer to the same registered callable
    pub fn ptr_eq(&self, other: &Handler) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Predicate deciding whether a handler participates in a fire
#[derive(Clone)]
pub struct Validator(Arc<ValidatorFn>);

impl Validator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Args) -> Result<bool, HandlerError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Wrap a predicate that cannot fail
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Args) -> bool + Send + Sync + 'static,
    {
        Self::new(move |args| Ok(f(args)))
    }

    pub fn check(&self, args: &Args) -> Result<bool, HandlerError> {
        (self.0)(args)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// One registration on an event: a handler and its optional validator
#[derive(Debug, Clone)]
pub struct HandlerSlot {
    handler: Handler,
    validator: Option<Validator>,
}

impl HandlerSlot {
    pub fn new(handler: Handler, validator: Option<Validator>) -> Self {
        Self { handler, validator }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    pub fn set_validator(&mut self, validator: Validator) {
        self.validator = Some(validator);
    }

    /// Validate then invoke
    ///
    /// Returns `Ok(None)` when the validator rejects the arguments; the
    /// handler is not called in that case.
    pub fn invoke(&self, args: &Args) -> Result<Option<Value>, HandlerError> {
        if let Some(validator) = &self.validator {
            if !validator.check(args)? {
                return Ok(None);
            }
        }
        self.handler.call(args).map(Some)
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
