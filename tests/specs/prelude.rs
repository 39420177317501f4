//! Shared helpers for the behavioral specs

pub use herald_core::{
    Args, CallLog, EventError, EventKind, EventManager, EventsConfig, Handler, Validator,
};
pub use serde_json::{json, Value};
use std::collections::HashSet;

/// Fire results as a set of their JSON text, for unordered comparison
pub fn result_set(results: &[Value]) -> HashSet<String> {
    results.iter().map(Value::to_string).collect()
}

/// Validator passing only when the first positional argument equals `expected`
pub fn first_arg_is(expected: &'static str) -> Validator {
    Validator::predicate(move |args| args.str(0) == Some(expected))
}
