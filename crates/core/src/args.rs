// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arguments passed to handlers and validators when an event fires

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The argument set an event is fired with
///
/// Every handler and validator of an event receives the same `Args`.
/// Positional values keep their order; keyword values are looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Args {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    positional: Vec<Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    keywords: Map<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any previous value for `name`
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// Positional argument at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Keyword argument named `name`
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// Positional argument at `index` as a string slice
    pub fn str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &Map<String, Value> {
        &self.keywords
    }

    /// Total number of arguments, positional and keyword
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl From<Vec<Value>> for Args {
    fn from(positional: Vec<Value>) -> Self {
        Self {
            positional,
            keywords: Map::new(),
        }
    }
}

/// A single value becomes one positional argument
impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self::new().arg(value)
    }
}

impl From<&str> for Args {
    fn from(value: &str) -> Self {
        Self::new().arg(value)
    }
}

impl From<String> for Args {
    fn from(value: String) -> Self {
        Self::new().arg(value)
    }
}

/// Truthiness of a JSON value
///
/// `null`, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
