//! Structured events emitted by successful steps.
//!
//! Every successful command yields a [`Response`] holding an ordered list of
//! [`Event`]s, each an ordered list of key/value [`Attribute`]s.

use serde::{Deserialize, Serialize};

use crate::constants::MODULE_NAME;

/// Event type used for all listing-module events.
pub const EVENT_TYPE_MESSAGE: &str = "message";

/// Attribute key naming the emitting module.
pub const ATTRIBUTE_KEY_MODULE: &str = "module";

/// Attribute key carrying the fee charged by the step.
pub const ATTRIBUTE_KEY_FEE: &str = "fee";

/// One key/value pair of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// A typed, ordered bag of attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub kind: String,
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// A `message` event with no attributes yet.
    #[must_use]
    pub fn message() -> Self {
        Self {
            kind: EVENT_TYPE_MESSAGE.to_string(),
            attributes: Vec::new(),
        }
    }

    /// A `message` event carrying only `module=dex`.
    #[must_use]
    pub fn module() -> Self {
        Self::message().attr(ATTRIBUTE_KEY_MODULE, MODULE_NAME)
    }

    /// Append an attribute (builder style).
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push(Attribute {
            key: key.into(),
            value: value.to_string(),
        });
        self
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Success outcome of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub events: Vec<Event>,
}

impl Response {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Look up `key` across all events, first match wins.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.events.iter().find_map(|e| e.get(key))
    }
}
