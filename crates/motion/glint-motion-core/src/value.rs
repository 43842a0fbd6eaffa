//! Output value kinds emitted by the engine.
//!
//! Counters render as Text, reveal flags as Bool, parallax offsets as Float.
//! Adapters apply these to the host however they see fit (textContent,
//! class toggles, transform styles).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    Float(f32),
    Bool(bool),
    Text(String),
}

impl Value {
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}
