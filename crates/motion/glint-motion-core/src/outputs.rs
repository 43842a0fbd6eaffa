//! Output contracts from the core engine.
//!
//! Outputs carry only the changes for this tick, keyed by stable string
//! TargetHandle, and a separate list of semantic events. Adapters apply
//! changes to the host and transport events.

use serde::{Deserialize, Serialize};

use crate::ids::{CounterId, RevealSetId};
use crate::value::Value;

/// One changed target value this tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Change {
    pub key: String, // TargetHandle (small string key)
    pub value: Value,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    CounterStarted {
        counter: CounterId,
    },
    CounterFinished {
        counter: CounterId,
    },
    RevealShown {
        set: RevealSetId,
        index: u32,
    },
    RevealHidden {
        set: RevealSetId,
        index: u32,
    },
    /// Dropped events once the per-tick cap was reached.
    EventsTruncated {
        dropped: u32,
    },
}

/// Outputs returned by Engine::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
