//! Input contracts for the core engine.
//!
//! Adapters build and pass these into Engine::update() each frame: viewport
//! observations from their observer of choice, the current scroll position,
//! and teardown commands.

use serde::{Deserialize, Serialize};

use crate::ids::{CounterId, LayerSetId, RevealSetId};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Viewport entry/exit observations applied before ticking.
    #[serde(default)]
    pub observations: Vec<ObservationEvent>,
    /// Page scroll position in px, when it changed this frame.
    #[serde(default)]
    pub scroll: Option<f32>,
    /// Structural commands applied before observations.
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// Which tracked entity an observation refers to.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ObserverTarget {
    Counter(CounterId),
    RevealElement { set: RevealSetId, index: u32 },
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct ObservationEvent {
    pub target: ObserverTarget,
    /// True when the element crossed its threshold into view.
    pub entered: bool,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Release a counter and its binding; pending state is dropped.
    RemoveCounter { id: CounterId },
    /// Release a reveal set; pending stagger flips are dropped with it.
    RemoveRevealSet { id: RevealSetId },
    /// Release a parallax layer set.
    RemoveLayerSet { id: LayerSetId },
}
