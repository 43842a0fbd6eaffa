//! Glint Motion Core (host-agnostic)
//!
//! Scroll-driven presentation logic for landing pages: viewport-triggered
//! animated counters, staggered reveal sets, and scroll-linked parallax
//! layers. The engine owns all state and is advanced by `update(dt, inputs)`;
//! adapters (web/WASM) feed it observer events and scroll positions and apply
//! the emitted changes to their host.

pub mod binding;
pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod value;

// Re-exports for consumers (adapters)
pub use binding::{BindingTable, ChannelKey, TargetHandle, TargetResolver};
pub use config::Config;
pub use counter::{
    group_thousands, Count, Counter, CounterSpec, COUNTER_RUN_MS, COUNTER_VIEW_THRESHOLD,
};
pub use engine::Engine;
pub use geometry::{intersection_ratio, Rect};
pub use ids::{CounterId, IdAllocator, LayerSetId, RevealSetId};
pub use inputs::{Command, Inputs, ObservationEvent, ObserverTarget};
pub use outputs::{Change, MotionEvent, Outputs};
pub use parallax::Layer;
pub use reveal::{RevealConfig, RevealSet};
pub use theme::Theme;
pub use value::Value;
