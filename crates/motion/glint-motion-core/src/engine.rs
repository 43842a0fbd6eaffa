//! Engine: data ownership and public API.
//!
//! Methods:
//! - new, add_counter, add_reveal_set, add_layer_set, prebind (resolver),
//!   update (apply inputs → tick → emit changes/events)

use crate::binding::{BindingTable, ChannelKey, TargetResolver};
use crate::config::Config;
use crate::counter::{Counter, CounterSpec, TickOutcome};
use crate::ids::{CounterId, IdAllocator, LayerSetId, RevealSetId};
use crate::inputs::{Command, Inputs, ObserverTarget};
use crate::outputs::{Change, MotionEvent, Outputs};
use crate::parallax::{Layer, LayerSet};
use crate::reveal::{RevealConfig, RevealSet};
use crate::value::Value;

/// Engine (core) with host-agnostic handle type fixed to String.
#[derive(Debug)]
pub struct Engine {
    // Owned data
    cfg: Config,
    ids: IdAllocator,
    counters: Vec<Counter>,
    reveals: Vec<RevealSet>,
    layers: Vec<LayerSet>,

    // Systems
    binds: BindingTable,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            counters: Vec::with_capacity(cfg.initial_counters),
            reveals: Vec::with_capacity(cfg.initial_reveal_sets),
            layers: Vec::with_capacity(cfg.initial_layers),
            cfg,
            ids: IdAllocator::new(),
            binds: BindingTable::new(),
            outputs: Outputs::default(),
        }
    }

    /// Register an animated counter under a canonical output path.
    pub fn add_counter(&mut self, spec: CounterSpec, path: &str) -> CounterId {
        let id = self.ids.alloc_counter();
        self.counters.push(Counter::new(id, spec, path.to_string()));
        id
    }

    /// Register an ordered reveal set; one tracked element per path.
    pub fn add_reveal_set(&mut self, cfg: RevealConfig, paths: Vec<String>) -> RevealSetId {
        let id = self.ids.alloc_reveal();
        self.reveals.push(RevealSet::new(id, cfg, paths));
        id
    }

    /// Register a parallax layer set.
    pub fn add_layer_set(&mut self, layers: Vec<Layer>) -> LayerSetId {
        let id = self.ids.alloc_layer();
        self.layers.push(LayerSet::new(id, layers));
        id
    }

    /// Current displayed integer of a counter.
    pub fn counter_value(&self, id: CounterId) -> Option<i64> {
        self.counters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.value())
    }

    /// Current rendered string of a counter (prefix + grouped value + suffix).
    pub fn counter_render(&self, id: CounterId) -> Option<String> {
        self.counters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.render())
    }

    /// Current visibility flag of a reveal element.
    pub fn reveal_visible(&self, id: RevealSetId, index: usize) -> Option<bool> {
        self.reveals
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.is_visible(index))
    }

    /// Observation config of a reveal set, for adapters building observers.
    pub fn reveal_config(&self, id: RevealSetId) -> Option<&RevealConfig> {
        self.reveals.iter().find(|s| s.id == id).map(|s| &s.cfg)
    }

    /// One-time binding against a provided resolver.
    /// Iterates all registered channels and resolves canonical paths into
    /// host handles; unresolved channels keep their canonical path.
    pub fn prebind(&mut self, resolver: &mut dyn TargetResolver) {
        for c in &self.counters {
            if let Some(handle) = resolver.resolve(&c.path) {
                self.binds.upsert(ChannelKey::Counter(c.id), handle);
            }
        }
        for set in &self.reveals {
            for index in 0..set.len() {
                let path = set.path(index).unwrap_or_default();
                if let Some(handle) = resolver.resolve(path) {
                    self.binds.upsert(
                        ChannelKey::Reveal {
                            set: set.id,
                            index: index as u32,
                        },
                        handle,
                    );
                }
            }
        }
        for set in &self.layers {
            for (index, layer) in set.layers.iter().enumerate() {
                if let Some(handle) = resolver.resolve(&layer.path) {
                    self.binds.upsert(
                        ChannelKey::Layer {
                            set: set.id,
                            index: index as u32,
                        },
                        handle,
                    );
                }
            }
        }
    }

    /// Apply structural commands (teardown).
    fn apply_commands(&mut self, commands: Vec<Command>) {
        for cmd in commands {
            match cmd {
                Command::RemoveCounter { id } => {
                    self.counters.retain(|c| c.id != id);
                }
                Command::RemoveRevealSet { id } => {
                    // Pending stagger flips die with the set.
                    self.reveals.retain(|s| s.id != id);
                }
                Command::RemoveLayerSet { id } => {
                    self.layers.retain(|s| s.id != id);
                }
            }
        }
    }

    /// Step the simulation by dt seconds with given inputs, producing outputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        // 1) Structural commands first, so observations cannot target freed state.
        self.apply_commands(inputs.commands);

        let Self {
            counters,
            reveals,
            layers,
            binds,
            outputs,
            cfg,
            ..
        } = self;

        // 2) Viewport observations
        for obs in &inputs.observations {
            match obs.target {
                ObserverTarget::Counter(id) => {
                    let Some(c) = counters.iter_mut().find(|c| c.id == id) else {
                        log::debug!("observation for unknown counter {id:?}");
                        continue;
                    };
                    if c.on_visibility(obs.entered) {
                        outputs.push_event(MotionEvent::CounterStarted { counter: c.id });
                        outputs.push_change(Change {
                            key: binds
                                .handle_or(ChannelKey::Counter(c.id), &c.path)
                                .to_string(),
                            value: Value::Text(c.render()),
                        });
                    }
                }
                ObserverTarget::RevealElement { set, index } => {
                    let Some(s) = reveals.iter_mut().find(|s| s.id == set) else {
                        log::debug!("observation for unknown reveal set {set:?}");
                        continue;
                    };
                    if let Some((index, visible)) = s.on_observation(index as usize, obs.entered) {
                        let key = binds
                            .handle_or(
                                ChannelKey::Reveal {
                                    set: s.id,
                                    index: index as u32,
                                },
                                s.path(index).unwrap_or_default(),
                            )
                            .to_string();
                        outputs.push_change(Change {
                            key,
                            value: Value::Bool(visible),
                        });
                        outputs.push_event(MotionEvent::RevealHidden {
                            set: s.id,
                            index: index as u32,
                        });
                    }
                }
            }
        }

        // 3) Scroll-linked layers
        if let Some(scroll_y) = inputs.scroll {
            for set in layers.iter_mut() {
                if !set.set_scroll(scroll_y) {
                    continue;
                }
                for (index, layer) in set.layers.iter().enumerate() {
                    let key = binds
                        .handle_or(
                            ChannelKey::Layer {
                                set: set.id,
                                index: index as u32,
                            },
                            &layer.path,
                        )
                        .to_string();
                    outputs.push_change(Change {
                        key,
                        value: Value::Float(scroll_y * layer.factor),
                    });
                }
            }
        }

        // 4) Advance counters
        for c in counters.iter_mut() {
            let outcome = c.tick(dt);
            let changed = match outcome {
                TickOutcome::Idle => false,
                TickOutcome::Running { changed } => changed,
                TickOutcome::Finished { changed } => changed,
            };
            if changed {
                outputs.push_change(Change {
                    key: binds
                        .handle_or(ChannelKey::Counter(c.id), &c.path)
                        .to_string(),
                    value: Value::Text(c.render()),
                });
            }
            if matches!(outcome, TickOutcome::Finished { .. }) {
                outputs.push_event(MotionEvent::CounterFinished { counter: c.id });
            }
        }

        // 5) Fire due stagger flips
        let mut transitions = Vec::new();
        for s in reveals.iter_mut() {
            transitions.clear();
            s.tick(dt, &mut transitions);
            for &(index, visible) in &transitions {
                let key = binds
                    .handle_or(
                        ChannelKey::Reveal {
                            set: s.id,
                            index: index as u32,
                        },
                        s.path(index).unwrap_or_default(),
                    )
                    .to_string();
                outputs.push_change(Change {
                    key,
                    value: Value::Bool(visible),
                });
                outputs.push_event(MotionEvent::RevealShown {
                    set: s.id,
                    index: index as u32,
                });
            }
        }

        // 6) Event backpressure
        if outputs.events.len() > cfg.max_events_per_tick {
            let dropped = (outputs.events.len() - cfg.max_events_per_tick) as u32;
            outputs.events.truncate(cfg.max_events_per_tick);
            outputs.push_event(MotionEvent::EventsTruncated { dropped });
        }

        &self.outputs
    }
}
