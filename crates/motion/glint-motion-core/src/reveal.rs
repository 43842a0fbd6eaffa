//! Staggered reveal sets: per-element visibility flags flipped on viewport
//! entry after an index-based delay, and cleared immediately on exit.

use serde::{Deserialize, Serialize};

use crate::ids::RevealSetId;

/// Observation/stagger parameters for one set of tracked elements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of element area that must intersect the viewport.
    pub threshold: f32,
    /// Bottom root margin in px; negative values trigger before the element
    /// reaches the literal viewport edge.
    pub root_margin_bottom: f32,
    /// Per-index delay step in milliseconds.
    pub stagger_step_ms: f32,
    /// When set, the stagger index wraps (`index % wrap`), restarting the
    /// delay ramp every `wrap` elements.
    #[serde(default)]
    pub wrap: Option<u32>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin_bottom: -50.0,
            stagger_step_ms: 200.0,
            wrap: None,
        }
    }
}

impl RevealConfig {
    /// Stagger delay in seconds for the element at `index`.
    #[inline]
    pub fn delay_secs(&self, index: usize) -> f32 {
        let effective = match self.wrap {
            Some(w) if w > 0 => (index as u32 % w) as f32,
            _ => index as f32,
        };
        effective * self.stagger_step_ms / 1000.0
    }
}

#[derive(Debug)]
struct Element {
    path: String,
    visible: bool,
    /// Seconds until a scheduled entry flip lands.
    pending: Option<f32>,
}

/// Visibility transition surfaced to the engine: (element index, visible).
pub type Transition = (usize, bool);

/// An ordered set of tracked elements sharing one RevealConfig.
#[derive(Debug)]
pub struct RevealSet {
    pub id: RevealSetId,
    pub cfg: RevealConfig,
    elements: Vec<Element>,
}

impl RevealSet {
    pub fn new(id: RevealSetId, cfg: RevealConfig, paths: Vec<String>) -> Self {
        let elements = paths
            .into_iter()
            .map(|path| Element {
                path,
                visible: false,
                pending: None,
            })
            .collect();
        Self { id, cfg, elements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn path(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(|e| e.path.as_str())
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.elements.get(index).map(|e| e.visible).unwrap_or(false)
    }

    /// Viewport observation for one element. Entry schedules a delayed flip;
    /// exit clears the flag immediately but leaves any pending entry flip in
    /// place (a flip may land after the element has left view).
    /// Returns a hidden transition when the flag was cleared.
    pub fn on_observation(&mut self, index: usize, entered: bool) -> Option<Transition> {
        let delay = self.cfg.delay_secs(index);
        let el = match self.elements.get_mut(index) {
            Some(el) => el,
            None => {
                log::debug!("reveal observation for unknown index {index}");
                return None;
            }
        };
        if entered {
            el.pending = Some(delay);
            None
        } else {
            let was_visible = el.visible;
            el.visible = false;
            was_visible.then_some((index, false))
        }
    }

    /// Advance pending flips by dt seconds, collecting shown transitions.
    pub fn tick(&mut self, dt: f32, out: &mut Vec<Transition>) {
        for (index, el) in self.elements.iter_mut().enumerate() {
            if let Some(remaining) = el.pending {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    el.pending = None;
                    if !el.visible {
                        el.visible = true;
                        out.push((index, true));
                    }
                } else {
                    el.pending = Some(remaining);
                }
            }
        }
    }
}
