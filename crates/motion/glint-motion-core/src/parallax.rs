//! Scroll-linked parallax layers: offset = scroll_y × factor, nothing more.

use serde::{Deserialize, Serialize};

use crate::ids::LayerSetId;

/// One background layer: a depth factor and a canonical output path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer {
    pub factor: f32,
    pub path: String,
}

impl Layer {
    pub fn new(factor: f32, path: &str) -> Self {
        Self {
            factor,
            path: path.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct LayerSet {
    pub id: LayerSetId,
    pub layers: Vec<Layer>,
    scroll_y: f32,
}

impl LayerSet {
    pub fn new(id: LayerSetId, layers: Vec<Layer>) -> Self {
        Self {
            id,
            layers,
            scroll_y: 0.0,
        }
    }

    /// Record a new scroll position; returns true when it moved.
    pub fn set_scroll(&mut self, scroll_y: f32) -> bool {
        if (scroll_y - self.scroll_y).abs() < f32::EPSILON {
            return false;
        }
        self.scroll_y = scroll_y;
        true
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll_y
    }

    /// Current offset in px for the layer at `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.layers.get(index).map(|l| self.scroll_y * l.factor)
    }
}
