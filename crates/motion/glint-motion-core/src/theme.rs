//! Cosmetic color-scheme selector carried alongside animated values.
//!
//! Theme has no effect on timing or displayed numbers; it is passed through
//! so adapters can pick accent classes without a second lookup table.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Teal,
    #[default]
    Blue,
    Cyan,
}

impl Theme {
    /// Stable lowercase name, usable as a CSS class suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Teal => "teal",
            Theme::Blue => "blue",
            Theme::Cyan => "cyan",
        }
    }
}
