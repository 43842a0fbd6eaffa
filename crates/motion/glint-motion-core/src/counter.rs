//! Animated counters: a numeric endpoint animated over a fixed run once the
//! owning element enters the viewport, replayed on every re-entry.

use serde::{Deserialize, Serialize};

use crate::easing::eased_progress;
use crate::ids::CounterId;
use crate::theme::Theme;

/// Fixed run length in milliseconds. `CounterSpec::duration_ms` is accepted
/// for compatibility but the runner always animates over this constant.
pub const COUNTER_RUN_MS: u32 = 800;

/// Viewport-area fraction at which counter observers trigger.
pub const COUNTER_VIEW_THRESHOLD: f32 = 0.5;

fn default_duration_ms() -> u32 {
    1500
}

/// Counting direction. `DownFrom(start)` animates start → target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    #[default]
    Up,
    DownFrom(f32),
}

/// Declarative counter description supplied at registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target: f32,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Exposed but unused by the runner; see COUNTER_RUN_MS.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    #[serde(default)]
    pub mode: Count,
    /// Cosmetic only; passed through to adapters untouched.
    #[serde(default)]
    pub theme: Theme,
}

impl CounterSpec {
    pub fn new(target: f32) -> Self {
        Self {
            target,
            prefix: String::new(),
            suffix: String::new(),
            duration_ms: default_duration_ms(),
            mode: Count::Up,
            theme: Theme::default(),
        }
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn counting_down_from(mut self, from: f32) -> Self {
        self.mode = Count::DownFrom(from);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    /// Not yet triggered; displaying the initial value.
    Idle,
    /// Mid-run; elapsed seconds since the triggering entry.
    Running { elapsed: f32 },
    /// Run complete; holding the final value until the next entry.
    Held,
}

/// Outcome of advancing a counter by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Idle,
    Running { changed: bool },
    Finished { changed: bool },
}

/// A registered counter instance.
#[derive(Debug)]
pub struct Counter {
    pub id: CounterId,
    pub spec: CounterSpec,
    /// Canonical output path, resolved to a host handle via prebind.
    pub path: String,
    phase: Phase,
    value: i64,
}

impl Counter {
    pub fn new(id: CounterId, spec: CounterSpec, path: String) -> Self {
        let value = initial_value(&spec);
        Self {
            id,
            spec,
            path,
            phase: Phase::Idle,
            value,
        }
    }

    /// Current displayed integer.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Viewport observation. Entering resets the displayed value and
    /// (re)starts the run; leaving does not interrupt a run in flight.
    /// Returns true when a run was started.
    pub fn on_visibility(&mut self, entered: bool) -> bool {
        if !entered {
            return false;
        }
        self.value = initial_value(&self.spec);
        self.phase = Phase::Running { elapsed: 0.0 };
        true
    }

    /// Advance by dt seconds.
    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        let elapsed = match self.phase {
            Phase::Running { elapsed } => elapsed + dt,
            _ => return TickOutcome::Idle,
        };
        let duration = COUNTER_RUN_MS as f32 / 1000.0;
        let progress = (elapsed / duration).min(1.0);
        let eased = eased_progress(progress);

        let next = display_value(&self.spec, eased);
        let changed = next != self.value;
        self.value = next;

        if progress >= 1.0 {
            self.phase = Phase::Held;
            TickOutcome::Finished { changed }
        } else {
            self.phase = Phase::Running { elapsed };
            TickOutcome::Running { changed }
        }
    }

    /// Render the displayed value with prefix, thousands separators, suffix.
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            self.spec.prefix,
            group_thousands(self.value),
            self.spec.suffix
        )
    }
}

#[inline]
fn initial_value(spec: &CounterSpec) -> i64 {
    match spec.mode {
        Count::Up => 0,
        Count::DownFrom(from) => from.floor() as i64,
    }
}

#[inline]
fn display_value(spec: &CounterSpec, eased: f32) -> i64 {
    match spec.mode {
        Count::Up => (eased * spec.target).floor() as i64,
        Count::DownFrom(from) => (from - eased * (from - spec.target)).floor() as i64,
    }
}

/// Format an integer with comma thousands separators ("10000" -> "10,000").
pub fn group_thousands(v: i64) -> String {
    let negative = v < 0;
    let digits = v.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10000), "10,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1000), "-1,000");
    }
}
