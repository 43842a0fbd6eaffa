//! Modal host and page scroll lock.
//!
//! Opening any modal acquires the lock; every exit path (close button,
//! Escape, backdrop click, successful submit) funnels through close(), which
//! is the only place the lock is released. There is no way to clear the
//! active modal without releasing.

use serde::{Deserialize, Serialize};

/// The modals the page can present.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    TrialSignup,
    PartnerSignup,
    ServiceDetail(u32),
}

/// Which exit path closed a modal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseVia {
    Button,
    Escape,
    Backdrop,
    Submit,
}

/// Counting lock over the page scroll. Adapters watch lock transitions and
/// toggle the host document's overflow style.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: u32,
}

impl ScrollLock {
    /// Returns true when this acquisition locked the page (0 → 1 holders).
    pub fn acquire(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns true when this release unlocked the page (1 → 0 holders).
    pub fn release(&mut self) -> bool {
        match self.holders {
            0 => {
                log::debug!("scroll lock released with no holders");
                false
            }
            1 => {
                self.holders = 0;
                true
            }
            _ => {
                self.holders -= 1;
                false
            }
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }
}

/// Result of a modal transition, for the page engine to turn into events.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModalTransition {
    pub kind: ModalKind,
    /// Lock state flipped as part of this transition.
    pub lock_changed: bool,
}

#[derive(Debug, Default)]
pub struct ModalHost {
    active: Option<ModalKind>,
    lock: ScrollLock,
}

impl ModalHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn active(&self) -> Option<ModalKind> {
        self.active
    }

    #[inline]
    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Present a modal. Switching directly between modals keeps the single
    /// lock hold; the first open acquires it.
    pub fn open(&mut self, kind: ModalKind) -> ModalTransition {
        let lock_changed = if self.active.is_none() {
            self.lock.acquire()
        } else {
            false
        };
        self.active = Some(kind);
        ModalTransition { kind, lock_changed }
    }

    /// Dismiss the active modal, whichever exit path was taken.
    /// Returns None when nothing is open (Escape with no modal is a no-op).
    pub fn close(&mut self, _via: CloseVia) -> Option<ModalTransition> {
        let kind = self.active.take()?;
        let lock_changed = self.lock.release();
        Some(ModalTransition { kind, lock_changed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_counts_holders() {
        let mut lock = ScrollLock::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(!lock.release());
        assert!(lock.release());
        assert!(!lock.is_locked());
        // Releasing an unheld lock is tolerated.
        assert!(!lock.release());
    }

    #[test]
    fn switching_modals_keeps_one_hold() {
        let mut host = ModalHost::new();
        let t = host.open(ModalKind::TrialSignup);
        assert!(t.lock_changed);
        let t = host.open(ModalKind::PartnerSignup);
        assert!(!t.lock_changed);
        let t = host.close(CloseVia::Button).expect("open");
        assert!(t.lock_changed);
        assert!(!host.is_scroll_locked());
    }
}
