//! Page scroll lock shared by every mounted deck
//!
//! While any deck has a card expanded, the page underneath must not
//! scroll. Ownership is reference-counted: each expanded deck holds one
//! `ScrollLockGuard`, the first acquisition saves the page overflow and
//! switches it to `Hidden`, and dropping the last guard restores the saved
//! value. Restoration therefore happens on every exit path, including a
//! deck being dropped while still expanded.

use std::cell::RefCell;
use std::rc::Rc;

/// Page overflow behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Page scrolls normally
    #[default]
    Auto,
    /// Page scrolling suppressed
    Hidden,
}

#[derive(Debug, Default)]
struct LockState {
    holders: usize,
    overflow: Overflow,
    /// Overflow in effect before the first holder arrived
    saved: Option<Overflow>,
}

/// Shared handle to the page scroll lock (single-threaded, cheap to clone)
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    state: Rc<RefCell<LockState>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one share of the lock; scrolling stays suppressed until every
    /// guard has been dropped
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        if state.holders == 0 {
            state.saved = Some(state.overflow);
            state.overflow = Overflow::Hidden;
            tracing::trace!("scroll lock engaged");
        }
        state.holders += 1;

        ScrollLockGuard {
            state: Rc::clone(&self.state),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().holders > 0
    }

    /// Number of live guards
    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.state.borrow().holders
    }

    /// Effective page overflow right now
    pub fn overflow(&self) -> Overflow {
        self.state.borrow().overflow
    }

    /// Whether the page may scroll
    pub fn allows_scroll(&self) -> bool {
        self.overflow() == Overflow::Auto
    }

    /// Change the page's own overflow setting.
    ///
    /// While locked this only updates the value restored on release.
    #[cfg(test)]
    pub fn set_overflow(&self, overflow: Overflow) {
        let mut state = self.state.borrow_mut();
        if state.holders > 0 {
            state.saved = Some(overflow);
        } else {
            state.overflow = overflow;
        }
    }
}

/// One share of the scroll lock, released on drop
#[must_use = "dropping the guard releases the scroll lock immediately"]
#[derive(Debug)]
pub struct ScrollLockGuard {
    state: Rc<RefCell<LockState>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.overflow = state.saved.take().unwrap_or_default();
            tracing::trace!("scroll lock released");
        }
    }
}
