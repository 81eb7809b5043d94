//! Recurring timer seam for the quiz countdown.
//!
//! # Responsibility
//! - Let the host own the real interval primitive (browser interval,
//!   event-loop timer, test clock).
//! - Guarantee each armed interval is cancelled exactly once.
//!
//! # Invariants
//! - `TimerHandle::cancel` is idempotent; drop cancels too.
//! - A driver never sees `cancel` for a token it did not hand out.

use log::debug;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Opaque id for one armed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

/// Host-provided recurring timer primitive.
///
/// Ticks are not delivered through this trait: the host calls
/// `Widget::tick` (or `QuizPanel::tick`) on every period while the token
/// is active.
pub trait TimerDriver {
    fn start_interval(&self, period: Duration) -> TimerToken;
    fn cancel(&self, token: TimerToken);
}

/// Owner of one armed interval.
pub struct TimerHandle {
    token: Option<TimerToken>,
    driver: Rc<dyn TimerDriver>,
}

impl TimerHandle {
    /// Arms a new interval on `driver`.
    pub fn start(driver: Rc<dyn TimerDriver>, period: Duration) -> Self {
        let token = driver.start_interval(period);
        debug!("event=timer_start module=timer status=ok token={}", token.0);
        Self {
            token: Some(token),
            driver,
        }
    }

    /// Cancels the interval. Later calls do nothing.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            self.driver.cancel(token);
            debug!("event=timer_cancel module=timer status=ok token={}", token.0);
        }
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<TimerToken> {
        self.token
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("token", &self.token)
            .finish()
    }
}

/// Bookkeeping driver: the host pumps ticks by hand.
///
/// Used by the CLI smoke binary and tests; also a reasonable default for hosts
/// that already run their own one-second loop.
#[derive(Debug, Default)]
pub struct ManualTimerDriver {
    state: RefCell<ManualTimerState>,
}

#[derive(Debug, Default)]
struct ManualTimerState {
    next_token: u64,
    active: BTreeSet<TimerToken>,
    started: usize,
    cancelled: usize,
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens armed and not yet cancelled.
    pub fn active_tokens(&self) -> Vec<TimerToken> {
        self.state.borrow().active.iter().copied().collect()
    }

    pub fn started_count(&self) -> usize {
        self.state.borrow().started
    }

    pub fn cancelled_count(&self) -> usize {
        self.state.borrow().cancelled
    }
}

impl TimerDriver for ManualTimerDriver {
    fn start_interval(&self, _period: Duration) -> TimerToken {
        let mut state = self.state.borrow_mut();
        state.next_token += 1;
        let token = TimerToken(state.next_token);
        state.active.insert(token);
        state.started += 1;
        token
    }

    fn cancel(&self, token: TimerToken) {
        let mut state = self.state.borrow_mut();
        if state.active.remove(&token) {
            state.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualTimerDriver, TimerDriver, TimerHandle};
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn cancel_is_idempotent() {
        let driver = Rc::new(ManualTimerDriver::new());
        let mut handle = TimerHandle::start(driver.clone(), Duration::from_secs(1));
        assert!(handle.is_active());
        assert_eq!(driver.active_tokens().len(), 1);

        handle.cancel();
        handle.cancel();
        drop(handle);

        assert!(driver.active_tokens().is_empty());
        assert_eq!(driver.started_count(), 1);
        assert_eq!(driver.cancelled_count(), 1);
    }

    #[test]
    fn dropping_handle_cancels_interval() {
        let driver = Rc::new(ManualTimerDriver::new());
        {
            let _handle = TimerHandle::start(driver.clone(), Duration::from_secs(1));
            assert_eq!(driver.active_tokens().len(), 1);
        }
        assert!(driver.active_tokens().is_empty());
        assert_eq!(driver.cancelled_count(), 1);
    }

    #[test]
    fn driver_ignores_unknown_tokens() {
        let driver = ManualTimerDriver::new();
        let token = driver.start_interval(Duration::from_secs(1));
        driver.cancel(token);
        driver.cancel(token);
        assert_eq!(driver.cancelled_count(), 1);
    }
}
