//! Cancellation/deadline carrier threaded through the `CtxFunc*` wrappers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Why a context refused to proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CtxError {
    #[error("context cancelled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// A cancellation/deadline carrier, passed as the first argument of every
/// `CtxFunc*` wrapper and never counted towards its arity.
///
/// Cloning is cheap. Derived contexts share their ancestors' cancel flags,
/// so cancelling a parent also cancels every child, and a child's deadline
/// can only be equal to or earlier than its parent's.
///
/// Wrapped functions cooperate by calling [`Ctx::check`] at suitable points.
#[derive(Debug, Clone, Default)]
pub struct Ctx {
    deadline: Option<Instant>,
    flags: Vec<Arc<AtomicBool>>,
}

impl Ctx {
    /// A context with no deadline that can never be cancelled.
    pub fn background() -> Ctx {
        Ctx::default()
    }

    /// Derive a child with its own cancel flag; the handle trips it.
    pub fn cancellable(&self) -> (Ctx, CancelHandle) {
        let flag = Arc::new(AtomicBool::new(false));
        let mut child = self.clone();
        child.flags.push(flag.clone());
        (child, CancelHandle { flag })
    }

    /// Derive a child whose deadline is at most `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Ctx {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child whose deadline is at most `deadline`. An earlier
    /// deadline inherited from the parent wins.
    pub fn with_deadline(&self, deadline: Instant) -> Ctx {
        let mut child = self.clone();
        child.deadline = Some(match child.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        child
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.flags.iter().any(|flag| flag.load(Ordering::Relaxed))
    }

    /// `Ok` while the context is live, otherwise the reason it is not.
    pub fn check(&self) -> Result<(), CtxError> {
        if self.is_cancelled() {
            return Err(CtxError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(CtxError::DeadlineExceeded);
        }
        Ok(())
    }
}

/// Trips the cancel flag of the context it was derived from.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_live() {
        assert_eq!(Ctx::background().check(), Ok(()));
    }

    #[test]
    fn cancel_propagates_to_children() {
        let (parent, handle) = Ctx::background().cancellable();
        let child = parent.with_timeout(Duration::from_secs(60));
        assert_eq!(child.check(), Ok(()));

        handle.cancel();
        assert_eq!(parent.check(), Err(CtxError::Cancelled));
        assert_eq!(child.check(), Err(CtxError::Cancelled));
    }

    #[test]
    fn child_cancel_leaves_parent_live() {
        let parent = Ctx::background();
        let (child, handle) = parent.cancellable();
        handle.cancel();
        assert_eq!(child.check(), Err(CtxError::Cancelled));
        assert_eq!(parent.check(), Ok(()));
    }

    #[test]
    fn earlier_deadline_wins() {
        let near = Instant::now() + Duration::from_millis(10);
        let ctx = Ctx::background().with_deadline(near);
        let loosened = ctx.with_timeout(Duration::from_secs(60));
        assert_eq!(loosened.deadline(), Some(near));
    }

    #[test]
    fn past_deadline_is_exceeded() {
        let ctx = Ctx::background().with_timeout(Duration::from_secs(0));
        assert_eq!(ctx.check(), Err(CtxError::DeadlineExceeded));
    }
}
