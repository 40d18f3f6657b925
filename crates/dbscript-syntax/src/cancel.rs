//! Cooperative cancellation
//!
//! Long traversals (hierarchy walks, modifier scans) poll a
//! [`CancellationToken`] at each step so an interactive host can abandon
//! work mid-flight. Cancellation is cooperative, never preemptive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signal that an operation was abandoned before completion.
///
/// Returned by every cancellable operation in the workspace; callers
/// propagate it with `?` and emit no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("operation was cancelled")]
pub struct Cancelled;

/// Shared cooperative cancellation flag.
///
/// Cheap to clone; all clones observe the same flag. A token created with
/// [`CancellationToken::new`] starts un-cancelled and can only transition
/// to cancelled, never back.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, un-cancelled token
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation on every clone of this token
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Poll the token at a traversal step
    ///
    /// # Errors
    /// Returns [`Cancelled`] if cancellation has been requested.
    #[inline]
    pub fn checkpoint(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert!(token.checkpoint().is_ok());
    }

    #[test]
    fn cancel_is_observed_by_clones() {
        let token = CancellationToken::new();
        let clone = token.clone();

        token.cancel();

        assert!(clone.is_cancelled());
        assert_eq!(clone.checkpoint(), Err(Cancelled));
    }

    #[test]
    fn cancellation_is_sticky() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
