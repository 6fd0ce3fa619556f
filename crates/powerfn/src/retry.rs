//! Retry predicates for the `retry` combinator.

use anyhow::Error;

use crate::CtxError;

/// Retry up to `max_attempts` attempts with no backoff, except that errors
/// raised by the carrier are final: a cancelled or expired [`crate::Ctx`]
/// will not be retried.
pub fn retry_immediately(max_attempts: u32) -> impl Fn(u32, &Error) -> bool {
    move |attempts, err| {
        if err.downcast_ref::<CtxError>().is_some() {
            return false;
        }
        attempts < max_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn gives_up_after_max_attempts() {
        let try_again = retry_immediately(3);
        let err = anyhow!("boom");
        assert!(try_again(1, &err));
        assert!(try_again(2, &err));
        assert!(!try_again(3, &err));
    }

    #[test]
    fn carrier_errors_are_final() {
        let try_again = retry_immediately(3);
        assert!(!try_again(1, &Error::new(CtxError::Cancelled)));
        assert!(!try_again(1, &Error::new(CtxError::DeadlineExceeded)));
    }
}
