use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and returning nothing.
///
/// The carrier rides ahead of the counted parameters and is handed to the
/// wrapped closure on every invocation.
pub struct CtxFunc(Box<dyn Fn(Ctx)>);

impl CtxFunc {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx) + 'static) -> Self {
        CtxFunc(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx) {
        (self.0)(ctx);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc {
        CtxFunc::new(move |ctx| {
            let start = Instant::now();
            (self.0)(ctx);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> CtxFuncError {
        CtxFuncError::new(move |ctx| {
            (self.0)(ctx);
            Ok(())
        })
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc {
        CtxFunc::new(move |ctx| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx);
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc {
        CtxFunc::new(move |ctx| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx);
        })
    }
}
