use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and producing a value.
pub struct CtxFuncValue<R: 'static>(Box<dyn Fn(Ctx) -> R>);

impl<R: 'static> CtxFuncValue<R> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx) -> R + 'static) -> Self {
        CtxFuncValue(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx) -> R {
        (self.0)(ctx)
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFuncValue<R> {
        CtxFuncValue::new(move |ctx| {
            let start = Instant::now();
            let out = (self.0)(ctx);
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> CtxFuncResult<R> {
        CtxFuncResult::new(move |ctx| Ok((self.0)(ctx)))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFuncValue<R> {
        CtxFuncValue::new(move |ctx| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFuncValue<R> {
        CtxFuncValue::new(move |ctx| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx)
        })
    }
}
