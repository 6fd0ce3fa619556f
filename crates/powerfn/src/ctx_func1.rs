// Generated by pfgen from ctx_func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and returning nothing.
///
/// The carrier rides ahead of the counted parameters and is handed to the
/// wrapped closure on every invocation.
pub struct CtxFunc1<P0: Clone + 'static>(Box<dyn Fn(Ctx, P0)>);

impl<P0: Clone + 'static> CtxFunc1<P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0) + 'static) -> Self {
        CtxFunc1(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0) {
        (self.0)(ctx, p0);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc1<P0> {
        CtxFunc1::new(move |ctx, p0| {
            let start = Instant::now();
            (self.0)(ctx, p0);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> CtxFunc1Error<P0> {
        CtxFunc1Error::new(move |ctx, p0| {
            (self.0)(ctx, p0);
            Ok(())
        })
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc1<P0> {
        CtxFunc1::new(move |ctx, p0| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0);
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc1<P0> {
        CtxFunc1::new(move |ctx, p0| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0);
        })
    }
}

impl<P0: Clone + 'static> CtxFunc1<P0> {
    pub fn curry1(self, p0: P0) -> CtxFunc {
        CtxFunc::new(move |ctx| (self.0)(ctx, p0.clone()))
    }
}
