// Generated by pfgen from ctx_func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and returning nothing.
///
/// The carrier rides ahead of the counted parameters and is handed to the
/// wrapped closure on every invocation.
pub struct CtxFunc2<P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(Ctx, P0, P1)>);

impl<P0: Clone + 'static, P1: Clone + 'static> CtxFunc2<P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0, P1) + 'static) -> Self {
        CtxFunc2(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0, p1: P1) {
        (self.0)(ctx, p0, p1);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc2<P0, P1> {
        CtxFunc2::new(move |ctx, p0, p1| {
            let start = Instant::now();
            (self.0)(ctx, p0, p1);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> CtxFunc2Error<P0, P1> {
        CtxFunc2Error::new(move |ctx, p0, p1| {
            (self.0)(ctx, p0, p1);
            Ok(())
        })
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc2<P0, P1> {
        CtxFunc2::new(move |ctx, p0, p1| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0, p1);
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc2<P0, P1> {
        CtxFunc2::new(move |ctx, p0, p1| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0, p1);
        })
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static> CtxFunc2<P0, P1> {
    pub fn curry1(self, p0: P0) -> CtxFunc1<P1> {
        CtxFunc1::new(move |ctx, p1| (self.0)(ctx, p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> CtxFunc {
        CtxFunc::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone()))
    }
}
