// Generated by pfgen from ctx_func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and returning nothing.
///
/// The carrier rides ahead of the counted parameters and is handed to the
/// wrapped closure on every invocation.
pub struct CtxFunc3<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(Ctx, P0, P1, P2)>);

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> CtxFunc3<P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0, P1, P2) + 'static) -> Self {
        CtxFunc3(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0, p1: P1, p2: P2) {
        (self.0)(ctx, p0, p1, p2);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc3<P0, P1, P2> {
        CtxFunc3::new(move |ctx, p0, p1, p2| {
            let start = Instant::now();
            (self.0)(ctx, p0, p1, p2);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> CtxFunc3Error<P0, P1, P2> {
        CtxFunc3Error::new(move |ctx, p0, p1, p2| {
            (self.0)(ctx, p0, p1, p2);
            Ok(())
        })
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc3<P0, P1, P2> {
        CtxFunc3::new(move |ctx, p0, p1, p2| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0, p1, p2);
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc3<P0, P1, P2> {
        CtxFunc3::new(move |ctx, p0, p1, p2| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0, p1, p2);
        })
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> CtxFunc3<P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> CtxFunc2<P1, P2> {
        CtxFunc2::new(move |ctx, p1, p2| (self.0)(ctx, p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> CtxFunc1<P2> {
        CtxFunc1::new(move |ctx, p2| (self.0)(ctx, p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> CtxFunc {
        CtxFunc::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone(), p2.clone()))
    }
}
