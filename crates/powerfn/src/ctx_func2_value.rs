// Generated by pfgen from ctx_func_value.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable running under a [`Ctx`] carrier and producing a value.
pub struct CtxFunc2Value<R: 'static, P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(Ctx, P0, P1) -> R>);

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static> CtxFunc2Value<R, P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0, P1) -> R + 'static) -> Self {
        CtxFunc2Value(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0, p1: P1) -> R {
        (self.0)(ctx, p0, p1)
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc2Value<R, P0, P1> {
        CtxFunc2Value::new(move |ctx, p0, p1| {
            let start = Instant::now();
            let out = (self.0)(ctx, p0, p1);
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> CtxFunc2Result<R, P0, P1> {
        CtxFunc2Result::new(move |ctx, p0, p1| Ok((self.0)(ctx, p0, p1)))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc2Value<R, P0, P1> {
        CtxFunc2Value::new(move |ctx, p0, p1| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0, p1)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc2Value<R, P0, P1> {
        CtxFunc2Value::new(move |ctx, p0, p1| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0, p1)
        })
    }
}

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static> CtxFunc2Value<R, P0, P1> {
    pub fn curry1(self, p0: P0) -> CtxFunc1Value<R, P1> {
        CtxFunc1Value::new(move |ctx, p1| (self.0)(ctx, p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> CtxFuncValue<R> {
        CtxFuncValue::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone()))
    }
}
