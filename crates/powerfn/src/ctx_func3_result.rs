// Generated by pfgen from ctx_func_result.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable running under a [`Ctx`] carrier and producing a value or an
/// error.
pub struct CtxFunc3Result<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(Ctx, P0, P1, P2) -> Result<T, Error>>);

impl<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> CtxFunc3Result<T, P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0, P1, P2) -> Result<T, Error> + 'static) -> Self {
        CtxFunc3Result(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0, p1: P1, p2: P2) -> Result<T, Error> {
        (self.0)(ctx, p0, p1, p2)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0, p1, p2| {
            let start = Instant::now();
            let out = (self.0)(ctx, p0, p1, p2);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    /// Pair with [`retry_immediately`] to make carrier errors final.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0: P0, p1: P1, p2: P2| {
            let mut attempts = 1;
            loop {
                match (self.0)(ctx.clone(), p0.clone(), p1.clone(), p2.clone()) {
                    Ok(v) => return Ok(v),
                    Err(err) => {
                        if !try_again(attempts, &err) {
                            return Err(err);
                        }
                        attempts += 1;
                    }
                }
            }
        })
    }

    /// Convert failure into a panic, leaving a bare-value callable.
    pub fn must(self) -> CtxFunc3Value<T, P0, P1, P2> {
        CtxFunc3Value::new(move |ctx, p0, p1, p2| (self.0)(ctx, p0, p1, p2).unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> CtxFunc3Result<T, P0, P1, P2> {
        let msg = msg.into();
        CtxFunc3Result::new(move |ctx, p0, p1, p2| (self.0)(ctx, p0, p1, p2).map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0, p1, p2| (self.0)(ctx, p0, p1, p2).map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0, p1, p2| (self.0)(ctx, p0, p1, p2).map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> CtxFunc3Value<T, P0, P1, P2>
    where
        T: Clone,
    {
        CtxFunc3Value::new(move |ctx, p0, p1, p2| (self.0)(ctx, p0, p1, p2).unwrap_or_else(|_| val.clone()))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0, p1, p2| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0, p1, p2)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc3Result<T, P0, P1, P2> {
        CtxFunc3Result::new(move |ctx, p0, p1, p2| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0, p1, p2)
        })
    }
}

impl<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> CtxFunc3Result<T, P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> CtxFunc2Result<T, P1, P2> {
        CtxFunc2Result::new(move |ctx, p1, p2| (self.0)(ctx, p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> CtxFunc1Result<T, P2> {
        CtxFunc1Result::new(move |ctx, p2| (self.0)(ctx, p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone(), p2.clone()))
    }
}
