// Generated by pfgen from ctx_func_result.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable running under a [`Ctx`] carrier and producing a value or an
/// error.
pub struct CtxFunc1Result<T: 'static, P0: Clone + 'static>(Box<dyn Fn(Ctx, P0) -> Result<T, Error>>);

impl<T: 'static, P0: Clone + 'static> CtxFunc1Result<T, P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0) -> Result<T, Error> + 'static) -> Self {
        CtxFunc1Result(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0) -> Result<T, Error> {
        (self.0)(ctx, p0)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0| {
            let start = Instant::now();
            let out = (self.0)(ctx, p0);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    /// Pair with [`retry_immediately`] to make carrier errors final.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0: P0| {
            let mut attempts = 1;
            loop {
                match (self.0)(ctx.clone(), p0.clone()) {
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
    pub fn must(self) -> CtxFunc1Value<T, P0> {
        CtxFunc1Value::new(move |ctx, p0| (self.0)(ctx, p0).unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> CtxFunc1Result<T, P0> {
        let msg = msg.into();
        CtxFunc1Result::new(move |ctx, p0| (self.0)(ctx, p0).map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0| (self.0)(ctx, p0).map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0| (self.0)(ctx, p0).map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> CtxFunc1Value<T, P0>
    where
        T: Clone,
    {
        CtxFunc1Value::new(move |ctx, p0| (self.0)(ctx, p0).unwrap_or_else(|_| val.clone()))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc1Result<T, P0> {
        CtxFunc1Result::new(move |ctx, p0| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0)
        })
    }
}

impl<T: 'static, P0: Clone + 'static> CtxFunc1Result<T, P0> {
    pub fn curry1(self, p0: P0) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| (self.0)(ctx, p0.clone()))
    }
}
