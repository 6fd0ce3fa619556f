use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable running under a [`Ctx`] carrier and producing a value or an
/// error.
pub struct CtxFuncResult<T: 'static>(Box<dyn Fn(Ctx) -> Result<T, Error>>);

impl<T: 'static> CtxFuncResult<T> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx) -> Result<T, Error> + 'static) -> Self {
        CtxFuncResult(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx) -> Result<T, Error> {
        (self.0)(ctx)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| {
            let start = Instant::now();
            let out = (self.0)(ctx);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    /// Pair with [`retry_immediately`] to make carrier errors final.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| {
            let mut attempts = 1;
            loop {
                match (self.0)(ctx.clone()) {
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
    pub fn must(self) -> CtxFuncValue<T> {
        CtxFuncValue::new(move |ctx| (self.0)(ctx).unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> CtxFuncResult<T> {
        let msg = msg.into();
        CtxFuncResult::new(move |ctx| (self.0)(ctx).map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| (self.0)(ctx).map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| (self.0)(ctx).map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> CtxFuncValue<T>
    where
        T: Clone,
    {
        CtxFuncValue::new(move |ctx| (self.0)(ctx).unwrap_or_else(|_| val.clone()))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFuncResult<T> {
        CtxFuncResult::new(move |ctx| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx)
        })
    }
}
