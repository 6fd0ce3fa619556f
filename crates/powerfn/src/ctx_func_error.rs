use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable running under a [`Ctx`] carrier and reporting only an error.
pub struct CtxFuncError(Box<dyn Fn(Ctx) -> Result<(), Error>>);

impl CtxFuncError {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx) -> Result<(), Error> + 'static) -> Self {
        CtxFuncError(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx) -> Result<(), Error> {
        (self.0)(ctx)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFuncError {
        CtxFuncError::new(move |ctx| {
            let start = Instant::now();
            let out = (self.0)(ctx);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    /// Pair with [`retry_immediately`] to make carrier errors final.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> CtxFuncError {
        CtxFuncError::new(move |ctx| {
            let mut attempts = 1;
            loop {
                match (self.0)(ctx.clone()) {
                    Ok(()) => return Ok(()),
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

    /// Convert failure into a panic.
    pub fn must(self) -> CtxFunc {
        CtxFunc::new(move |ctx| {
            if let Err(err) = (self.0)(ctx) {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> CtxFuncError {
        let msg = msg.into();
        CtxFuncError::new(move |ctx| (self.0)(ctx).map_err(|err| err.context(msg.clone())))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFuncError {
        CtxFuncError::new(move |ctx| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFuncError {
        CtxFuncError::new(move |ctx| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx)
        })
    }
}
