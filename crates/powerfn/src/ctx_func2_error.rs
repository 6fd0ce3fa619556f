// Generated by pfgen from ctx_func_error.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable running under a [`Ctx`] carrier and reporting only an error.
pub struct CtxFunc2Error<P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(Ctx, P0, P1) -> Result<(), Error>>);

impl<P0: Clone + 'static, P1: Clone + 'static> CtxFunc2Error<P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(Ctx, P0, P1) -> Result<(), Error> + 'static) -> Self {
        CtxFunc2Error(Box::new(f))
    }

    /// Invoke the wrapped closure under `ctx`.
    pub fn exec(&self, ctx: Ctx, p0: P0, p1: P1) -> Result<(), Error> {
        (self.0)(ctx, p0, p1)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> CtxFunc2Error<P0, P1> {
        CtxFunc2Error::new(move |ctx, p0, p1| {
            let start = Instant::now();
            let out = (self.0)(ctx, p0, p1);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    /// Pair with [`retry_immediately`] to make carrier errors final.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> CtxFunc2Error<P0, P1> {
        CtxFunc2Error::new(move |ctx, p0: P0, p1: P1| {
            let mut attempts = 1;
            loop {
                match (self.0)(ctx.clone(), p0.clone(), p1.clone()) {
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
    pub fn must(self) -> CtxFunc2<P0, P1> {
        CtxFunc2::new(move |ctx, p0, p1| {
            if let Err(err) = (self.0)(ctx, p0, p1) {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> CtxFunc2Error<P0, P1> {
        let msg = msg.into();
        CtxFunc2Error::new(move |ctx, p0, p1| (self.0)(ctx, p0, p1).map_err(|err| err.context(msg.clone())))
    }

    /// Tighten the carrier's deadline to at most `timeout` from each call.
    pub fn with_timeout(self, timeout: Duration) -> CtxFunc2Error<P0, P1> {
        CtxFunc2Error::new(move |ctx, p0, p1| {
            let ctx = ctx.with_timeout(timeout);
            (self.0)(ctx, p0, p1)
        })
    }

    /// Tighten the carrier's deadline to at most `deadline`.
    pub fn with_deadline(self, deadline: Instant) -> CtxFunc2Error<P0, P1> {
        CtxFunc2Error::new(move |ctx, p0, p1| {
            let ctx = ctx.with_deadline(deadline);
            (self.0)(ctx, p0, p1)
        })
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static> CtxFunc2Error<P0, P1> {
    pub fn curry1(self, p0: P0) -> CtxFunc1Error<P1> {
        CtxFunc1Error::new(move |ctx, p1| (self.0)(ctx, p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> CtxFuncError {
        CtxFuncError::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone()))
    }
}
