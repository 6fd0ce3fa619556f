// Generated by pfgen from func_error.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable reporting success or failure and nothing else.
pub struct Func2Error<P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(P0, P1) -> Result<(), Error>>);

impl<P0: Clone + 'static, P1: Clone + 'static> Func2Error<P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1) -> Result<(), Error> + 'static) -> Self {
        Func2Error(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1) -> Result<(), Error> {
        (self.0)(p0, p1)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func2Error<P0, P1> {
        Func2Error::new(move |p0, p1| {
            let start = Instant::now();
            let out = (self.0)(p0, p1);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> Func2Error<P0, P1> {
        Func2Error::new(move |p0: P0, p1: P1| {
            let mut attempts = 1;
            loop {
                match (self.0)(p0.clone(), p1.clone()) {
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
    pub fn must(self) -> Func2<P0, P1> {
        Func2::new(move |p0, p1| {
            if let Err(err) = (self.0)(p0, p1) {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> Func2Error<P0, P1> {
        let msg = msg.into();
        Func2Error::new(move |p0, p1| (self.0)(p0, p1).map_err(|err| err.context(msg.clone())))
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static> Func2Error<P0, P1> {
    pub fn curry1(self, p0: P0) -> Func1Error<P1> {
        Func1Error::new(move |p1| (self.0)(p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> FuncError {
        FuncError::new(move || (self.0)(p0.clone(), p1.clone()))
    }
}
