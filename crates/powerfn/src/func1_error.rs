// Generated by pfgen from func_error.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable reporting success or failure and nothing else.
pub struct Func1Error<P0: Clone + 'static>(Box<dyn Fn(P0) -> Result<(), Error>>);

impl<P0: Clone + 'static> Func1Error<P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0) -> Result<(), Error> + 'static) -> Self {
        Func1Error(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0) -> Result<(), Error> {
        (self.0)(p0)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func1Error<P0> {
        Func1Error::new(move |p0| {
            let start = Instant::now();
            let out = (self.0)(p0);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> Func1Error<P0> {
        Func1Error::new(move |p0: P0| {
            let mut attempts = 1;
            loop {
                match (self.0)(p0.clone()) {
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
    pub fn must(self) -> Func1<P0> {
        Func1::new(move |p0| {
            if let Err(err) = (self.0)(p0) {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> Func1Error<P0> {
        let msg = msg.into();
        Func1Error::new(move |p0| (self.0)(p0).map_err(|err| err.context(msg.clone())))
    }
}

impl<P0: Clone + 'static> Func1Error<P0> {
    pub fn curry1(self, p0: P0) -> FuncError {
        FuncError::new(move || (self.0)(p0.clone()))
    }
}
