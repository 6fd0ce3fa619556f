// Generated by pfgen from func_error.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable reporting success or failure and nothing else.
pub struct Func3Error<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(P0, P1, P2) -> Result<(), Error>>);

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Error<P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1, P2) -> Result<(), Error> + 'static) -> Self {
        Func3Error(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1, p2: P2) -> Result<(), Error> {
        (self.0)(p0, p1, p2)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func3Error<P0, P1, P2> {
        Func3Error::new(move |p0, p1, p2| {
            let start = Instant::now();
            let out = (self.0)(p0, p1, p2);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> Func3Error<P0, P1, P2> {
        Func3Error::new(move |p0: P0, p1: P1, p2: P2| {
            let mut attempts = 1;
            loop {
                match (self.0)(p0.clone(), p1.clone(), p2.clone()) {
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
    pub fn must(self) -> Func3<P0, P1, P2> {
        Func3::new(move |p0, p1, p2| {
            if let Err(err) = (self.0)(p0, p1, p2) {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> Func3Error<P0, P1, P2> {
        let msg = msg.into();
        Func3Error::new(move |p0, p1, p2| (self.0)(p0, p1, p2).map_err(|err| err.context(msg.clone())))
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Error<P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> Func2Error<P1, P2> {
        Func2Error::new(move |p1, p2| (self.0)(p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> Func1Error<P2> {
        Func1Error::new(move |p2| (self.0)(p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> FuncError {
        FuncError::new(move || (self.0)(p0.clone(), p1.clone(), p2.clone()))
    }
}
