// Generated by pfgen from func_result.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable producing a value or an error.
pub struct Func3Result<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(P0, P1, P2) -> Result<T, Error>>);

impl<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Result<T, P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1, P2) -> Result<T, Error> + 'static) -> Self {
        Func3Result(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1, p2: P2) -> Result<T, Error> {
        (self.0)(p0, p1, p2)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func3Result<T, P0, P1, P2> {
        Func3Result::new(move |p0, p1, p2| {
            let start = Instant::now();
            let out = (self.0)(p0, p1, p2);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> Func3Result<T, P0, P1, P2> {
        Func3Result::new(move |p0: P0, p1: P1, p2: P2| {
            let mut attempts = 1;
            loop {
                match (self.0)(p0.clone(), p1.clone(), p2.clone()) {
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
    pub fn must(self) -> Func3Value<T, P0, P1, P2> {
        Func3Value::new(move |p0, p1, p2| (self.0)(p0, p1, p2).unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> Func3Result<T, P0, P1, P2> {
        let msg = msg.into();
        Func3Result::new(move |p0, p1, p2| (self.0)(p0, p1, p2).map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> Func3Result<T, P0, P1, P2> {
        Func3Result::new(move |p0, p1, p2| (self.0)(p0, p1, p2).map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> Func3Result<T, P0, P1, P2> {
        Func3Result::new(move |p0, p1, p2| (self.0)(p0, p1, p2).map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> Func3Value<T, P0, P1, P2>
    where
        T: Clone,
    {
        Func3Value::new(move |p0, p1, p2| (self.0)(p0, p1, p2).unwrap_or_else(|_| val.clone()))
    }
}

impl<T: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Result<T, P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> Func2Result<T, P1, P2> {
        Func2Result::new(move |p1, p2| (self.0)(p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> Func1Result<T, P2> {
        Func1Result::new(move |p2| (self.0)(p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> FuncResult<T> {
        FuncResult::new(move || (self.0)(p0.clone(), p1.clone(), p2.clone()))
    }
}
