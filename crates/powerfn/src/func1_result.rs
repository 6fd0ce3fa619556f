// Generated by pfgen from func_result.rs; do not edit by hand.

use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable producing a value or an error.
pub struct Func1Result<T: 'static, P0: Clone + 'static>(Box<dyn Fn(P0) -> Result<T, Error>>);

impl<T: 'static, P0: Clone + 'static> Func1Result<T, P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0) -> Result<T, Error> + 'static) -> Self {
        Func1Result(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0) -> Result<T, Error> {
        (self.0)(p0)
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func1Result<T, P0> {
        Func1Result::new(move |p0| {
            let start = Instant::now();
            let out = (self.0)(p0);
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> Func1Result<T, P0> {
        Func1Result::new(move |p0: P0| {
            let mut attempts = 1;
            loop {
                match (self.0)(p0.clone()) {
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
    pub fn must(self) -> Func1Value<T, P0> {
        Func1Value::new(move |p0| (self.0)(p0).unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> Func1Result<T, P0> {
        let msg = msg.into();
        Func1Result::new(move |p0| (self.0)(p0).map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> Func1Result<T, P0> {
        Func1Result::new(move |p0| (self.0)(p0).map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> Func1Result<T, P0> {
        Func1Result::new(move |p0| (self.0)(p0).map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> Func1Value<T, P0>
    where
        T: Clone,
    {
        Func1Value::new(move |p0| (self.0)(p0).unwrap_or_else(|_| val.clone()))
    }
}

impl<T: 'static, P0: Clone + 'static> Func1Result<T, P0> {
    pub fn curry1(self, p0: P0) -> FuncResult<T> {
        FuncResult::new(move || (self.0)(p0.clone()))
    }
}
