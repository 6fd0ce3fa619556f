use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable producing a value or an error.
pub struct FuncResult<T: 'static>(Box<dyn Fn() -> Result<T, Error>>);

impl<T: 'static> FuncResult<T> {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> Result<T, Error> + 'static) -> Self {
        FuncResult(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self) -> Result<T, Error> {
        (self.0)()
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> FuncResult<T> {
        FuncResult::new(move || {
            let start = Instant::now();
            let out = (self.0)();
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> FuncResult<T> {
        FuncResult::new(move || {
            let mut attempts = 1;
            loop {
                match (self.0)() {
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
    pub fn must(self) -> FuncValue<T> {
        FuncValue::new(move || (self.0)().unwrap_or_else(|err| panic!("{err:#}")))
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> FuncResult<T> {
        let msg = msg.into();
        FuncResult::new(move || (self.0)().map_err(|err| err.context(msg.clone())))
    }

    /// Apply `f` to the value on success.
    pub fn map(self, f: impl Fn(T) -> T + 'static) -> FuncResult<T> {
        FuncResult::new(move || (self.0)().map(|v| f(v)))
    }

    /// Apply `f` to the error on failure.
    pub fn map_err(self, f: impl Fn(Error) -> Error + 'static) -> FuncResult<T> {
        FuncResult::new(move || (self.0)().map_err(|err| f(err)))
    }

    /// Replace any error with `val`, leaving a bare-value callable.
    pub fn fallback(self, val: T) -> FuncValue<T>
    where
        T: Clone,
    {
        FuncValue::new(move || (self.0)().unwrap_or_else(|_| val.clone()))
    }
}
