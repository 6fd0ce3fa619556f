use std::time::{Duration, Instant};

use anyhow::Error;

use crate::*;

/// A callable reporting success or failure and nothing else.
pub struct FuncError(Box<dyn Fn() -> Result<(), Error>>);

impl FuncError {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> Result<(), Error> + 'static) -> Self {
        FuncError(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self) -> Result<(), Error> {
        (self.0)()
    }

    /// Report the execution time of every call to `log`, success or not.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> FuncError {
        FuncError::new(move || {
            let start = Instant::now();
            let out = (self.0)();
            log(start.elapsed());
            out
        })
    }

    /// Re-invoke until success or until `try_again(attempts, err)` says stop.
    pub fn retry(self, try_again: impl Fn(u32, &Error) -> bool + 'static) -> FuncError {
        FuncError::new(move || {
            let mut attempts = 1;
            loop {
                match (self.0)() {
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
    pub fn must(self) -> Func {
        Func::new(move || {
            if let Err(err) = (self.0)() {
                panic!("{err:#}");
            }
        })
    }

    /// Prefix any error with `msg`.
    pub fn on_err(self, msg: impl Into<String>) -> FuncError {
        let msg = msg.into();
        FuncError::new(move || (self.0)().map_err(|err| err.context(msg.clone())))
    }
}
