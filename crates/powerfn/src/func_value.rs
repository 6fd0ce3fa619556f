use std::time::{Duration, Instant};

use crate::*;

/// A callable producing a value and no error.
pub struct FuncValue<R: 'static>(Box<dyn Fn() -> R>);

impl<R: 'static> FuncValue<R> {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> R + 'static) -> Self {
        FuncValue(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self) -> R {
        (self.0)()
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> FuncValue<R> {
        FuncValue::new(move || {
            let start = Instant::now();
            let out = (self.0)();
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> FuncResult<R> {
        FuncResult::new(move || Ok((self.0)()))
    }
}
