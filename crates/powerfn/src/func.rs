use std::time::{Duration, Instant};

use crate::*;

/// A callable returning nothing.
///
/// Combinators consume the wrapper and hand back a new one; `exec` only
/// borrows it, so a wrapper can be invoked any number of times.
pub struct Func(Box<dyn Fn()>);

impl Func {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Func(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self) {
        (self.0)();
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func {
        Func::new(move || {
            let start = Instant::now();
            (self.0)();
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> FuncError {
        FuncError::new(move || {
            (self.0)();
            Ok(())
        })
    }
}
