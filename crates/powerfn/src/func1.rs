// Generated by pfgen from func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable returning nothing.
///
/// Combinators consume the wrapper and hand back a new one; `exec` only
/// borrows it, so a wrapper can be invoked any number of times.
pub struct Func1<P0: Clone + 'static>(Box<dyn Fn(P0)>);

impl<P0: Clone + 'static> Func1<P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0) + 'static) -> Self {
        Func1(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0) {
        (self.0)(p0);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func1<P0> {
        Func1::new(move |p0| {
            let start = Instant::now();
            (self.0)(p0);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> Func1Error<P0> {
        Func1Error::new(move |p0| {
            (self.0)(p0);
            Ok(())
        })
    }
}

impl<P0: Clone + 'static> Func1<P0> {
    pub fn curry1(self, p0: P0) -> Func {
        Func::new(move || (self.0)(p0.clone()))
    }
}
