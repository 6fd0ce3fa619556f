// Generated by pfgen from func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable returning nothing.
///
/// Combinators consume the wrapper and hand back a new one; `exec` only
/// borrows it, so a wrapper can be invoked any number of times.
pub struct Func2<P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(P0, P1)>);

impl<P0: Clone + 'static, P1: Clone + 'static> Func2<P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1) + 'static) -> Self {
        Func2(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1) {
        (self.0)(p0, p1);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func2<P0, P1> {
        Func2::new(move |p0, p1| {
            let start = Instant::now();
            (self.0)(p0, p1);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> Func2Error<P0, P1> {
        Func2Error::new(move |p0, p1| {
            (self.0)(p0, p1);
            Ok(())
        })
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static> Func2<P0, P1> {
    pub fn curry1(self, p0: P0) -> Func1<P1> {
        Func1::new(move |p1| (self.0)(p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> Func {
        Func::new(move || (self.0)(p0.clone(), p1.clone()))
    }
}
