// Generated by pfgen from func.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable returning nothing.
///
/// Combinators consume the wrapper and hand back a new one; `exec` only
/// borrows it, so a wrapper can be invoked any number of times.
pub struct Func3<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(P0, P1, P2)>);

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3<P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1, P2) + 'static) -> Self {
        Func3(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1, p2: P2) {
        (self.0)(p0, p1, p2);
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func3<P0, P1, P2> {
        Func3::new(move |p0, p1, p2| {
            let start = Instant::now();
            (self.0)(p0, p1, p2);
            log(start.elapsed());
        })
    }

    /// Lift into the fallible shape; the result never reports an error.
    pub fn fallible(self) -> Func3Error<P0, P1, P2> {
        Func3Error::new(move |p0, p1, p2| {
            (self.0)(p0, p1, p2);
            Ok(())
        })
    }
}

impl<P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3<P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> Func2<P1, P2> {
        Func2::new(move |p1, p2| (self.0)(p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> Func1<P2> {
        Func1::new(move |p2| (self.0)(p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> Func {
        Func::new(move || (self.0)(p0.clone(), p1.clone(), p2.clone()))
    }
}
