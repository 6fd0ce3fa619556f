// Generated by pfgen from func_value.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable producing a value and no error.
pub struct Func3Value<R: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static>(Box<dyn Fn(P0, P1, P2) -> R>);

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Value<R, P0, P1, P2> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1, P2) -> R + 'static) -> Self {
        Func3Value(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1, p2: P2) -> R {
        (self.0)(p0, p1, p2)
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func3Value<R, P0, P1, P2> {
        Func3Value::new(move |p0, p1, p2| {
            let start = Instant::now();
            let out = (self.0)(p0, p1, p2);
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> Func3Result<R, P0, P1, P2> {
        Func3Result::new(move |p0, p1, p2| Ok((self.0)(p0, p1, p2)))
    }
}

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static, P2: Clone + 'static> Func3Value<R, P0, P1, P2> {
    pub fn curry1(self, p0: P0) -> Func2Value<R, P1, P2> {
        Func2Value::new(move |p1, p2| (self.0)(p0.clone(), p1, p2))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> Func1Value<R, P2> {
        Func1Value::new(move |p2| (self.0)(p0.clone(), p1.clone(), p2))
    }

    pub fn curry3(self, p0: P0, p1: P1, p2: P2) -> FuncValue<R> {
        FuncValue::new(move || (self.0)(p0.clone(), p1.clone(), p2.clone()))
    }
}
