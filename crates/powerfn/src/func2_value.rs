// Generated by pfgen from func_value.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable producing a value and no error.
pub struct Func2Value<R: 'static, P0: Clone + 'static, P1: Clone + 'static>(Box<dyn Fn(P0, P1) -> R>);

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static> Func2Value<R, P0, P1> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0, P1) -> R + 'static) -> Self {
        Func2Value(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0, p1: P1) -> R {
        (self.0)(p0, p1)
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func2Value<R, P0, P1> {
        Func2Value::new(move |p0, p1| {
            let start = Instant::now();
            let out = (self.0)(p0, p1);
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> Func2Result<R, P0, P1> {
        Func2Result::new(move |p0, p1| Ok((self.0)(p0, p1)))
    }
}

impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static> Func2Value<R, P0, P1> {
    pub fn curry1(self, p0: P0) -> Func1Value<R, P1> {
        Func1Value::new(move |p1| (self.0)(p0.clone(), p1))
    }

    pub fn curry2(self, p0: P0, p1: P1) -> FuncValue<R> {
        FuncValue::new(move || (self.0)(p0.clone(), p1.clone()))
    }
}
