// Generated by pfgen from func_value.rs; do not edit by hand.

use std::time::{Duration, Instant};

use crate::*;

/// A callable producing a value and no error.
pub struct Func1Value<R: 'static, P0: Clone + 'static>(Box<dyn Fn(P0) -> R>);

impl<R: 'static, P0: Clone + 'static> Func1Value<R, P0> {
    /// Wrap a closure.
    pub fn new(f: impl Fn(P0) -> R + 'static) -> Self {
        Func1Value(Box::new(f))
    }

    /// Invoke the wrapped closure.
    pub fn exec(&self, p0: P0) -> R {
        (self.0)(p0)
    }

    /// Report the execution time of every call to `log`.
    pub fn timing(self, log: impl Fn(Duration) + 'static) -> Func1Value<R, P0> {
        Func1Value::new(move |p0| {
            let start = Instant::now();
            let out = (self.0)(p0);
            log(start.elapsed());
            out
        })
    }

    /// Lift into the result shape; the result never reports an error.
    pub fn fallible(self) -> Func1Result<R, P0> {
        Func1Result::new(move |p0| Ok((self.0)(p0)))
    }
}

impl<R: 'static, P0: Clone + 'static> Func1Value<R, P0> {
    pub fn curry1(self, p0: P0) -> FuncValue<R> {
        FuncValue::new(move || (self.0)(p0.clone()))
    }
}
