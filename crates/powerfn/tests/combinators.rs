//! Behavior of the wrapper combinators at arity 0, where the templates
//! themselves are exercised.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::bail;
use powerfn::{
    retry_immediately, Ctx, CtxError, CtxFuncError, CtxFuncValue, Func, FuncError, FuncResult,
    FuncValue,
};

#[test]
fn retry_until_success_counts_attempts() {
    let calls = Rc::new(Cell::new(0u32));
    let inner = calls.clone();
    let f = FuncError::new(move || {
        inner.set(inner.get() + 1);
        if inner.get() < 3 {
            bail!("not yet");
        }
        Ok(())
    })
    .retry(retry_immediately(5));

    assert!(f.exec().is_ok());
    assert_eq!(calls.get(), 3);
}

#[test]
fn retry_gives_up_after_max_attempts() {
    let calls = Rc::new(Cell::new(0u32));
    let inner = calls.clone();
    let f = FuncError::new(move || {
        inner.set(inner.get() + 1);
        bail!("always failing")
    })
    .retry(retry_immediately(3));

    assert!(f.exec().is_err());
    assert_eq!(calls.get(), 3);
}

#[test]
fn carrier_errors_are_not_retried() {
    let calls = Rc::new(Cell::new(0u32));
    let inner = calls.clone();
    let f = CtxFuncError::new(move |ctx: Ctx| {
        inner.set(inner.get() + 1);
        ctx.check()?;
        Ok(())
    })
    .retry(retry_immediately(5));

    let expired = Ctx::background().with_timeout(Duration::from_secs(0));
    assert!(f.exec(expired).is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
#[should_panic(expected = "boom")]
fn must_panics_on_error() {
    FuncError::new(|| bail!("boom")).must().exec();
}

#[test]
fn on_err_prefixes_the_message() {
    let f = FuncError::new(|| bail!("root cause")).on_err("loading config");
    let err = f.exec().unwrap_err();
    assert_eq!(err.to_string(), "loading config");
    assert_eq!(format!("{err:#}"), "loading config: root cause");
}

#[test]
fn timing_reports_a_duration() {
    let seen = Rc::new(Cell::new(None));
    let sink = seen.clone();
    let f = Func::new(|| {}).timing(move |d| sink.set(Some(d)));
    f.exec();
    assert!(seen.get().is_some());
}

#[test]
fn map_transforms_the_value() {
    let f = FuncResult::new(|| Ok(20)).map(|v| v + 1);
    assert_eq!(f.exec().unwrap(), 21);
}

#[test]
fn map_err_transforms_the_error() {
    let f = FuncResult::new(|| -> anyhow::Result<i32> { bail!("inner") })
        .map_err(|err| err.context("outer"));
    let err = f.exec().unwrap_err();
    assert_eq!(err.to_string(), "outer");
}

#[test]
fn fallback_replaces_errors_only() {
    let ok = FuncResult::new(|| Ok(7)).fallback(0);
    assert_eq!(ok.exec(), 7);

    let failed = FuncResult::new(|| bail!("nope")).fallback(42);
    assert_eq!(failed.exec(), 42);
}

#[test]
fn fallible_never_fails() {
    assert!(Func::new(|| {}).fallible().exec().is_ok());
    assert_eq!(FuncValue::new(|| 5).fallible().exec().unwrap(), 5);
}

#[test]
fn with_timeout_expires_the_carrier() {
    let f = CtxFuncError::new(|ctx: Ctx| {
        ctx.check()?;
        Ok(())
    });
    let strict = f.with_timeout(Duration::from_secs(0));
    let err = strict.exec(Ctx::background()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CtxError>(),
        Some(&CtxError::DeadlineExceeded)
    );
}

#[test]
fn with_deadline_keeps_the_carrier_live_until_then() {
    let f = CtxFuncValue::new(|ctx: Ctx| ctx.check().is_ok());
    let future = f.with_deadline(Instant::now() + Duration::from_secs(60));
    assert!(future.exec(Ctx::background()));
}
