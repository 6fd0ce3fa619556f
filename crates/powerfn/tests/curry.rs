//! Semantic equivalence of curry reductions with direct invocation.

use anyhow::bail;
use powerfn::{Ctx, CtxError, CtxFunc2Error, Func2Result, Func3Error, Func3Value};

/// Fails iff the three inputs sum to a negative number.
fn sum_guard() -> Func3Error<i32, i32, i32> {
    Func3Error::new(|a: i32, b: i32, c: i32| {
        if a + b + c < 0 {
            bail!("sum {} is negative", a + b + c);
        }
        Ok(())
    })
}

#[test]
fn curry2_matches_direct_invocation() {
    for (a, b, c) in [(1, 2, 3), (-1, -2, 3), (-5, 1, 1), (0, 0, 0), (10, -20, 5)] {
        let direct = sum_guard().exec(a, b, c);
        let curried = sum_guard().curry2(a, b).exec(c);
        assert_eq!(direct.is_err(), curried.is_err(), "inputs ({a}, {b}, {c})");
        if let (Err(d), Err(k)) = (direct, curried) {
            assert_eq!(d.to_string(), k.to_string());
        }
    }
}

#[test]
fn full_binding_matches_direct_invocation() {
    let direct = sum_guard().exec(-4, 2, 1);
    let curried = sum_guard().curry3(-4, 2, 1).exec();
    assert_eq!(direct.unwrap_err().to_string(), curried.unwrap_err().to_string());
}

#[test]
fn chained_curries_reach_arity_0() {
    let curried = Func3Value::new(|a: i32, b: i32, c: i32| a * 100 + b * 10 + c)
        .curry1(1)
        .curry1(2)
        .curry1(3);
    assert_eq!(curried.exec(), 123);
}

#[test]
fn bound_arguments_keep_their_position() {
    let concat = Func2Result::new(|head: String, tail: String| Ok(format!("{head}{tail}")));
    let greet = concat.curry1("hello ".to_string());
    assert_eq!(greet.exec("world".to_string()).unwrap(), "hello world");
}

#[test]
fn curried_wrappers_are_reusable() {
    let add = Func2Result::new(|a: i32, b: i32| Ok(a + b));
    let plus_ten = add.curry1(10);
    assert_eq!(plus_ten.exec(1).unwrap(), 11);
    assert_eq!(plus_ten.exec(2).unwrap(), 12);
}

#[test]
fn curried_carrier_still_observes_cancellation() {
    let f = CtxFunc2Error::new(|ctx: Ctx, a: i32, b: i32| {
        ctx.check()?;
        if a + b < 0 {
            bail!("negative");
        }
        Ok(())
    });
    let bound = f.curry2(1, 2);

    let (ctx, handle) = Ctx::background().cancellable();
    assert!(bound.exec(ctx.clone()).is_ok());

    handle.cancel();
    let err = bound.exec(ctx).unwrap_err();
    assert_eq!(err.downcast_ref::<CtxError>(), Some(&CtxError::Cancelled));
}
