//! Composable callable wrappers for 0..N-ary functions.
//!
//! Each wrapper pairs a calling convention (plain, or carrying a leading
//! [`Ctx`] cancellation/deadline carrier) with a return shape (nothing,
//! error-only, value-only, or value-and-error) and an arity. Combinators
//! (`timing`, `retry`, `on_err`, `with_timeout`, …) wrap the callable in a
//! new one of the same arity; `curry*` methods bind a prefix of arguments
//! and reduce the arity.
//!
//! Only the arity-0 modules are written by hand. Everything with a digit in
//! its name is produced by the `pfgen` tool from the matching arity-0
//! template; regenerate with `pfgen --arity 3` run from this directory.
//!
//! ```
//! use powerfn::Func2Error;
//!
//! let div = Func2Error::new(|num: i32, den: i32| {
//!     if den == 0 {
//!         anyhow::bail!("division by zero");
//!     }
//!     let _ = num / den;
//!     Ok(())
//! });
//! let ten_over = div.curry1(10);
//! assert!(ten_over.exec(2).is_ok());
//! assert!(ten_over.exec(0).is_err());
//! ```

mod ctx;
mod retry;

mod ctx_func;
mod ctx_func_error;
mod ctx_func_result;
mod ctx_func_value;
mod func;
mod func_error;
mod func_result;
mod func_value;

mod ctx_func1;
mod ctx_func1_error;
mod ctx_func1_result;
mod ctx_func1_value;
mod ctx_func2;
mod ctx_func2_error;
mod ctx_func2_result;
mod ctx_func2_value;
mod ctx_func3;
mod ctx_func3_error;
mod ctx_func3_result;
mod ctx_func3_value;
mod func1;
mod func1_error;
mod func1_result;
mod func1_value;
mod func2;
mod func2_error;
mod func2_result;
mod func2_value;
mod func3;
mod func3_error;
mod func3_result;
mod func3_value;

pub use ctx::{CancelHandle, Ctx, CtxError};
pub use retry::retry_immediately;

pub use ctx_func::CtxFunc;
pub use ctx_func_error::CtxFuncError;
pub use ctx_func_result::CtxFuncResult;
pub use ctx_func_value::CtxFuncValue;
pub use func::Func;
pub use func_error::FuncError;
pub use func_result::FuncResult;
pub use func_value::FuncValue;

pub use ctx_func1::CtxFunc1;
pub use ctx_func1_error::CtxFunc1Error;
pub use ctx_func1_result::CtxFunc1Result;
pub use ctx_func1_value::CtxFunc1Value;
pub use ctx_func2::CtxFunc2;
pub use ctx_func2_error::CtxFunc2Error;
pub use ctx_func2_result::CtxFunc2Result;
pub use ctx_func2_value::CtxFunc2Value;
pub use ctx_func3::CtxFunc3;
pub use ctx_func3_error::CtxFunc3Error;
pub use ctx_func3_result::CtxFunc3Result;
pub use ctx_func3_value::CtxFunc3Value;
pub use func1::Func1;
pub use func1_error::Func1Error;
pub use func1_result::Func1Result;
pub use func1_value::Func1Value;
pub use func2::Func2;
pub use func2_error::Func2Error;
pub use func2_result::Func2Result;
pub use func2_value::Func2Value;
pub use func3::Func3;
pub use func3_error::Func3Error;
pub use func3_result::Func3Result;
pub use func3_value::Func3Value;
