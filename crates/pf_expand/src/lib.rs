//! Source generator for the powerfn wrapper family.
//!
//! Expands each hand-authored arity-0 template into its arity-N variants:
//!
//! 1. Rewrite base type names to their arity-qualified form.
//! 2. Expand the zero-parameter call and declaration patterns to N-ary lists.
//! 3. Append one curry method per split point.
//! 4. Emit one file per (arity, shape, convention) triple.
//!
//! The transformation is purely textual and deterministic: a template plus
//! an arity fully determines the generated unit. A substitution pattern that
//! fails to match aborts the run instead of silently producing a
//! structurally wrong unit.

mod curry;
mod error;
mod expand;
mod pipeline;
mod rewrite;

pub use error::GenError;
pub use pipeline::{emit_unit, generate_all, generate_unit, load_template};
