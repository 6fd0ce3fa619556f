//! One-shot batch pipeline: load, rewrite, expand, synthesize, emit.
//!
//! Each (arity, shape, convention) triple is derived purely from its
//! template and the arity, so re-running over unchanged templates produces
//! byte-identical output. The batch is sequential and fail-fast; the only
//! state shared between combinations is the filesystem namespace, and every
//! combination writes to its own path.

use std::fs;
use std::path::{Path, PathBuf};

use pf_model::Kind;

use crate::curry::curry_methods;
use crate::error::GenError;
use crate::expand::expand_signatures;
use crate::rewrite::qualify_names;

/// Produce the source of one generated unit from its template's source.
///
/// Arity 0 is the template itself and passes through unchanged: there is
/// nothing to expand and no curry method to add.
pub fn generate_unit(template: &str, kind: Kind, arity: u32) -> Result<String, GenError> {
    if arity == 0 {
        return Ok(template.to_string());
    }

    let (rewritten, renames) = qualify_names(template, arity);
    if renames == 0 {
        return Err(GenError::PatternMismatch {
            pattern: kind.base_name(),
            unit: kind.type_name(arity),
        });
    }

    let expanded = expand_signatures(&rewritten, kind, arity)?;
    let header = format!(
        "// Generated by pfgen from {}; do not edit by hand.\n\n",
        kind.file_name(0)
    );
    Ok(format!("{header}{expanded}{}", curry_methods(kind, arity)))
}

/// Read the template for `kind` from `dir`.
pub fn load_template(dir: &Path, kind: Kind) -> Result<String, GenError> {
    let path = dir.join(kind.file_name(0));
    fs::read_to_string(&path).map_err(|source| GenError::TemplateNotFound { path, source })
}

/// Write one generated unit, overwriting any previous output for its key.
pub fn emit_unit(dir: &Path, kind: Kind, arity: u32, contents: &str) -> Result<PathBuf, GenError> {
    let path = dir.join(kind.file_name(arity));
    fs::write(&path, contents).map_err(|source| GenError::WriteFailure {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Run the whole batch: every pairing crossed with every arity in
/// 1..=`max_arity`. Returns the paths written, in order.
pub fn generate_all(dir: &Path, max_arity: u32) -> Result<Vec<PathBuf>, GenError> {
    let mut written = Vec::new();
    for kind in Kind::ALL {
        let template = load_template(dir, kind)?;
        for arity in 1..=max_arity {
            let unit = generate_unit(&template, kind, arity)?;
            written.push(emit_unit(dir, kind, arity, &unit)?);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use pf_model::{CallConvention, ReturnShape};

    use super::*;

    const MINI_TEMPLATE: &str = "\
use crate::*;

/// A tiny callable.
pub struct Func(Box<dyn Fn()>);

impl Func {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Func(Box::new(f))
    }

    pub fn exec(&self) {
        (self.0)();
    }

    pub fn twice(self) -> Func {
        Func::new(move || {
            (self.0)();
        })
    }
}
";

    #[test]
    fn arity_0_is_the_template_itself() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        let unit = generate_unit(MINI_TEMPLATE, kind, 0).unwrap();
        assert_eq!(unit, MINI_TEMPLATE);
        assert!(!unit.contains("curry"));
    }

    #[test]
    fn generation_is_deterministic() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        let once = generate_unit(MINI_TEMPLATE, kind, 2).unwrap();
        let twice = generate_unit(MINI_TEMPLATE, kind, 2).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn generated_unit_carries_header_and_curries() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        let unit = generate_unit(MINI_TEMPLATE, kind, 2).unwrap();
        assert!(unit.starts_with("// Generated by pfgen from func.rs; do not edit by hand.\n"));
        assert!(unit.contains("pub struct Func2<P0: Clone + 'static, P1: Clone + 'static>("));
        assert_eq!(unit.matches("pub fn curry").count(), 2);
    }

    #[test]
    fn template_without_family_names_is_rejected() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        let err = generate_unit("pub struct Widget;\n", kind, 1).unwrap_err();
        assert!(matches!(err, GenError::PatternMismatch { .. }));
    }
}
