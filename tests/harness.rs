//! Golden-file and property harness for the powerfn generator.
//!
//! The fixtures are the real templates and committed generated units in
//! `crates/powerfn/src`: for every (convention, shape) pairing and every
//! committed arity, the generator must reproduce the committed unit
//! byte-for-byte.
//!
//! Set `PF_UPDATE_FIXTURES=1` to overwrite committed units with actual
//! output.

use std::path::PathBuf;

use pf_expand::{generate_all, generate_unit, load_template, GenError};
use pf_model::{CallConvention, Kind, ReturnShape};

/// Arities committed to the library crate.
const COMMITTED_ARITY: u32 = 3;

fn wrappers_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/pf_test/, so go up two levels to the
    // workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("crates")
        .join("powerfn")
        .join("src")
}

#[test]
fn golden_units_match_generator_output() {
    let dir = wrappers_dir();
    let update_mode = std::env::var("PF_UPDATE_FIXTURES").is_ok();
    let mut failures = Vec::new();

    for kind in Kind::ALL {
        let template = match load_template(&dir, kind) {
            Ok(t) => t,
            Err(e) => {
                failures.push(format!("{kind}: failed to load template: {e}"));
                continue;
            }
        };

        for arity in 1..=COMMITTED_ARITY {
            let name = kind.file_name(arity);
            let actual = match generate_unit(&template, kind, arity) {
                Ok(u) => u,
                Err(e) => {
                    failures.push(format!("{name}: generation failed: {e}"));
                    continue;
                }
            };

            let path = dir.join(&name);
            if update_mode {
                if let Err(e) = std::fs::write(&path, &actual) {
                    failures.push(format!("{name}: failed to update: {e}"));
                }
                continue;
            }

            match std::fs::read_to_string(&path) {
                Ok(expected) => {
                    if actual != expected {
                        failures.push(format!(
                            "{name}: committed unit differs from generator output"
                        ));
                    }
                }
                Err(e) => failures.push(format!("{name}: failed to read committed unit: {e}")),
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "\n{} golden check(s) failed:\n\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn generation_is_idempotent() {
    let dir = wrappers_dir();
    for kind in Kind::ALL {
        let template = load_template(&dir, kind).unwrap();
        for arity in [0, 1, 4] {
            let once = generate_unit(&template, kind, arity).unwrap();
            let twice = generate_unit(&template, kind, arity).unwrap();
            assert_eq!(once, twice, "{}", kind.file_name(arity));
        }
    }
}

#[test]
fn arity_fidelity_at_5() {
    let dir = wrappers_dir();
    let kind = Kind::new(CallConvention::Plain, ReturnShape::Result);
    let template = load_template(&dir, kind).unwrap();
    let unit = generate_unit(&template, kind, 5).unwrap();

    assert!(unit.contains(
        "pub struct Func5Result<T: 'static, P0: Clone + 'static, P1: Clone + 'static, \
         P2: Clone + 'static, P3: Clone + 'static, P4: Clone + 'static>("
    ));
    assert!(unit.contains(
        "pub fn exec(&self, p0: P0, p1: P1, p2: P2, p3: P3, p4: P4) -> Result<T, Error> {"
    ));
    assert!(unit.contains("impl Fn(P0, P1, P2, P3, P4) -> Result<T, Error> + 'static"));
    assert!(!unit.contains("p5"));
    assert!(!unit.contains("P5"));
}

#[test]
fn arity_0_emits_no_curry_methods() {
    let dir = wrappers_dir();
    for kind in Kind::ALL {
        let template = load_template(&dir, kind).unwrap();
        let unit = generate_unit(&template, kind, 0).unwrap();
        assert_eq!(unit, template);
        assert!(!unit.contains("pub fn curry"));
    }
}

#[test]
fn curry_completeness_at_7() {
    let dir = wrappers_dir();
    let kind = Kind::new(CallConvention::Plain, ReturnShape::Error);
    let template = load_template(&dir, kind).unwrap();
    let unit = generate_unit(&template, kind, 7).unwrap();

    assert_eq!(unit.matches("pub fn curry").count(), 7);

    // Binding counts 1..=7, each exactly once, in increasing order.
    let mut last = 0;
    for bound in 1..=7u32 {
        let decl = (0..bound)
            .map(|i| format!("p{i}: P{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sig = format!("pub fn curry{bound}(self, {decl}) ->");
        let pos = unit
            .find(&sig)
            .unwrap_or_else(|| panic!("missing signature: {sig}"));
        assert!(pos > last, "curry{bound} emitted out of order");
        last = pos;
    }
}

#[test]
fn arity_1_reproduces_the_template() {
    let dir = wrappers_dir();
    for shape in [
        ReturnShape::None,
        ReturnShape::Error,
        ReturnShape::Value,
        ReturnShape::Result,
    ] {
        let kind = Kind::new(CallConvention::Plain, shape);
        let template = load_template(&dir, kind).unwrap();
        let unit = generate_unit(&template, kind, 1).unwrap();
        assert_eq!(strip_arity_1(&unit, kind), template, "{kind}");
    }
}

/// Undo the deterministic arity-1 renaming and parameterization, and drop
/// the header and the curry tail. What remains must be the template itself.
fn strip_arity_1(unit: &str, kind: Kind) -> String {
    // The header is one comment line plus a blank line.
    let body = unit.splitn(3, '\n').nth(2).unwrap();
    // The curry block is the final `impl` appended after the template body.
    let cut = body.rfind("\nimpl<").unwrap();
    let mut s = body[..cut].to_string();

    s = s.replace("match (self.0)(p0.clone())", "match (self.0)()");
    s = s.replace("(self.0)(p0)", "(self.0)()");
    s = s.replace("(&self, p0: P0)", "(&self)");
    s = s.replace("move |p0: P0|", "move ||");
    s = s.replace("move |p0|", "move ||");
    s = s.replace("Fn(P0)", "Fn()");

    match kind.shape.return_param() {
        None => {
            s = s.replace("<P0: Clone + 'static>(", "(");
            s = s.replace("impl<P0: Clone + 'static> ", "impl ");
            s = s.replace("<P0> {", " {");
        }
        Some(rp) => {
            s = s.replace(
                &format!("<{rp}: 'static, P0: Clone + 'static>"),
                &format!("<{rp}: 'static>"),
            );
            s = s.replace(&format!("<{rp}, P0>"), &format!("<{rp}>"));
        }
    }

    s = s.replace("Func1Result", "FuncResult");
    s = s.replace("Func1Value", "FuncValue");
    s = s.replace("Func1Error", "FuncError");
    s = s.replace("Func1", "Func");
    s
}

#[test]
fn plain_result_bound_2_scenario() {
    let dir = wrappers_dir();
    let kind = Kind::new(CallConvention::Plain, ReturnShape::Result);
    let template = load_template(&dir, kind).unwrap();

    let unit1 = generate_unit(&template, kind, 1).unwrap();
    assert_eq!(unit1.matches("pub fn curry").count(), 1);
    assert!(unit1.contains("pub fn curry1(self, p0: P0) -> FuncResult<T> {"));

    let unit2 = generate_unit(&template, kind, 2).unwrap();
    assert_eq!(unit2.matches("pub fn curry").count(), 2);
    assert!(unit2.contains("pub fn curry1(self, p0: P0) -> Func1Result<T, P1> {"));
    assert!(unit2.contains("pub fn curry2(self, p0: P0, p1: P1) -> FuncResult<T> {"));
}

#[test]
fn batch_writes_every_unit_and_is_idempotent() {
    let src = wrappers_dir();
    let tmp = tempfile::tempdir().unwrap();
    for kind in Kind::ALL {
        let name = kind.file_name(0);
        std::fs::copy(src.join(&name), tmp.path().join(&name)).unwrap();
    }

    let written = generate_all(tmp.path(), 2).unwrap();
    assert_eq!(written.len(), 16);

    let before: Vec<String> = written
        .iter()
        .map(|p| std::fs::read_to_string(p).unwrap())
        .collect();

    let rewritten = generate_all(tmp.path(), 2).unwrap();
    assert_eq!(written, rewritten);
    for (path, old) in rewritten.iter().zip(&before) {
        assert_eq!(&std::fs::read_to_string(path).unwrap(), old, "{path:?}");
    }
}

#[test]
fn missing_template_aborts_the_batch() {
    let tmp = tempfile::tempdir().unwrap();
    let err = generate_all(tmp.path(), 1).unwrap_err();
    assert!(matches!(err, GenError::TemplateNotFound { .. }));
}
