//! Signature expansion: the arity-0 call and declaration patterns become
//! their N-ary equivalents.
//!
//! Every pattern here is a literal whose shape the templates guarantee.
//! A pattern that matches zero times is reported as a mismatch instead of
//! being skipped, so a reworded template fails the run rather than
//! producing a unit with a missing parameter list.

use pf_model::{Kind, ReturnShape};

use crate::error::GenError;

/// The comma-joined lists spliced into a unit of a given arity.
pub(crate) struct ParamLists {
    /// `P0, P1`
    pub type_list: String,
    /// `P0: Clone + 'static, P1: Clone + 'static`
    pub bound_list: String,
    /// `p0: P0, p1: P1`
    pub decl_list: String,
    /// `p0, p1`
    pub call_list: String,
    /// `p0.clone(), p1.clone()`
    pub clone_list: String,
}

impl ParamLists {
    pub fn new(arity: u32) -> ParamLists {
        let join = |f: &dyn Fn(u32) -> String| {
            (0..arity).map(f).collect::<Vec<_>>().join(", ")
        };
        ParamLists {
            type_list: join(&|i| format!("P{i}")),
            bound_list: join(&|i| format!("P{i}: Clone + 'static")),
            decl_list: join(&|i| format!("p{i}: P{i}")),
            call_list: join(&|i| format!("p{i}")),
            clone_list: join(&|i| format!("p{i}.clone()")),
        }
    }
}

/// Replace every occurrence of `pattern`, failing if there are none.
fn replace_required(
    source: &str,
    pattern: &str,
    replacement: &str,
    unit: &str,
) -> Result<String, GenError> {
    if !source.contains(pattern) {
        return Err(GenError::PatternMismatch {
            pattern: pattern.to_string(),
            unit: unit.to_string(),
        });
    }
    Ok(source.replace(pattern, replacement))
}

/// Expand all call sites and declaration sites of an identifier-rewritten
/// template to arity `arity`.
pub fn expand_signatures(source: &str, kind: Kind, arity: u32) -> Result<String, GenError> {
    let lists = ParamLists::new(arity);
    let unit = kind.type_name(arity);
    let mut src = source.to_string();

    // Shapes with a retry loop re-invoke the wrapped closure, so that one
    // call site hands over clones instead of moving the parameters.
    let has_retry = matches!(kind.shape, ReturnShape::Error | ReturnShape::Result);

    if kind.is_carrier_prefixed() {
        if has_retry {
            src = replace_required(
                &src,
                "match (self.0)(ctx.clone())",
                &format!("match (self.0)(ctx.clone(), {})", lists.clone_list),
                &unit,
            )?;
            // The retry closure reaches its parameters only through `.clone()`,
            // so their types are never pinned by a direct call. Annotate that
            // one closure's parameters; every other closure hands a parameter
            // straight to the wrapped call and needs no hint. The marker is the
            // retry loop's counter, unique to this method.
            src = src.replace(
                "move |ctx| {\n            let mut attempts = 1;",
                &format!(
                    "move |ctx, {}| {{\n            let mut attempts = 1;",
                    lists.decl_list
                ),
            );
        }
        src = replace_required(
            &src,
            "(self.0)(ctx)",
            &format!("(self.0)(ctx, {})", lists.call_list),
            &unit,
        )?;
        src = replace_required(
            &src,
            "(&self, ctx: Ctx)",
            &format!("(&self, ctx: Ctx, {})", lists.decl_list),
            &unit,
        )?;
        src = replace_required(
            &src,
            "move |ctx|",
            &format!("move |ctx, {}|", lists.call_list),
            &unit,
        )?;
        src = replace_required(
            &src,
            "Fn(Ctx)",
            &format!("Fn(Ctx, {})", lists.type_list),
            &unit,
        )?;
    } else {
        if has_retry {
            src = replace_required(
                &src,
                "match (self.0)()",
                &format!("match (self.0)({})", lists.clone_list),
                &unit,
            )?;
            // See the carrier branch: only the retry closure reaches its
            // parameters through `.clone()`, so only it needs type hints.
            src = src.replace(
                "move || {\n            let mut attempts = 1;",
                &format!("move |{}| {{\n            let mut attempts = 1;", lists.decl_list),
            );
        }
        src = replace_required(
            &src,
            "(self.0)()",
            &format!("(self.0)({})", lists.call_list),
            &unit,
        )?;
        src = replace_required(
            &src,
            "(&self)",
            &format!("(&self, {})", lists.decl_list),
            &unit,
        )?;
        src = replace_required(
            &src,
            "move ||",
            &format!("move |{}|", lists.call_list),
            &unit,
        )?;
        src = replace_required(&src, "Fn()", &format!("Fn({})", lists.type_list), &unit)?;
    }

    match kind.shape.return_param() {
        // None/Error templates carry no generic lists of their own, so the
        // lists are introduced at the struct, impl, and return-type sites.
        None => {
            let own = kind.type_name(arity);
            src = replace_required(
                &src,
                &format!("struct {own}("),
                &format!("struct {own}<{}>(", lists.bound_list),
                &unit,
            )?;
            src = replace_required(
                &src,
                &format!("impl {own} {{"),
                &format!("impl<{}> {own}<{}> {{", lists.bound_list, lists.type_list),
                &unit,
            )?;

            // Return positions may name any shape of the same convention
            // (e.g. `must` returns the None shape), so count across the
            // whole family and require at least one in total.
            let mut arrows = 0;
            for shape in [
                ReturnShape::None,
                ReturnShape::Error,
                ReturnShape::Value,
                ReturnShape::Result,
            ] {
                let name = Kind::new(kind.convention, shape).type_name(arity);
                let pattern = format!("-> {name} {{");
                arrows += src.matches(&pattern).count();
                src = src.replace(&pattern, &format!("-> {name}<{}> {{", lists.type_list));
            }
            if arrows == 0 {
                return Err(GenError::PatternMismatch {
                    pattern: "-> <family type> {".to_string(),
                    unit,
                });
            }
        }
        // Value/Result templates already carry `<R>`/`<T>`; the value
        // parameters are appended after the return-type parameter.
        Some(rp) => {
            src = replace_required(
                &src,
                &format!("<{rp}: 'static>"),
                &format!("<{rp}: 'static, {}>", lists.bound_list),
                &unit,
            )?;
            src = replace_required(
                &src,
                &format!("<{rp}>"),
                &format!("<{rp}, {}>", lists.type_list),
                &unit,
            )?;
        }
    }

    Ok(src)
}

#[cfg(test)]
mod tests {
    use pf_model::CallConvention;

    use super::*;

    fn kind(convention: CallConvention, shape: ReturnShape) -> Kind {
        Kind::new(convention, shape)
    }

    #[test]
    fn plain_call_sites_gain_parameters() {
        let input = "\
pub struct Func2(Box<dyn Fn()>);

impl Func2 {
    pub fn exec(&self) {
        (self.0)();
    }

    pub fn timing(self) -> Func2 {
        Func2::new(move || {
            (self.0)();
        })
    }
}
";
        let output =
            expand_signatures(input, kind(CallConvention::Plain, ReturnShape::None), 2).unwrap();
        assert!(output.contains("pub struct Func2<P0: Clone + 'static, P1: Clone + 'static>("));
        assert!(output.contains("impl<P0: Clone + 'static, P1: Clone + 'static> Func2<P0, P1> {"));
        assert!(output.contains("pub fn exec(&self, p0: P0, p1: P1) {"));
        assert!(output.contains("-> Func2<P0, P1> {"));
        assert!(output.contains("(self.0)(p0, p1);"));
        assert!(output.contains("move |p0, p1|"));
    }

    #[test]
    fn carrier_stays_ahead_of_parameters() {
        let input = "\
pub struct CtxFunc1(Box<dyn Fn(Ctx)>);

impl CtxFunc1 {
    pub fn exec(&self, ctx: Ctx) {
        (self.0)(ctx);
    }

    pub fn timing(self) -> CtxFunc1 {
        CtxFunc1::new(move |ctx| {
            (self.0)(ctx);
        })
    }
}
";
        let output = expand_signatures(
            input,
            kind(CallConvention::CarrierPrefixed, ReturnShape::None),
            1,
        )
        .unwrap();
        assert!(output.contains("Box<dyn Fn(Ctx, P0)>"));
        assert!(output.contains("pub fn exec(&self, ctx: Ctx, p0: P0) {"));
        assert!(output.contains("(self.0)(ctx, p0);"));
        assert!(output.contains("move |ctx, p0|"));
    }

    #[test]
    fn value_parameters_go_after_the_return_parameter() {
        let input = "\
pub struct Func2Value<R: 'static>(Box<dyn Fn() -> R>);

impl<R: 'static> Func2Value<R> {
    pub fn exec(&self) -> R {
        (self.0)()
    }

    pub fn timing(self) -> Func2Value<R> {
        Func2Value::new(move || (self.0)())
    }
}
";
        let output =
            expand_signatures(input, kind(CallConvention::Plain, ReturnShape::Value), 2).unwrap();
        assert!(output.contains(
            "pub struct Func2Value<R: 'static, P0: Clone + 'static, P1: Clone + 'static>("
        ));
        assert!(output.contains("-> Func2Value<R, P0, P1> {"));
    }

    #[test]
    fn retry_call_site_clones_its_arguments() {
        let input = "\
impl Func1Error {
    pub fn exec(&self) -> Result<(), Error> {
        (self.0)()
    }

    pub fn retry(self) -> Func1Error {
        Func1Error::new(move || loop {
            match (self.0)() {
                Ok(()) => return Ok(()),
                Err(_) => continue,
            }
        })
    }
}

pub struct Func1Error(Box<dyn Fn() -> Result<(), Error>>);
";
        let output =
            expand_signatures(input, kind(CallConvention::Plain, ReturnShape::Error), 1).unwrap();
        assert!(output.contains("match (self.0)(p0.clone()) {"));
        assert!(output.contains("(self.0)(p0)\n"));
    }

    #[test]
    fn missing_pattern_is_a_mismatch() {
        let input = "pub struct Func3(Box<dyn Fn()>);\n";
        let err = expand_signatures(input, kind(CallConvention::Plain, ReturnShape::None), 3)
            .unwrap_err();
        match err {
            GenError::PatternMismatch { pattern, unit } => {
                assert_eq!(pattern, "(self.0)()");
                assert_eq!(unit, "Func3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
