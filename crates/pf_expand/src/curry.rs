//! Curry synthesis: the reduction methods appended to every generated unit.
//!
//! A unit of arity N gains N methods, `curry1` through `curryN`, named by
//! how many leading parameters they bind. `curry{b}` returns the wrapper of
//! arity N−b over the remaining parameters; `curryN` returns the arity-0
//! wrapper. Bound arguments are captured by value and cloned into each
//! delegated call; the carrier, when present, is re-inserted at the front.

use pf_model::Kind;

use crate::expand::ParamLists;

/// Render the curry `impl` block for one generated unit.
pub fn curry_methods(kind: Kind, arity: u32) -> String {
    let lists = ParamLists::new(arity);
    let rp = kind.shape.return_param();
    let own = kind.type_name(arity);

    let head_bounds = match rp {
        Some(rp) => format!("{rp}: 'static, {}", lists.bound_list),
        None => lists.bound_list.clone(),
    };
    let head_types = match rp {
        Some(rp) => format!("{rp}, {}", lists.type_list),
        None => lists.type_list.clone(),
    };

    let mut methods = Vec::new();
    for bound in 1..=arity {
        let remaining = arity - bound;

        let bound_decl = (0..bound)
            .map(|i| format!("p{i}: P{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let target_base = kind.type_name(remaining);
        let target = if remaining == 0 {
            match rp {
                Some(rp) => format!("{target_base}<{rp}>"),
                None => target_base.clone(),
            }
        } else {
            let rem_types = (bound..arity)
                .map(|i| format!("P{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            match rp {
                Some(rp) => format!("{target_base}<{rp}, {rem_types}>"),
                None => format!("{target_base}<{rem_types}>"),
            }
        };

        let rem_names = (bound..arity)
            .map(|i| format!("p{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let closure = if kind.is_carrier_prefixed() {
            if rem_names.is_empty() {
                "ctx".to_string()
            } else {
                format!("ctx, {rem_names}")
            }
        } else {
            rem_names.clone()
        };

        let mut args = Vec::new();
        if kind.is_carrier_prefixed() {
            args.push("ctx".to_string());
        }
        args.extend((0..bound).map(|i| format!("p{i}.clone()")));
        args.extend((bound..arity).map(|i| format!("p{i}")));
        let args = args.join(", ");

        methods.push(format!(
            "    pub fn curry{bound}(self, {bound_decl}) -> {target} {{\n        \
             {target_base}::new(move |{closure}| (self.0)({args}))\n    }}\n"
        ));
    }

    format!(
        "\nimpl<{head_bounds}> {own}<{head_types}> {{\n{}}}\n",
        methods.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use pf_model::{CallConvention, ReturnShape};

    use super::*;

    #[test]
    fn one_method_per_split_point_in_order() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::Error);
        let block = curry_methods(kind, 3);
        assert_eq!(block.matches("pub fn curry").count(), 3);
        let c1 = block.find("curry1").unwrap();
        let c2 = block.find("curry2").unwrap();
        let c3 = block.find("curry3").unwrap();
        assert!(c1 < c2 && c2 < c3);
    }

    #[test]
    fn full_binding_reaches_the_arity_0_wrapper() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::Error);
        let block = curry_methods(kind, 2);
        assert!(block.contains("pub fn curry1(self, p0: P0) -> Func1Error<P1> {"));
        assert!(block.contains("pub fn curry2(self, p0: P0, p1: P1) -> FuncError {"));
        assert!(block.contains("FuncError::new(move || (self.0)(p0.clone(), p1.clone()))"));
    }

    #[test]
    fn remaining_parameters_keep_their_names() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        let block = curry_methods(kind, 3);
        assert!(block.contains("Func2::new(move |p1, p2| (self.0)(p0.clone(), p1, p2))"));
    }

    #[test]
    fn carrier_is_reinserted_at_the_front() {
        let kind = Kind::new(CallConvention::CarrierPrefixed, ReturnShape::Result);
        let block = curry_methods(kind, 2);
        assert!(block.contains("pub fn curry1(self, p0: P0) -> CtxFunc1Result<T, P1> {"));
        assert!(block.contains("CtxFunc1Result::new(move |ctx, p1| (self.0)(ctx, p0.clone(), p1))"));
        assert!(block.contains("pub fn curry2(self, p0: P0, p1: P1) -> CtxFuncResult<T> {"));
        assert!(block.contains("CtxFuncResult::new(move |ctx| (self.0)(ctx, p0.clone(), p1.clone()))"));
    }

    #[test]
    fn return_parameter_leads_every_generic_list() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::Value);
        let block = curry_methods(kind, 2);
        assert!(block.contains(
            "impl<R: 'static, P0: Clone + 'static, P1: Clone + 'static> Func2Value<R, P0, P1> {"
        ));
        assert!(block.contains("-> Func1Value<R, P1> {"));
        assert!(block.contains("-> FuncValue<R> {"));
    }
}
