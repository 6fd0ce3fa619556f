//! Callable-family vocabulary for the powerfn generator.
//!
//! Models the wrapper family as data: the return shape, the calling
//! convention, and the closed set of the eight valid (convention, shape)
//! pairings. Type and file naming lives here so the rewriter, expander,
//! synthesizer, and emitter all agree on it.

use serde::{Deserialize, Serialize};

/// The value/error-producing pattern of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnShape {
    /// Returns nothing.
    None,
    /// Returns `Result<(), Error>`.
    Error,
    /// Returns a bare value `R`.
    Value,
    /// Returns `Result<T, Error>`.
    Result,
}

impl ReturnShape {
    /// Suffix appended to type names (`Func2Error`); empty for `None`.
    pub fn type_suffix(self) -> &'static str {
        match self {
            ReturnShape::None => "",
            ReturnShape::Error => "Error",
            ReturnShape::Value => "Value",
            ReturnShape::Result => "Result",
        }
    }

    /// Suffix appended to file names (`func2_error.rs`); empty for `None`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ReturnShape::None => "",
            ReturnShape::Error => "_error",
            ReturnShape::Value => "_value",
            ReturnShape::Result => "_result",
        }
    }

    /// The return-type parameter the shape's generic lists start with, if any.
    ///
    /// `Value` wrappers are generic over `R`, `Result` wrappers over `T`;
    /// the other shapes carry no return-type parameter.
    pub fn return_param(self) -> Option<char> {
        match self {
            ReturnShape::Value => Some('R'),
            ReturnShape::Result => Some('T'),
            ReturnShape::None | ReturnShape::Error => None,
        }
    }
}

/// Whether a callable takes a leading `Ctx` carrier argument.
///
/// The carrier is never counted towards a wrapper's arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallConvention {
    Plain,
    CarrierPrefixed,
}

/// One of the eight valid (convention, shape) pairings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kind {
    pub convention: CallConvention,
    pub shape: ReturnShape,
}

impl Kind {
    /// Every valid pairing, in generation order.
    pub const ALL: [Kind; 8] = [
        Kind::new(CallConvention::Plain, ReturnShape::None),
        Kind::new(CallConvention::Plain, ReturnShape::Error),
        Kind::new(CallConvention::Plain, ReturnShape::Value),
        Kind::new(CallConvention::Plain, ReturnShape::Result),
        Kind::new(CallConvention::CarrierPrefixed, ReturnShape::None),
        Kind::new(CallConvention::CarrierPrefixed, ReturnShape::Error),
        Kind::new(CallConvention::CarrierPrefixed, ReturnShape::Value),
        Kind::new(CallConvention::CarrierPrefixed, ReturnShape::Result),
    ];

    pub const fn new(convention: CallConvention, shape: ReturnShape) -> Kind {
        Kind { convention, shape }
    }

    pub fn is_carrier_prefixed(self) -> bool {
        self.convention == CallConvention::CarrierPrefixed
    }

    /// Type-name stem ahead of the arity digits.
    pub fn stem(self) -> &'static str {
        match self.convention {
            CallConvention::Plain => "Func",
            CallConvention::CarrierPrefixed => "CtxFunc",
        }
    }

    /// The hand-authored arity-0 type name, e.g. `CtxFuncResult`.
    pub fn base_name(self) -> String {
        format!("{}{}", self.stem(), self.shape.type_suffix())
    }

    /// Arity-qualified type name: the base name at arity 0, `Func2Error`
    /// at arity 2, and so on. The arity goes after the stem, not at the end.
    pub fn type_name(self, arity: u32) -> String {
        if arity == 0 {
            self.base_name()
        } else {
            format!("{}{}{}", self.stem(), arity, self.shape.type_suffix())
        }
    }

    /// File name of the unit at `arity`. Arity 0 names the template itself,
    /// so generated units can never collide with a template.
    pub fn file_name(self, arity: u32) -> String {
        let prefix = match self.convention {
            CallConvention::Plain => "func",
            CallConvention::CarrierPrefixed => "ctx_func",
        };
        if arity == 0 {
            format!("{}{}.rs", prefix, self.shape.file_suffix())
        } else {
            format!("{}{}{}.rs", prefix, arity, self.shape.file_suffix())
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_by_arity() {
        let kind = Kind::new(CallConvention::Plain, ReturnShape::Error);
        assert_eq!(kind.type_name(0), "FuncError");
        assert_eq!(kind.type_name(1), "Func1Error");
        assert_eq!(kind.type_name(10), "Func10Error");

        let kind = Kind::new(CallConvention::CarrierPrefixed, ReturnShape::None);
        assert_eq!(kind.type_name(0), "CtxFunc");
        assert_eq!(kind.type_name(3), "CtxFunc3");
    }

    #[test]
    fn file_names_by_arity() {
        let kind = Kind::new(CallConvention::CarrierPrefixed, ReturnShape::Result);
        assert_eq!(kind.file_name(0), "ctx_func_result.rs");
        assert_eq!(kind.file_name(2), "ctx_func2_result.rs");

        let kind = Kind::new(CallConvention::Plain, ReturnShape::None);
        assert_eq!(kind.file_name(0), "func.rs");
        assert_eq!(kind.file_name(7), "func7.rs");
    }

    #[test]
    fn all_pairings_are_distinct() {
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in &Kind::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.base_name(), b.base_name());
                assert_ne!(a.file_name(1), b.file_name(1));
            }
        }
    }

    #[test]
    fn return_params() {
        assert_eq!(ReturnShape::Value.return_param(), Some('R'));
        assert_eq!(ReturnShape::Result.return_param(), Some('T'));
        assert_eq!(ReturnShape::None.return_param(), None);
        assert_eq!(ReturnShape::Error.return_param(), None);
    }
}
