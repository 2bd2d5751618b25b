//! Structured payload for type mismatches.

use std::fmt;

use lam_ir::{ApplyError, Expr, Type};

/// What a position in the program required.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expected {
    /// Exactly this type.
    Type(Type),
    /// Any function whose domain is `argument`.
    Function { argument: Type },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Type(ty) => write!(f, "{ty}"),
            Expected::Function { argument } => write!(f, "a function taking {argument}"),
        }
    }
}

/// A genuine type mismatch: the offending expression, what was expected of
/// it, and what was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeMismatch {
    pub expr: Box<Expr>,
    pub expected: Expected,
    pub found: Type,
}

impl TypeMismatch {
    pub fn new(expr: Expr, expected: Expected, found: Type) -> Self {
        TypeMismatch {
            expr: Box::new(expr),
            expected,
            found,
        }
    }

    /// Describe an application `expr` whose arguments were rejected by the
    /// type algebra.
    ///
    /// For a rejected argument the expectation is the arrow's domain. For an
    /// argument applied to a non-function, the expectation is a function
    /// taking that argument's type and the type found is the non-function.
    pub fn from_apply(expr: Expr, error: ApplyError, args: &[Type]) -> Self {
        match error {
            ApplyError::ArgumentMismatch {
                expected, found, ..
            } => TypeMismatch::new(expr, Expected::Type(expected), found),
            ApplyError::NotAFunction { position, found } => {
                let argument = args.get(position).cloned().unwrap_or(Type::Unit);
                TypeMismatch::new(expr, Expected::Function { argument }, found)
            }
        }
    }
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {}, found {} in `{}`",
            self.expected, self.found, self.expr
        )
    }
}
