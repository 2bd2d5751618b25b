//! The pass error taxonomy.

use lam_ir::Ref;
use thiserror::Error;

use crate::{ErrorCode, TypeMismatch};

/// Result type returned by every pass step.
pub type PassResult<T> = Result<T, PassError>;

/// A failure reported by the parser, wrapped into [`PassError::Parse`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message} at offset {offset}")]
pub struct ParseError {
    /// Byte offset into the source.
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        ParseError {
            offset,
            message: message.into(),
        }
    }
}

/// Why a pass aborted.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PassError {
    /// Generic pass failure.
    #[error("{0}")]
    Gen(String),
    /// Broken internal invariant. Report as a compiler defect.
    #[error("internal compiler error: {0}")]
    Panic(String),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("syntax error: {0}")]
    Syntax(String),
    /// A use site that resolves to no binding. Keeps the offending reference.
    #[error("undefined reference `{}`", .0.name)]
    Undefined(Ref),
    #[error("type mismatch: {0}")]
    Type(TypeMismatch),
}

impl PassError {
    pub fn generic(message: impl Into<String>) -> Self {
        PassError::Gen(message.into())
    }

    pub fn panic(message: impl Into<String>) -> Self {
        PassError::Panic(message.into())
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        PassError::Syntax(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PassError::Parse(_) => ErrorCode::E1001,
            PassError::Syntax(_) => ErrorCode::E1002,
            PassError::Type(_) => ErrorCode::E2001,
            PassError::Undefined(_) => ErrorCode::E2003,
            PassError::Panic(_) => ErrorCode::E9001,
            PassError::Gen(_) => ErrorCode::E9002,
        }
    }

    /// Check if this error signals a compiler defect rather than a problem
    /// with the input program.
    pub fn is_defect(&self) -> bool {
        matches!(self, PassError::Panic(_))
    }
}

impl From<TypeMismatch> for PassError {
    fn from(mismatch: TypeMismatch) -> Self {
        PassError::Type(mismatch)
    }
}
