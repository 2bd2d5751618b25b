//! Error codes for pass diagnostics.
//!
//! The first digit names the phase:
//! - E1xxx: parser and surface syntax
//! - E2xxx: types and name resolution
//! - E9xxx: internal compiler errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Parse failure reported by the parser
    E1001,
    /// Malformed surface syntax
    E1002,
    /// Type mismatch
    E2001,
    /// Undefined reference
    E2003,
    /// Internal invariant violation
    E9001,
    /// Generic pass failure
    E9002,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Check if this code belongs to the internal (E9xxx) range.
    pub fn is_internal(self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
