//! Errors raised by Lam compiler passes.
//!
//! Every pass fails fast: the first error aborts the pass and is handed back
//! to the caller as a [`PassError`]. The kinds are closed:
//!
//! - `Gen`: generic pass failure with a message
//! - `Panic`: a broken internal invariant (a compiler defect, never expected
//!   from well-formed input)
//! - `Parse`: a wrapped failure from the parser
//! - `Syntax`: malformed surface syntax
//! - `Undefined`: a use-site name that resolves to no binding
//! - `Type`: a genuine type mismatch, with the offending expression, the
//!   expected type and the type found
//!
//! None of them is retryable. Each kind has a stable [`ErrorCode`].

mod error;
mod error_code;
mod mismatch;

pub use error::{ParseError, PassError, PassResult};
pub use error_code::ErrorCode;
pub use mismatch::{Expected, TypeMismatch};
