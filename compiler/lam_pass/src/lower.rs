//! Lowering to a codegen-ready form.
//!
//! The target is a non-recursive, branch-free representation suitable for
//! code generation. It does not exist yet, so the pass refuses every
//! program instead of passing it through untouched.

use lam_diagnostic::{PassError, PassResult};
use lam_ir::Progn;

/// Lower a verified program.
///
/// Always fails with `PassError::Gen` until a lowered representation exists.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lower(progn: &Progn) -> PassResult<Progn> {
    tracing::debug!(bindings = progn.bindings.len(), "lowering requested");
    Err(PassError::generic("lowering to a codegen-ready form is not implemented"))
}
