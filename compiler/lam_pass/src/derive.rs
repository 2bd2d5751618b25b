//! Type derivation used while annotating nodes.
//!
//! Translation annotates with these rules. The verifier recomputes lambda
//! types with [`lambda`] but checks applications exactly, since by then no
//! operand may still be unresolved.

use lam_ir::{ApplyError, Type};

/// Result type of applying a callee of type `func` to arguments of types
/// `args`.
///
/// When the callee or an argument still has an unresolved type the check is
/// deferred and the application is typed with the `Unit` placeholder. The
/// unresolved reference behind it is reported by whoever resolves or
/// verifies it.
pub(crate) fn application(func: &Type, args: &[Type]) -> Result<Type, ApplyError> {
    if !func.is_resolved() || args.iter().any(|arg| !arg.is_resolved()) {
        tracing::trace!(%func, "deferring application check on unresolved operand");
        return Ok(Type::Unit);
    }
    func.apply_checked(args).cloned()
}

/// Type of a lambda whose parameters have types `params` and whose body has
/// type `body`.
pub(crate) fn lambda<'p, I>(body: &Type, params: I) -> Type
where
    I: IntoIterator<Item = &'p Type>,
    I::IntoIter: DoubleEndedIterator,
{
    Type::function(body.clone(), params.into_iter().cloned())
}
