//! Surface tree → Core IR translation.
//!
//! Resolves every name to a scoped [`Ref`], assigns disambiguation indices,
//! and annotates applications and lambdas with their types.
//!
//! # Program Shape
//!
//! The chain of `let`s at the root of the surface tree becomes the ordered
//! top-level bindings, and the innermost body becomes the entry expression:
//!
//! ```text
//! let p = 1; λx:i.p    ⇒    let @p0:i = 1
//!                           λ%x0:i.@p0:i
//! ```
//!
//! A binding's value is translated before its name is introduced, so
//! bindings are not recursive. A `let` anywhere else is desugared into an
//! applied lambda: `let y = v; b` becomes `(λy.b) v`.
//!
//! # Unresolved Names
//!
//! Under [`UnresolvedPolicy::Keep`] a name with no binding becomes the
//! fallback reference `$name0:∅`, and applications involving it are typed
//! `∅`. Free-variable analysis reports these references and the verifier
//! rejects them. Under [`UnresolvedPolicy::Reject`] translation fails with
//! `PassError::Undefined` instead.

mod scope;

use lam_diagnostic::{PassError, PassResult, TypeMismatch};
use lam_ir::{Binding, Expr, Name, Param, Progn, Ref, Surface, Type, Typed};
use rustc_hash::FxHashSet;

use crate::pass::{evaluate, traverse, Pass};
use crate::{derive, stack::ensure_sufficient_stack};

pub use scope::ScopeTable;

/// What translation does with a name that resolves to no binding.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum UnresolvedPolicy {
    /// Keep it as a provisional `Unit`-scope reference.
    #[default]
    Keep,
    /// Fail with `PassError::Undefined`.
    Reject,
}

/// Options for the translation pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TranslateOptions {
    pub unresolved: UnresolvedPolicy,
}

/// Translate a surface tree into a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn translate(tree: Surface, options: TranslateOptions) -> PassResult<Progn> {
    evaluate(translate_pass(tree), ScopeTable::new(options))
}

/// The translation pass, ready to be run against a [`ScopeTable`].
pub fn translate_pass<'a>(tree: Surface) -> Pass<'a, ScopeTable, Progn> {
    let (lets, entry) = tree.into_top_level();
    traverse(lets, |(name, value)| translate_binding(name, value)).and_then(move |bindings| {
        Pass::new(move |scope: &mut ScopeTable| {
            let entry = translate_expr(scope, &entry)?;
            tracing::debug!(bindings = bindings.len(), "translated program");
            Ok(Progn::new(bindings, entry))
        })
    })
}

fn translate_binding<'a>(name: Name, value: Surface) -> Pass<'a, ScopeTable, Binding> {
    Pass::new(move |scope: &mut ScopeTable| {
        let value = translate_expr(scope, &value)?;
        let name = scope.bind_global(name, value.ty().clone());
        Ok(Binding::new(name, value))
    })
}

fn translate_expr(scope: &mut ScopeTable, tree: &Surface) -> PassResult<Expr> {
    ensure_sufficient_stack(|| match tree {
        Surface::Var(name) => resolve_var(scope, name).map(Expr::Var),
        Surface::Int(n) => Ok(Expr::Int(*n)),
        Surface::Bool(b) => Ok(Expr::Bool(*b)),
        Surface::App(func, args) => translate_app(scope, func, args),
        Surface::Lambda(params, body) => translate_lambda(scope, params, body),
        Surface::Let(name, value, body) => translate_let(scope, name, value, body),
    })
}

fn resolve_var(scope: &ScopeTable, name: &Name) -> PassResult<Ref> {
    if let Some(binding) = scope.resolve(name) {
        return Ok(binding.clone());
    }
    let unresolved = Ref::unresolved(name.clone());
    match scope.options().unresolved {
        UnresolvedPolicy::Keep => {
            tracing::trace!(%name, "leaving reference unresolved");
            Ok(unresolved)
        }
        UnresolvedPolicy::Reject => Err(PassError::Undefined(unresolved)),
    }
}

fn translate_app(scope: &mut ScopeTable, func: &Surface, args: &[Surface]) -> PassResult<Expr> {
    if args.is_empty() {
        return Err(PassError::syntax("application needs at least one argument"));
    }
    let func = translate_expr(scope, func)?;
    let args = args
        .iter()
        .map(|arg| translate_expr(scope, arg))
        .collect::<PassResult<Vec<_>>>()?;

    let arg_tys: Vec<Type> = args.iter().map(|arg| arg.ty().clone()).collect();
    match derive::application(func.ty(), &arg_tys) {
        Ok(ty) => Ok(Expr::app(ty, func, args)),
        Err(error) => {
            let offending = Expr::app(Type::Unit, func, args);
            Err(TypeMismatch::from_apply(offending, error, &arg_tys).into())
        }
    }
}

fn translate_lambda(scope: &mut ScopeTable, params: &[Param], body: &Surface) -> PassResult<Expr> {
    if params.is_empty() {
        return Err(PassError::syntax("lambda must bind at least one parameter"));
    }

    let mut seen = FxHashSet::default();
    let mut param_tys = Vec::with_capacity(params.len());
    for param in params {
        if !seen.insert(&param.name) {
            return Err(PassError::syntax(format!(
                "duplicate parameter `{}` in lambda",
                param.name
            )));
        }
        match &param.ty {
            Some(ty) if ty.is_resolved() => param_tys.push(ty.clone()),
            _ => {
                return Err(PassError::syntax(format!(
                    "parameter `{}` needs a type annotation",
                    param.name
                )));
            }
        }
    }

    scope.enter_lambda();
    let bound = params
        .iter()
        .zip(&param_tys)
        .map(|(param, ty)| scope.bind_local(param.name.clone(), ty.clone()))
        .collect::<PassResult<Vec<_>>>()?;
    let body = translate_expr(scope, body)?;
    scope.exit_lambda();

    let ty = derive::lambda(body.ty(), &param_tys);
    Ok(Expr::lambda(ty, bound, body))
}

fn translate_let(
    scope: &mut ScopeTable,
    name: &Name,
    value: &Surface,
    body: &Surface,
) -> PassResult<Expr> {
    let value = translate_expr(scope, value)?;
    let value_ty = value.ty().clone();

    scope.enter_lambda();
    let param = scope.bind_local(name.clone(), value_ty.clone())?;
    let body = translate_expr(scope, body)?;
    scope.exit_lambda();

    let func_ty = derive::lambda(body.ty(), [&value_ty]);
    let ty = derive::application(&func_ty, std::slice::from_ref(&value_ty))
        .map_err(|_| PassError::panic(format!("desugared `let {name}` rejects its own value")))?;
    Ok(Expr::app(
        ty,
        Expr::lambda(func_ty, vec![param], body),
        vec![value],
    ))
}
