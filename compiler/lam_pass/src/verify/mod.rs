//! Core IR verification.
//!
//! Recomputes every annotation bottom-up with the same derivation rules
//! translation uses, and compares it with what is stored. Consumers of the
//! IR trust the stored annotations; this pass is the only place they are
//! checked.
//!
//! # What's Checked
//!
//! 1. No `Unit`-scope reference remains (`PassError::Undefined`)
//! 2. Every local or global reference carries a type free of `∅`, is visible
//!    at its use site and agrees with its binder (`Panic`)
//! 3. Applications type-check (`PassError::Type`) and their annotation
//!    matches the derived result type (`Panic`)
//! 4. Lambda parameters are local with `∅`-free types, and the lambda
//!    annotation matches the derived function type (`Panic`)
//!
//! Unlike translation, nothing is deferred here: once every reference is
//! resolved, every application is checked exactly. Arguments are verified
//! before the callee so that an unresolved argument is reported as
//! `Undefined` ahead of a `let`-bound parameter that inherited its `∅` type.
//! 5. Bindings are global and annotated with their value's type (`Panic`)
//!
//! The IR is never repaired: the first disagreement aborts the pass.

use lam_diagnostic::{PassError, PassResult, TypeMismatch};
use lam_ir::{Binding, Expr, Progn, Ref, Scope, Type};
use rustc_hash::FxHashSet;

use crate::pass::{evaluate, traverse, Pass};
use crate::{derive, stack::ensure_sufficient_stack};

/// Bindings visible at the current point of the walk.
#[derive(Debug, Default)]
pub struct Visible {
    globals: FxHashSet<Ref>,
    locals: Vec<Ref>,
}

impl Visible {
    fn contains(&self, var: &Ref) -> bool {
        match var.scope {
            Scope::Unit => false,
            Scope::Local => self.locals.contains(var),
            Scope::Global => self.globals.contains(var),
        }
    }
}

/// Verify `progn` and hand it back unchanged.
#[tracing::instrument(level = "debug", skip_all)]
pub fn verify(progn: Progn) -> PassResult<Progn> {
    let entry_ty = evaluate(verify_pass(&progn), Visible::default())?;
    tracing::debug!(%entry_ty, "program verified");
    Ok(progn)
}

/// The verification pass. Produces the recomputed type of the entry
/// expression.
pub fn verify_pass(progn: &Progn) -> Pass<'_, Visible, Type> {
    traverse(&progn.bindings, |binding| {
        Pass::new(move |visible: &mut Visible| verify_binding(visible, binding))
    })
    .then(Pass::new(move |visible: &mut Visible| {
        verify_expr(visible, &progn.entry)
    }))
}

/// A broken IR invariant. Logged, then returned as `PassError::Panic`.
fn invariant(message: String) -> PassError {
    tracing::error!(%message, "IR invariant violated");
    PassError::panic(message)
}

fn verify_binding(visible: &mut Visible, binding: &Binding) -> PassResult<()> {
    let ty = verify_expr(visible, &binding.value)?;
    let name = &binding.name;
    if name.scope != Scope::Global {
        return Err(invariant(format!("top-level binding `{name}` is not global")));
    }
    if name.ty != ty {
        return Err(invariant(format!(
            "binding `{name}` is annotated {} but its value has type {ty}",
            name.ty
        )));
    }
    visible.globals.insert(name.clone());
    Ok(())
}

fn verify_expr(visible: &mut Visible, expr: &Expr) -> PassResult<Type> {
    ensure_sufficient_stack(|| match expr {
        Expr::Var(var) => verify_var(visible, var),
        Expr::Int(_) => Ok(Type::Int),
        Expr::Bool(_) => Ok(Type::Bool),
        Expr::App { ty, func, args } => verify_app(visible, expr, ty, func, args),
        Expr::Lambda { ty, params, body } => verify_lambda(visible, ty, params, body),
    })
}

fn verify_var(visible: &Visible, var: &Ref) -> PassResult<Type> {
    if var.is_unresolved() {
        return Err(PassError::Undefined(var.clone()));
    }
    if !var.ty.is_resolved() {
        return Err(invariant(format!("resolved reference `{var}` has a placeholder type")));
    }
    if !visible.contains(var) {
        return Err(invariant(format!("`{var}` is not bound at its use site")));
    }
    Ok(var.ty.clone())
}

fn verify_app(
    visible: &mut Visible,
    expr: &Expr,
    ty: &Type,
    func: &Expr,
    args: &[Expr],
) -> PassResult<Type> {
    if args.is_empty() {
        return Err(invariant(format!("application `{expr}` has no arguments")));
    }
    let arg_tys = args
        .iter()
        .map(|arg| verify_expr(visible, arg))
        .collect::<PassResult<Vec<_>>>()?;
    let func_ty = verify_expr(visible, func)?;

    let derived = func_ty
        .apply_checked(&arg_tys)
        .cloned()
        .map_err(|error| TypeMismatch::from_apply(expr.clone(), error, &arg_tys))?;
    if derived != *ty {
        return Err(invariant(format!(
            "application `{expr}` is annotated {ty} but has type {derived}"
        )));
    }
    Ok(derived)
}

fn verify_lambda(
    visible: &mut Visible,
    ty: &Type,
    params: &[Ref],
    body: &Expr,
) -> PassResult<Type> {
    if params.is_empty() {
        return Err(invariant(String::from("lambda binds no parameters")));
    }
    if let Some(param) = params.iter().find(|param| param.scope != Scope::Local) {
        return Err(invariant(format!("lambda parameter `{param}` is not local")));
    }
    if let Some(param) = params.iter().find(|param| !param.ty.is_resolved()) {
        return Err(invariant(format!("lambda parameter `{param}` has a placeholder type")));
    }

    let mark = visible.locals.len();
    visible.locals.extend(params.iter().cloned());
    let body_ty = verify_expr(visible, body)?;
    visible.locals.truncate(mark);

    let derived = derive::lambda(&body_ty, params.iter().map(|param| &param.ty));
    if derived != *ty {
        return Err(invariant(format!("lambda is annotated {ty} but has type {derived}")));
    }
    Ok(derived)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
