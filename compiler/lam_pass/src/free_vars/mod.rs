//! Free-variable analysis.
//!
//! A variable occurrence is free when no enclosing lambda parameter and no
//! earlier top-level binding introduces it. After translation these are
//! exactly the names that failed to resolve:
//!
//! ```text
//! λx.p               ⇒ { $p0:∅ }
//! let p = 1; λx.p    ⇒ { }
//! let f = id; λx.f 42 ⇒ { $id0:∅ }
//! ```
//!
//! The analysis is structural and works on any Core IR, including hand-built
//! trees whose references were never resolved.

use std::collections::BTreeSet;

use lam_diagnostic::PassResult;
use lam_ir::visitor::{walk_binding, walk_expr, Visitor};
use lam_ir::{Binding, Expr, Progn, Ref};
use rustc_hash::FxHashSet;

use crate::pass::{execute, modify, traverse, Pass};
use crate::stack::ensure_sufficient_stack;

/// Analysis state: what is bound at the current point, and what has been
/// found free so far.
#[derive(Debug, Default)]
pub struct FreeVars {
    globals: FxHashSet<Ref>,
    locals: Vec<Ref>,
    free: BTreeSet<Ref>,
}

impl FreeVars {
    fn is_bound(&self, var: &Ref) -> bool {
        self.locals.contains(var) || self.globals.contains(var)
    }

    /// The free references found, in `Ref` order.
    pub fn into_set(self) -> BTreeSet<Ref> {
        self.free
    }
}

impl<'ir> Visitor<'ir> for FreeVars {
    fn visit_binding(&mut self, binding: &'ir Binding) {
        walk_binding(self, binding);
        self.globals.insert(binding.name.clone());
    }

    fn visit_expr(&mut self, expr: &'ir Expr) {
        ensure_sufficient_stack(|| walk_expr(self, expr));
    }

    fn visit_var(&mut self, var: &'ir Ref) {
        if !self.is_bound(var) {
            self.free.insert(var.clone());
        }
    }

    fn visit_lambda(&mut self, params: &'ir [Ref], body: &'ir Expr) {
        let mark = self.locals.len();
        self.locals.extend(params.iter().cloned());
        self.visit_expr(body);
        self.locals.truncate(mark);
    }
}

/// Collect the free references of a whole program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn free_vars(progn: &Progn) -> PassResult<BTreeSet<Ref>> {
    let free = execute(free_vars_pass(progn), FreeVars::default())?.into_set();
    tracing::debug!(count = free.len(), "free variables collected");
    Ok(free)
}

/// The analysis pass, one step per binding and one for the entry.
pub fn free_vars_pass(progn: &Progn) -> Pass<'_, FreeVars, ()> {
    traverse(&progn.bindings, |binding| {
        modify(move |state: &mut FreeVars| state.visit_binding(binding))
    })
    .then(modify(move |state: &mut FreeVars| {
        state.visit_expr(&progn.entry);
    }))
}

/// Collect the free references of a single expression, with nothing bound
/// around it.
pub fn free_vars_of(expr: &Expr) -> BTreeSet<Ref> {
    let mut state = FreeVars::default();
    state.visit_expr(expr);
    state.into_set()
}
