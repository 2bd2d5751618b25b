//! Core IR visitor.
//!
//! Provides read-only traversal of a [`Progn`]. The visitor can mutate its
//! own state during traversal, but the IR remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes, and call the
//! matching `walk_*` function to continue into the children.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ir> Visitor<'ir> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ir Expr) {
//!         if matches!(expr, Expr::Int(_) | Expr::Bool(_)) {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::{Binding, Expr, Progn, Ref};

/// Core IR visitor trait.
pub trait Visitor<'ir> {
    /// Visit a whole program.
    fn visit_progn(&mut self, progn: &'ir Progn) {
        walk_progn(self, progn);
    }

    /// Visit a top-level binding.
    fn visit_binding(&mut self, binding: &'ir Binding) {
        walk_binding(self, binding);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ir Expr) {
        walk_expr(self, expr);
    }

    /// Visit a variable use site.
    fn visit_var(&mut self, var: &'ir Ref) {
        let _ = var;
    }

    /// Visit a lambda. `params` are bound within `body`.
    fn visit_lambda(&mut self, params: &'ir [Ref], body: &'ir Expr) {
        let _ = params;
        self.visit_expr(body);
    }
}

pub fn walk_progn<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, progn: &'ir Progn) {
    for binding in &progn.bindings {
        visitor.visit_binding(binding);
    }
    visitor.visit_expr(&progn.entry);
}

pub fn walk_binding<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, binding: &'ir Binding) {
    visitor.visit_expr(&binding.value);
}

pub fn walk_expr<'ir, V: Visitor<'ir> + ?Sized>(visitor: &mut V, expr: &'ir Expr) {
    match expr {
        Expr::Var(var) => visitor.visit_var(var),
        Expr::Int(_) | Expr::Bool(_) => {}
        Expr::App { func, args, .. } => {
            visitor.visit_expr(func);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Lambda { params, body, .. } => visitor.visit_lambda(params, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;

    struct CollectVars<'ir> {
        vars: Vec<&'ir Ref>,
        lambdas: usize,
    }

    impl<'ir> Visitor<'ir> for CollectVars<'ir> {
        fn visit_var(&mut self, var: &'ir Ref) {
            self.vars.push(var);
        }

        fn visit_lambda(&mut self, params: &'ir [Ref], body: &'ir Expr) {
            self.lambdas += 1;
            let _ = params;
            self.visit_expr(body);
        }
    }

    #[test]
    fn test_visit_progn_in_order() {
        let a = Ref::global("a", 0, Type::Int);
        let x = Ref::local("x", 0, Type::Int);
        let f = Ref::from("f");
        let progn = Progn::new(
            vec![Binding::new(a.clone(), Expr::Int(1))],
            Expr::lambda(
                Type::func(Type::Int, Type::Unit),
                vec![x.clone()],
                Expr::app(
                    Type::Unit,
                    Expr::Var(f.clone()),
                    vec![Expr::Var(x.clone()), Expr::Var(a.clone())],
                ),
            ),
        );

        let mut visitor = CollectVars {
            vars: Vec::new(),
            lambdas: 0,
        };
        visitor.visit_progn(&progn);

        assert_eq!(visitor.vars, vec![&f, &x, &a]);
        assert_eq!(visitor.lambdas, 1);
    }

    #[test]
    fn test_visit_literals_only() {
        let progn = Progn::new(vec![], Expr::Bool(true));
        let mut visitor = CollectVars {
            vars: Vec::new(),
            lambdas: 0,
        };
        visitor.visit_progn(&progn);
        assert!(visitor.vars.is_empty());
    }
}
