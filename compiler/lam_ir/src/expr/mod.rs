//! Core IR: typed expressions, bindings and programs.
//!
//! Every node can report its type without walking its children. Variables
//! carry the type in their reference, literals have a fixed base type, and
//! applications and lambdas store their type on the node. The stored type is
//! redundant with what the type algebra derives from the children:
//!
//! - `App { ty, func, args }`: `ty == func.ty().apply(args' types)`
//! - `Lambda { ty, params, body }`: `ty == Type::function(body.ty(), params' types)`
//!
//! Nothing here enforces that; the verifier recomputes and compares. Passes
//! never mutate nodes in place, they build new trees.

use crate::{Ref, Type, Typed};

/// A Core IR expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Ref),
    Int(i64),
    Bool(bool),
    /// Application of `func` to `args`, annotated with its result type.
    App {
        ty: Type,
        func: Box<Expr>,
        args: Vec<Expr>,
    },
    /// Lambda annotated with its full curried function type.
    Lambda {
        ty: Type,
        params: Vec<Ref>,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn app(ty: Type, func: Expr, args: Vec<Expr>) -> Self {
        Expr::App {
            ty,
            func: Box::new(func),
            args,
        }
    }

    pub fn lambda(ty: Type, params: Vec<Ref>, body: Expr) -> Self {
        Expr::Lambda {
            ty,
            params,
            body: Box::new(body),
        }
    }

    /// Check if this node renders without surrounding parentheses in
    /// argument position.
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Var(_) | Expr::Int(_) | Expr::Bool(_))
    }
}

impl Typed<Type> for Expr {
    fn ty(&self) -> &Type {
        const INT: &Type = &Type::Int;
        const BOOL: &Type = &Type::Bool;
        match self {
            Expr::Var(r) => &r.ty,
            Expr::Int(_) => INT,
            Expr::Bool(_) => BOOL,
            Expr::App { ty, .. } | Expr::Lambda { ty, .. } => ty,
        }
    }
}

/// A top-level binding of `name` to `value`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Binding {
    pub name: Ref,
    pub value: Expr,
}

impl Binding {
    pub fn new(name: Ref, value: Expr) -> Self {
        Binding { name, value }
    }
}

impl Typed<Type> for Binding {
    fn ty(&self) -> &Type {
        &self.name.ty
    }
}

/// A whole program: bindings in declaration order plus the entry expression.
///
/// Later bindings may refer to earlier ones. A program moves through the
/// pass pipeline by value; each pass either rebuilds it or hands it on.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Progn {
    pub bindings: Vec<Binding>,
    pub entry: Expr,
}

impl Progn {
    pub fn new(bindings: Vec<Binding>, entry: Expr) -> Self {
        Progn { bindings, entry }
    }
}

impl Typed<Type> for Progn {
    /// The type of the entry expression.
    fn ty(&self) -> &Type {
        self.entry.ty()
    }
}
