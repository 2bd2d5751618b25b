//! Surface tree handed over by the parser.
//!
//! The surface tree is liberal: names are bare strings, parameter
//! annotations may be missing, and nothing has been type-checked. Translation
//! turns it into a [`Progn`](crate::Progn).

use crate::{Name, Type};

/// A lambda parameter with its (optional) type annotation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Param {
    pub name: Name,
    pub ty: Option<Type>,
}

impl Param {
    pub fn new(name: impl Into<Name>, ty: Type) -> Self {
        Param {
            name: name.into(),
            ty: Some(ty),
        }
    }

    /// A parameter written without an annotation.
    pub fn untyped(name: impl Into<Name>) -> Self {
        Param {
            name: name.into(),
            ty: None,
        }
    }
}

/// A surface expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Surface {
    Var(Name),
    Int(i64),
    Bool(bool),
    App(Box<Surface>, Vec<Surface>),
    Lambda(Vec<Param>, Box<Surface>),
    /// Non-recursive `let name = value; body`.
    Let(Name, Box<Surface>, Box<Surface>),
}

impl Surface {
    pub fn var(name: impl Into<Name>) -> Self {
        Surface::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Surface::Int(value)
    }

    pub fn bool(value: bool) -> Self {
        Surface::Bool(value)
    }

    pub fn app(func: Surface, args: impl IntoIterator<Item = Surface>) -> Self {
        Surface::App(Box::new(func), args.into_iter().collect())
    }

    pub fn lambda(params: impl IntoIterator<Item = Param>, body: Surface) -> Self {
        Surface::Lambda(params.into_iter().collect(), Box::new(body))
    }

    pub fn let_in(name: impl Into<Name>, value: Surface, body: Surface) -> Self {
        Surface::Let(name.into(), Box::new(value), Box::new(body))
    }

    /// Split the chain of `let`s at the root of the tree from the innermost
    /// body.
    ///
    /// `let a = 1; let b = a; b` splits into `[(a, 1), (b, a)]` and `b`.
    pub fn into_top_level(self) -> (Vec<(Name, Surface)>, Surface) {
        let mut lets = Vec::new();
        let mut tree = self;
        while let Surface::Let(name, value, body) = tree {
            lets.push((name, *value));
            tree = *body;
        }
        (lets, tree)
    }
}
