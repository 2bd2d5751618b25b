//! Scoped references.
//!
//! A `Ref` names one binding site. Besides the source name it records a
//! disambiguation index, the bound value's type and the scope the binding
//! lives in. Equality compares all four fields, so two references are equal
//! only when they denote the same binding, and a `Ref` can be used directly
//! as a map or set key.
//!
//! Indices and scopes are assigned by scope resolution during translation.
//! References built from a bare name carry the provisional `Unit` scope,
//! index 0 and the `Unit` type.

use crate::{Name, Type};

/// Where a binding is visible.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Scope {
    /// Provisional: the reference has not been resolved yet.
    Unit,
    /// Lambda parameter, visible only within that lambda's body.
    Local,
    /// Top-level binding, visible everywhere after it is introduced.
    Global,
}

impl Scope {
    /// Sigil used when rendering references in this scope.
    pub const fn sigil(self) -> char {
        match self {
            Scope::Unit => '$',
            Scope::Local => '%',
            Scope::Global => '@',
        }
    }
}

/// A variable descriptor identifying one binding site.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ref {
    pub name: Name,
    pub index: u32,
    pub ty: Type,
    pub scope: Scope,
}

impl Ref {
    pub fn new(name: impl Into<Name>, index: u32, ty: Type, scope: Scope) -> Self {
        Ref {
            name: name.into(),
            index,
            ty,
            scope,
        }
    }

    /// Fallback reference for a name with no scope or type information.
    pub fn unresolved(name: impl Into<Name>) -> Self {
        Ref::new(name, 0, Type::Unit, Scope::Unit)
    }

    pub fn local(name: impl Into<Name>, index: u32, ty: Type) -> Self {
        Ref::new(name, index, ty, Scope::Local)
    }

    pub fn global(name: impl Into<Name>, index: u32, ty: Type) -> Self {
        Ref::new(name, index, ty, Scope::Global)
    }

    /// Check if scope resolution has not run on this reference.
    #[inline]
    pub fn is_unresolved(&self) -> bool {
        self.scope == Scope::Unit
    }
}

impl From<&str> for Ref {
    fn from(name: &str) -> Self {
        Ref::unresolved(name)
    }
}

impl From<Name> for Ref {
    fn from(name: Name) -> Self {
        Ref::unresolved(name)
    }
}
