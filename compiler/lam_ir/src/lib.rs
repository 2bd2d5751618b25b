//! Lam IR - Typed Core Intermediate Representation
//!
//! This crate contains the data structures every Lam pass works on:
//! - The type algebra (`Type`) used to build and take apart function types
//! - Scoped references (`Ref`) that identify one binding site each
//! - The Core IR (`Expr`, `Binding`, `Progn`)
//! - The surface tree produced by the parser (`Surface`)
//! - Rendering of all of the above for debugging
//!
//! # Redundant Annotations
//!
//! Applications and lambdas store their type on the node. `Typed::ty` reads
//! the stored annotation and never recomputes it. A separate verifier pass
//! recomputes every annotation bottom-up and reports disagreement; the two
//! concerns stay decoupled so consumers get O(1) type lookups.

mod expr;
mod name;
mod reference;
mod render;
pub mod surface;
mod traits;
mod ty;
pub mod visitor;

pub use expr::{Binding, Expr, Progn};
pub use name::Name;
pub use reference::{Ref, Scope};
pub use surface::{Param, Surface};
pub use traits::Typed;
pub use ty::{ApplyError, Type};
