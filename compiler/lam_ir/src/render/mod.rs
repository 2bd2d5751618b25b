//! Textual rendering of types and Core IR.
//!
//! The output is a debugging surface, not a serialization format:
//!
//! | Item | Form |
//! |------|------|
//! | types | `∅`, `i`, `b`, `domain→codomain` |
//! | references | scope sigil (`$` unit, `%` local, `@` global), name, index, `:type` |
//! | lambdas | `λ<params>.<body>` |
//! | applications | `<fn> <arg> ...` |
//! | bindings | `let <ref> = <value>` |
//!
//! Boolean literals render as `#t` and `#f`.

use std::fmt;

use crate::{Binding, Expr, Progn, Ref, Type};

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unit => f.write_str("∅"),
            Type::Int => f.write_str("i"),
            Type::Bool => f.write_str("b"),
            // arrows associate to the right, so only a function domain needs
            // grouping
            Type::Func(domain, codomain) if domain.is_function() => {
                write!(f, "({domain})→{codomain}")
            }
            Type::Func(domain, codomain) => write!(f, "{domain}→{codomain}"),
        }
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}:{}",
            self.scope.sigil(),
            self.name,
            self.index,
            self.ty
        )
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(r) => write!(f, "{r}"),
            Expr::Int(n) => write!(f, "{n}"),
            Expr::Bool(true) => f.write_str("#t"),
            Expr::Bool(false) => f.write_str("#f"),
            Expr::Lambda { params, body, .. } => {
                f.write_str("λ")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ".{body}")
            }
            Expr::App { func, args, .. } => {
                if matches!(**func, Expr::Lambda { .. }) {
                    write!(f, "({func})")?;
                } else {
                    write!(f, "{func}")?;
                }
                for arg in args {
                    if arg.is_atom() {
                        write!(f, " {arg}")?;
                    } else {
                        write!(f, " ({arg})")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {}", self.name, self.value)
    }
}

impl fmt::Display for Progn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in &self.bindings {
            writeln!(f, "{binding}")?;
        }
        write!(f, "{}", self.entry)
    }
}
