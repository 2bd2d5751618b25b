//! Type algebra for Lam.
//!
//! Types form a closed set: the `Unit` placeholder, the two base types, and
//! the function arrow. Multi-argument functions are curried, so a function of
//! N arguments is N right-nested arrows ending in a non-function type:
//!
//! ```text
//! i → b → i   ==   Func(Int, Func(Bool, Int))
//! ```
//!
//! Equality is exact structural equality. There are no coercions: an
//! argument is accepted by an arrow only if it is identical to the domain.

/// A Lam type.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Type {
    /// Placeholder carried by references that have not been scope-resolved.
    Unit,
    Int,
    Bool,
    /// Function arrow: domain and codomain.
    Func(Box<Type>, Box<Type>),
}

/// Why an application could not consume its arguments.
///
/// `position` is the zero-based index of the argument that was rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ApplyError {
    /// An argument was applied to something that is not a function.
    NotAFunction { position: usize, found: Type },
    /// The argument's type differs from the arrow's domain.
    ArgumentMismatch {
        position: usize,
        expected: Type,
        found: Type,
    },
}

impl Type {
    /// Build a single arrow `domain → codomain`.
    pub fn func(domain: Type, codomain: Type) -> Self {
        Type::Func(Box::new(domain), Box::new(codomain))
    }

    /// Build the curried type of a function taking `args` in order and
    /// returning `ret`.
    ///
    /// The arguments are folded from the right, so
    /// `function(Int, [Bool, Int])` is `b → i → i`. With no arguments the
    /// result is `ret` itself.
    pub fn function<I>(ret: Type, args: I) -> Self
    where
        I: IntoIterator<Item = Type>,
        I::IntoIter: DoubleEndedIterator,
    {
        args.into_iter()
            .rev()
            .fold(ret, |codomain, domain| Type::func(domain, codomain))
    }

    /// Check if this is a function arrow.
    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Func(..))
    }

    /// Check that no `Unit` placeholder occurs anywhere in the type.
    pub fn is_resolved(&self) -> bool {
        match self {
            Type::Unit => false,
            Type::Int | Type::Bool => true,
            Type::Func(domain, codomain) => domain.is_resolved() && codomain.is_resolved(),
        }
    }

    /// Follow the arrow chain to its final non-function type.
    ///
    /// A non-function type is its own return type.
    pub fn return_type(&self) -> &Type {
        let mut ty = self;
        while let Type::Func(_, codomain) = ty {
            ty = codomain;
        }
        ty
    }

    /// Domain of the outermost arrow.
    ///
    /// For a non-function type this is the type itself; the degenerate case is
    /// not an error.
    pub fn argument_type(&self) -> &Type {
        match self {
            Type::Func(domain, _) => domain,
            other => other,
        }
    }

    /// Number of arrows before reaching a non-function type.
    pub fn arity(&self) -> usize {
        let mut count = 0;
        let mut ty = self;
        while let Type::Func(_, codomain) = ty {
            count += 1;
            ty = codomain;
        }
        count
    }

    /// Consume `args` one at a time against this type.
    ///
    /// Applying no arguments yields the type unchanged. Each argument must be
    /// structurally equal to the domain of the current arrow. Returns `None`
    /// on a domain mismatch or when an argument meets a non-function type.
    ///
    /// Under-application is not detected: the remaining (still functional)
    /// type is returned and callers compare it against their expectations.
    pub fn apply(&self, args: &[Type]) -> Option<&Type> {
        self.apply_checked(args).ok()
    }

    /// Like [`Type::apply`], but reports which argument was rejected and why.
    pub fn apply_checked(&self, args: &[Type]) -> Result<&Type, ApplyError> {
        let mut ty = self;
        for (position, arg) in args.iter().enumerate() {
            match ty {
                Type::Func(domain, codomain) if **domain == *arg => ty = codomain,
                Type::Func(domain, _) => {
                    return Err(ApplyError::ArgumentMismatch {
                        position,
                        expected: (**domain).clone(),
                        found: arg.clone(),
                    });
                }
                other => {
                    return Err(ApplyError::NotAFunction {
                        position,
                        found: other.clone(),
                    });
                }
            }
        }
        Ok(ty)
    }
}
