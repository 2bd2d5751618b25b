//! Source identifiers.
//!
//! A `Name` is the spelling of an identifier as it appeared in source. It is
//! shared rather than interned: cloning bumps a reference count, and equality
//! and ordering compare the text.

use std::fmt;
use std::sync::Arc;

/// Identifier text shared between every node that mentions it.
///
/// Has the traits needed to act as a map key or set member: Clone, Eq,
/// `PartialEq`, Ord, `PartialOrd`, Hash.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Name(Arc<str>);

impl Name {
    /// Create a name from its source spelling.
    pub fn new(text: &str) -> Self {
        Name(Arc::from(text))
    }

    /// The source spelling.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name(Arc::from(text))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
