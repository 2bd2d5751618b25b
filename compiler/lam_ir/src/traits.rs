//! Focused capability traits.

/// Types that carry a Lam type annotation.
///
/// Implementations return the stored annotation. They never recompute it
/// from children, which keeps lookups O(1); checking that annotations agree
/// with the structure is the verifier's job.
pub trait Typed<T> {
    /// Get the type of this item.
    fn ty(&self) -> &T;
}
