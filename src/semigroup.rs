//! Semigroup trait for associative operations
//!
//! A Semigroup is a type with an associative binary operation. It is what lets
//! [`all`](crate::validator::all) gather every failure from a list of
//! validators into a single result instead of stopping at the first one.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Semigroup, the `combine` operation must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use validator_combinators::{Semigroup, ValidationResult};
//!
//! // Combining vectors
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//!
//! // Combining validation results keeps every failure
//! let result = ValidationResult::invalid("Name is empty.")
//!     .combine(ValidationResult::invalid("Missing @-sign in E-Mail."));
//! assert_eq!(result.reason(), Some("Name is empty.\nMissing @-sign in E-Mail."));
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// Implementations must satisfy the associativity law:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the originals are needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
