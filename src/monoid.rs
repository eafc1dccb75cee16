//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends [`Semigroup`] with an identity element, which makes
//! folding an empty sequence well defined. For
//! [`ValidationResult`](crate::ValidationResult) the identity is `Valid`, so
//! running no validators at all passes.
//!
//! # Laws
//!
//! ```text
//! a.combine(M::empty()) == a           (right identity)
//! M::empty().combine(a) == a           (left identity)
//! ```
//!
//! # Examples
//!
//! ```
//! use validator_combinators::monoid::fold_all;
//! use validator_combinators::ValidationResult;
//!
//! let none: Vec<ValidationResult> = vec![];
//! assert_eq!(fold_all(none), ValidationResult::valid());
//!
//! let some = vec![
//!     ValidationResult::invalid("a"),
//!     ValidationResult::valid(),
//!     ValidationResult::invalid("b"),
//! ];
//! assert_eq!(fold_all(some), ValidationResult::invalid("a\nb"));
//! ```

use crate::Semigroup;

/// A `Monoid` is a `Semigroup` with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    ///
    /// Satisfies: `a.combine(Self::empty()) == a` and `Self::empty().combine(a) == a`
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

/// Fold an iterator into a single value, starting from the identity.
///
/// Every element is consumed, in order.
pub fn fold_all<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
