//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the
//! short-circuiting logical combinators for composing predicates.

/// A boolean check over subjects of type `T`.
///
/// Predicates are pure: they hold no mutable state and checking the same
/// subject twice gives the same answer. Closures of the shape
/// `Fn(&T) -> bool` are predicates.
///
/// # Example
///
/// ```rust
/// use validator_combinators::predicate::*;
///
/// let positive = |x: &i32| *x > 0;
/// let small = |x: &i32| *x < 100;
///
/// let in_range = positive.and(small);
/// assert!(in_range.check(&25));
/// assert!(!in_range.check(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the subject satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so a composed predicate is as cheap
/// to call as the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with short-circuit AND.
    ///
    /// `self` runs first; `other` only runs when `self` holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_combinators::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// assert!(p.check(&50));
    /// assert!(!p.check(&0));
    /// assert!(!p.check(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with short-circuit OR.
    ///
    /// `other` only runs when `self` does not hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validator_combinators::predicate::*;
    ///
    /// let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
    /// assert!(p.check(&-5));
    /// assert!(p.check(&150));
    /// assert!(!p.check(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
