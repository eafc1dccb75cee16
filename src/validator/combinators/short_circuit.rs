//! And combinator - first failure wins.

use crate::validator::trait_def::Validator;
use crate::ValidationResult;

/// Runs `first`, and `second` only if `first` passed.
///
/// Created by [`ValidatorExt::and`](crate::validator::ValidatorExt::and)
/// or [`and`].
#[derive(Clone, Copy, Debug)]
pub struct And<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T: ?Sized, A: Validator<T>, B: Validator<T>> Validator<T> for And<A, B> {
    #[inline]
    fn validate(&self, subject: &T) -> ValidationResult {
        match self.first.validate(subject) {
            ValidationResult::Valid => self.second.validate(subject),
            invalid => invalid,
        }
    }
}

/// Compose two validators with short-circuit semantics.
///
/// Equivalent to `first.and(second)`.
///
/// # Example
///
/// ```rust
/// use validator_combinators::validator::{and, holds};
/// use validator_combinators::{Validator, ValidationResult};
///
/// let v = and(
///     holds(|n: &i32| *n > 0, "not positive"),
///     holds(|n: &i32| n % 2 == 0, "odd"),
/// );
///
/// assert_eq!(v.validate(&4), ValidationResult::valid());
/// assert_eq!(v.validate(&-3), ValidationResult::invalid("not positive"));
/// assert_eq!(v.validate(&3), ValidationResult::invalid("odd"));
/// ```
pub fn and<A, B>(first: A, second: B) -> And<A, B> {
    And { first, second }
}
