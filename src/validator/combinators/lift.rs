//! Holds combinator - lift a predicate into a validator.

use crate::predicate::Predicate;
use crate::result::Reason;
use crate::validator::trait_def::Validator;
use crate::ValidationResult;

/// A validator that passes when its predicate holds and otherwise fails
/// with a fixed reason.
///
/// Created by [`holds`].
#[derive(Clone, Debug)]
pub struct Holds<P> {
    pub(crate) predicate: P,
    pub(crate) reason: Reason,
}

impl<P> Holds<P> {
    /// The reason reported on failure.
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl<T: ?Sized, P: Predicate<T>> Validator<T> for Holds<P> {
    #[inline]
    fn validate(&self, subject: &T) -> ValidationResult {
        if self.predicate.check(subject) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.reason.clone())
        }
    }
}

/// Lift a boolean predicate plus a failure message into a validator.
///
/// # Panics
///
/// Panics if `message` is empty.
///
/// # Example
///
/// ```rust
/// use validator_combinators::validator::holds;
/// use validator_combinators::{Validator, ValidationResult};
///
/// let short = holds(|s: &str| s.len() <= 5, "Too long.");
/// assert_eq!(short.validate("hello"), ValidationResult::valid());
/// assert_eq!(short.validate("goodbye"), ValidationResult::invalid("Too long."));
/// ```
pub fn holds<P>(predicate: P, message: impl Into<String>) -> Holds<P> {
    match Reason::new(message) {
        Ok(reason) => Holds { predicate, reason },
        Err(err) => panic!("{err}"),
    }
}
