//! Extension trait providing combinator methods for all validators.

use std::borrow::Cow;

use crate::validator::combinators::{And, Named};
use crate::validator::trait_def::{BoxedValidator, Validator};

/// Combinator methods for every [`Validator`].
///
/// Automatically implemented for all validators; you don't need to
/// implement it yourself.
///
/// # Example
///
/// ```rust
/// use validator_combinators::validator::{holds, ValidatorExt};
/// use validator_combinators::{Validator, ValidationResult};
///
/// let v = holds(|s: &str| !s.is_empty(), "empty")
///     .and(holds(|s: &str| s.is_ascii(), "not ascii"))
///     .named("ascii-word");
///
/// assert_eq!(v.validate("ok"), ValidationResult::valid());
/// assert_eq!(v.validate(""), ValidationResult::invalid("empty"));
/// ```
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized {
    /// Compose with short-circuit semantics: first failure wins.
    ///
    /// `self` runs first. If it fails its result is returned and `other`
    /// is not evaluated; otherwise the result of `other` is returned.
    fn and<V: Validator<T>>(self, other: V) -> And<Self, V> {
        And {
            first: self,
            second: other,
        }
    }

    /// Erase the concrete type, e.g. to store mixed validators together.
    fn boxed(self) -> BoxedValidator<T>
    where
        Self: 'static,
    {
        BoxedValidator::new(self)
    }

    /// Attach a name used in log events.
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named {
            inner: self,
            name: name.into(),
        }
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorExt<T> for V {}
