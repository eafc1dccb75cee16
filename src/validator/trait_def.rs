//! The `Validator` trait and its type-erased form.

use std::fmt;

use crate::ValidationResult;

/// A check over subjects of type `T` that explains its failures.
///
/// Validators are pure: they hold no mutable state, have no side effects and
/// give equal results for equal subjects. Closures of the shape
/// `Fn(&T) -> ValidationResult` are validators.
///
/// # Example
///
/// ```rust
/// use validator_combinators::{Validator, ValidationResult};
///
/// let adult = |age: &u32| {
///     if *age >= 18 {
///         ValidationResult::valid()
///     } else {
///         ValidationResult::invalid("Must be 18 or older.")
///     }
/// };
///
/// assert!(adult.validate(&30).is_valid());
/// assert_eq!(adult.validate(&12).reason(), Some("Must be 18 or older."));
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Run the check against `subject`.
    fn validate(&self, subject: &T) -> ValidationResult;
}

// Blanket impl for closures
impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    #[inline]
    fn validate(&self, subject: &T) -> ValidationResult {
        self(subject)
    }
}

/// A type-erased validator.
///
/// Use `BoxedValidator` to keep validators of different concrete types in
/// one collection, e.g. for [`all`](crate::validator::all).
///
/// # Example
///
/// ```rust
/// use validator_combinators::validator::{BoxedValidator, ValidatorExt};
/// use validator_combinators::user::{validators, User};
/// use validator_combinators::Validator;
///
/// let checks: Vec<BoxedValidator<User>> = vec![
///     validators::name_is_not_empty().boxed(),
///     validators::e_mail_contains_at_sign().boxed(),
/// ];
///
/// let user = User::new("Gregor", 30, "mail@mailinator.com");
/// assert!(checks.iter().all(|check| check.validate(&user).is_valid()));
/// ```
pub struct BoxedValidator<T: ?Sized> {
    inner: Box<dyn Validator<T>>,
}

impl<T: ?Sized> BoxedValidator<T> {
    /// Erase the type of `validator`.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        BoxedValidator {
            inner: Box::new(validator),
        }
    }
}

impl<T: ?Sized> Validator<T> for BoxedValidator<T> {
    #[inline]
    fn validate(&self, subject: &T) -> ValidationResult {
        self.inner.validate(subject)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedValidator")
            .field("inner", &"<validator>")
            .finish()
    }
}
