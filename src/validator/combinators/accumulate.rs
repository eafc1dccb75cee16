//! All combinator - run every validator, report every failure.

use crate::monoid::fold_all;
use crate::validator::trait_def::Validator;
use crate::ValidationResult;

/// Runs every validator in order and accumulates all failure reasons.
///
/// Created by [`all`] or the [`all!`](crate::all!) macro.
#[derive(Clone, Debug)]
pub struct All<V> {
    pub(crate) validators: Vec<V>,
}

impl<V> All<V> {
    /// Number of validators that will run.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether there are no validators, in which case every subject passes.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<T: ?Sized, V: Validator<T>> Validator<T> for All<V> {
    fn validate(&self, subject: &T) -> ValidationResult {
        let result = fold_all(self.validators.iter().map(|v| v.validate(subject)));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            validators = self.validators.len(),
            valid = result.is_valid(),
            "evaluated all validators"
        );

        result
    }
}

/// Combine validators so that all of them run.
///
/// Unlike [`and`](crate::validator::and), which stops at the first failure,
/// `all` evaluates every validator in iteration order and joins the reasons
/// of every failure with a newline. With no validators the result is
/// `Valid`.
///
/// The validators must share one type; use [`all!`](crate::all!) or
/// [`BoxedValidator`](crate::validator::BoxedValidator) to mix types.
///
/// # Example
///
/// ```rust
/// use validator_combinators::validator::{all, holds, ValidatorExt};
/// use validator_combinators::{Validator, ValidationResult};
///
/// let v = all([
///     holds(|n: &i32| *n > 0, "not positive").boxed(),
///     holds(|n: &i32| *n < 10, "too big").boxed(),
/// ]);
///
/// assert_eq!(v.validate(&5), ValidationResult::valid());
/// assert_eq!(v.validate(&-5), ValidationResult::invalid("not positive"));
/// ```
pub fn all<I>(validators: I) -> All<I::Item>
where
    I: IntoIterator,
{
    All {
        validators: validators.into_iter().collect(),
    }
}

/// Build an [`All`] from validators of different types.
///
/// Each argument is boxed into a
/// [`BoxedValidator`](crate::validator::BoxedValidator).
///
/// # Example
///
/// ```rust
/// use validator_combinators::all;
/// use validator_combinators::user::{validators, User};
/// use validator_combinators::{Validator, ValidationResult};
///
/// let v = all![
///     validators::name_is_not_empty(),
///     validators::e_mail_contains_at_sign(),
/// ];
///
/// let user = User::new("", 30, "mailmailinator.com");
/// assert_eq!(
///     v.validate(&user),
///     ValidationResult::invalid("Name is empty.\nMissing @-sign in E-Mail.")
/// );
/// ```
#[macro_export]
macro_rules! all {
    () => {
        $crate::validator::all(::std::vec::Vec::<$crate::validator::BoxedValidator<_>>::new())
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::validator::all(::std::vec![
            $($crate::validator::BoxedValidator::new($validator)),+
        ])
    };
}
