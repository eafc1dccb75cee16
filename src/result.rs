//! The outcome of running a validator
//!
//! [`ValidationResult`] is either [`Valid`](ValidationResult::Valid) or
//! [`Invalid`](ValidationResult::Invalid) carrying a [`Reason`]. Results are
//! plain values: validators never fail by panicking or returning `Err`, they
//! describe what is wrong with the subject.
//!
//! # Examples
//!
//! ```
//! use validator_combinators::ValidationResult;
//!
//! let ok = ValidationResult::valid();
//! let bad = ValidationResult::invalid("Name is empty.");
//!
//! assert!(ok.is_valid());
//! assert_eq!(ok.reason(), None);
//! assert_eq!(bad.reason(), Some("Name is empty."));
//! assert_eq!(bad, ValidationResult::invalid("Name is empty."));
//! ```
//!
//! ## Accumulating failures
//!
//! Results form a [`Monoid`]: `Valid` is the identity and two failures combine
//! into one whose reason is both reasons joined by a newline.
//!
//! ```
//! use validator_combinators::{Semigroup, ValidationResult};
//!
//! let combined = ValidationResult::invalid("first")
//!     .combine(ValidationResult::valid())
//!     .combine(ValidationResult::invalid("second"));
//!
//! assert_eq!(combined, ValidationResult::invalid("first\nsecond"));
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::{Monoid, Semigroup};

/// Separator placed between reasons when failures are accumulated.
pub const REASON_SEPARATOR: &str = "\n";

/// Error returned when a failure reason would be empty.
///
/// An invalid result must always say why it is invalid; an empty reason
/// would silently drop that information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyReason;

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failure reason must not be empty")
    }
}

impl StdError for EmptyReason {}

/// A non-empty description of why a validation failed.
///
/// # Examples
///
/// ```
/// use validator_combinators::result::{EmptyReason, Reason};
///
/// let reason = Reason::new("Missing @-sign in E-Mail.").unwrap();
/// assert_eq!(reason.as_str(), "Missing @-sign in E-Mail.");
///
/// assert_eq!(Reason::new(""), Err(EmptyReason));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reason(String);

impl Reason {
    /// Create a reason, rejecting the empty string.
    pub fn new(reason: impl Into<String>) -> Result<Self, EmptyReason> {
        let reason = reason.into();
        if reason.is_empty() {
            Err(EmptyReason)
        } else {
            Ok(Reason(reason))
        }
    }

    /// Borrow the reason text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the reason text.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterate over the individual reasons folded into this one.
    ///
    /// ```
    /// use validator_combinators::ValidationResult;
    ///
    /// let result = ValidationResult::invalid("a\nb");
    /// let lines: Vec<&str> = match &result {
    ///     ValidationResult::Invalid(reason) => reason.lines().collect(),
    ///     ValidationResult::Valid => vec![],
    /// };
    /// assert_eq!(lines, vec!["a", "b"]);
    /// ```
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split(REASON_SEPARATOR)
    }
}

impl AsRef<str> for Reason {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Reason {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Reason {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Reason {
    type Error = EmptyReason;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Reason::new(value)
    }
}

impl TryFrom<&str> for Reason {
    type Error = EmptyReason;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Reason::new(value)
    }
}

impl From<Reason> for String {
    fn from(reason: Reason) -> Self {
        reason.0
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Reason {}

// Reasons concatenate in order, newline separated.
impl Semigroup for Reason {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.0.push_str(REASON_SEPARATOR);
        self.0.push_str(&other.0);
        self
    }
}

/// Outcome of applying a [`Validator`](crate::Validator) to a subject.
///
/// Equality is structural: two `Invalid` results are equal when their
/// reasons are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", content = "reason", rename_all = "lowercase")
)]
pub enum ValidationResult {
    /// The subject passed.
    Valid,
    /// The subject failed, with the reason why.
    Invalid(Reason),
}

impl ValidationResult {
    /// The passing result.
    #[inline]
    pub const fn valid() -> Self {
        ValidationResult::Valid
    }

    /// A failing result with the given reason.
    ///
    /// # Panics
    ///
    /// Panics if `reason` is empty. Use [`try_invalid`](Self::try_invalid)
    /// when the reason comes from untrusted input.
    ///
    /// ```should_panic
    /// use validator_combinators::ValidationResult;
    ///
    /// let _ = ValidationResult::invalid("");
    /// ```
    pub fn invalid(reason: impl Into<String>) -> Self {
        match Self::try_invalid(reason) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// A failing result, or [`EmptyReason`] if `reason` is empty.
    ///
    /// ```
    /// use validator_combinators::ValidationResult;
    /// use validator_combinators::result::EmptyReason;
    ///
    /// assert!(ValidationResult::try_invalid("too short").is_ok());
    /// assert_eq!(ValidationResult::try_invalid(""), Err(EmptyReason));
    /// ```
    pub fn try_invalid(reason: impl Into<String>) -> Result<Self, EmptyReason> {
        Reason::new(reason).map(ValidationResult::Invalid)
    }

    /// Whether the subject passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Whether the subject failed.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_))
    }

    /// The failure reason, present iff the result is invalid.
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason.as_str()),
        }
    }

    /// Convert into a `Result` so failures can be propagated with `?`.
    ///
    /// ```
    /// use validator_combinators::ValidationResult;
    /// use validator_combinators::result::Reason;
    ///
    /// fn register(check: ValidationResult) -> Result<&'static str, Reason> {
    ///     check.into_result()?;
    ///     Ok("registered")
    /// }
    ///
    /// assert_eq!(register(ValidationResult::valid()), Ok("registered"));
    /// assert!(register(ValidationResult::invalid("Name is empty.")).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), Reason> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult::Valid
    }
}

impl From<ValidationResult> for Result<(), Reason> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

impl From<Result<(), Reason>> for ValidationResult {
    fn from(result: Result<(), Reason>) -> Self {
        match result {
            Ok(()) => ValidationResult::Valid,
            Err(reason) => ValidationResult::Invalid(reason),
        }
    }
}

impl From<Reason> for ValidationResult {
    fn from(reason: Reason) -> Self {
        ValidationResult::Invalid(reason)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Valid => write!(f, "valid"),
            ValidationResult::Invalid(reason) => write!(f, "invalid: {}", reason),
        }
    }
}

impl Semigroup for ValidationResult {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (ValidationResult::Valid, other) => other,
            (this, ValidationResult::Valid) => this,
            (ValidationResult::Invalid(a), ValidationResult::Invalid(b)) => {
                ValidationResult::Invalid(a.combine(b))
            }
        }
    }
}

impl Monoid for ValidationResult {
    #[inline]
    fn empty() -> Self {
        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn valid_has_no_reason() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert!(!result.is_invalid());
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn invalid_carries_reason() {
        let result = ValidationResult::invalid("Name is empty.");
        assert!(result.is_invalid());
        assert_eq!(result.reason(), Some("Name is empty."));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(ValidationResult::valid(), ValidationResult::valid());
        assert_eq!(
            ValidationResult::invalid("x"),
            ValidationResult::invalid("x")
        );
        assert_ne!(
            ValidationResult::invalid("x"),
            ValidationResult::invalid("y")
        );
        assert_ne!(ValidationResult::valid(), ValidationResult::invalid("x"));
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(ValidationResult::invalid("x"));
        set.insert(ValidationResult::invalid("x"));
        set.insert(ValidationResult::valid());
        set.insert(ValidationResult::valid());
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn invalid_rejects_empty_reason() {
        let _ = ValidationResult::invalid("");
    }

    #[test]
    fn try_invalid_reports_empty_reason() {
        assert_eq!(ValidationResult::try_invalid(""), Err(EmptyReason));
        assert_eq!(
            ValidationResult::try_invalid("x"),
            Ok(ValidationResult::invalid("x"))
        );
    }

    #[test]
    fn whitespace_reason_is_kept_verbatim() {
        let result = ValidationResult::invalid(" ");
        assert_eq!(result.reason(), Some(" "));
    }

    #[test]
    fn display() {
        assert_eq!(ValidationResult::valid().to_string(), "valid");
        assert_eq!(
            ValidationResult::invalid("Name is empty.").to_string(),
            "invalid: Name is empty."
        );
        assert_eq!(
            EmptyReason.to_string(),
            "validation failure reason must not be empty"
        );
    }

    #[test]
    fn into_result_round_trip() {
        assert_eq!(ValidationResult::valid().into_result(), Ok(()));

        let err = ValidationResult::invalid("bad").into_result().unwrap_err();
        assert_eq!(err, "bad");
        assert_eq!(
            ValidationResult::from(Err(err)),
            ValidationResult::invalid("bad")
        );
    }

    #[test]
    fn combine_joins_reasons_in_order() {
        let result = ValidationResult::invalid("Name is empty.")
            .combine(ValidationResult::invalid("Missing @-sign in E-Mail."));
        assert_eq!(
            result,
            ValidationResult::invalid("Name is empty.\nMissing @-sign in E-Mail.")
        );
    }

    #[test]
    fn valid_is_identity() {
        let a = ValidationResult::invalid("a");
        assert_eq!(a.clone().combine(ValidationResult::empty()), a);
        assert_eq!(ValidationResult::empty().combine(a.clone()), a);
        assert_eq!(
            ValidationResult::empty().combine(ValidationResult::empty()),
            ValidationResult::valid()
        );
    }

    #[test]
    fn combine_is_associative() {
        let a = ValidationResult::invalid("a");
        let b = ValidationResult::valid();
        let c = ValidationResult::invalid("c");

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn reason_lines_split_accumulated_reasons() {
        let reason = Reason::new("a")
            .unwrap()
            .combine(Reason::new("b").unwrap());
        assert_eq!(reason.lines().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(reason.into_string(), "a\nb");
    }
}
