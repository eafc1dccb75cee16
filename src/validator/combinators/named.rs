//! Named combinator - attach a label for log events.

use std::borrow::Cow;

use crate::validator::trait_def::Validator;
use crate::ValidationResult;

/// A validator carrying a human-readable name.
///
/// With the `tracing` feature enabled, each evaluation runs inside a
/// `validate` debug span tagged with the name and emits a debug event with
/// the outcome. Without it, `Named` only forwards to the inner validator.
///
/// Created by [`ValidatorExt::named`](crate::validator::ValidatorExt::named).
#[derive(Clone, Debug)]
pub struct Named<V> {
    pub(crate) inner: V,
    pub(crate) name: Cow<'static, str>,
}

impl<V> Named<V> {
    /// The label given to this validator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unwrap the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T: ?Sized, V: Validator<T>> Validator<T> for Named<V> {
    fn validate(&self, subject: &T) -> ValidationResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("validate", validator = %self.name).entered();

        let result = self.inner.validate(subject);

        #[cfg(feature = "tracing")]
        log_outcome(&self.name, &result);

        result
    }
}

#[cfg(feature = "tracing")]
fn log_outcome(name: &str, result: &ValidationResult) {
    match result {
        ValidationResult::Valid => tracing::debug!(validator = %name, "passed"),
        ValidationResult::Invalid(reason) => tracing::debug!(validator = %name, %reason, "failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{holds, ValidatorExt};

    #[test]
    fn forwards_to_inner() {
        let v = holds(|n: &i32| *n > 0, "not positive").named("positive");
        assert_eq!(v.name(), "positive");
        assert_eq!(v.validate(&1), ValidationResult::valid());
        assert_eq!(v.validate(&0), ValidationResult::invalid("not positive"));
    }

    #[test]
    fn into_inner_keeps_behavior() {
        let v = holds(|n: &i32| *n > 0, "not positive")
            .named("positive")
            .into_inner();
        assert_eq!(v.validate(&0), ValidationResult::invalid("not positive"));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn logs_outcome_with_name() {
            let v = holds(|n: &i32| *n > 0, "not positive").named("positive");
            let _ = v.validate(&1);
            let _ = v.validate(&-1);

            assert!(logs_contain("passed"));
            assert!(logs_contain("failed"));
            assert!(logs_contain("positive"));
            assert!(logs_contain("not positive"));
        }
    }
}
