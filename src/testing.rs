//! Testing utilities for validators
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult) and,
//! behind the `proptest` feature, `proptest::arbitrary::Arbitrary` impls for
//! `Reason`, `ValidationResult` and `User`.
//!
//! # Examples
//!
//! ```rust
//! use validator_combinators::{assert_invalid, assert_reason, assert_valid, ValidationResult};
//!
//! assert_valid!(ValidationResult::valid());
//! assert_invalid!(ValidationResult::invalid("Name is empty."));
//! assert_reason!(ValidationResult::invalid("Name is empty."), "Name is empty.");
//! ```

/// Assert that a result is `Valid`.
///
/// Panics with the failure reason otherwise.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            $crate::ValidationResult::Valid => {}
            $crate::ValidationResult::Invalid(reason) => {
                panic!("Expected Valid, got Invalid: {:?}", reason.as_str());
            }
        }
    };
}

/// Assert that a result is `Invalid`.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {
        match $result {
            $crate::ValidationResult::Invalid(_) => {}
            $crate::ValidationResult::Valid => {
                panic!("Expected Invalid, got Valid");
            }
        }
    };
}

/// Assert that a result is `Invalid` with exactly the given reason.
///
/// ```rust
/// use validator_combinators::{assert_reason, Semigroup, ValidationResult};
///
/// let result = ValidationResult::invalid("a").combine(ValidationResult::invalid("b"));
/// assert_reason!(result, "a\nb");
/// ```
#[macro_export]
macro_rules! assert_reason {
    ($result:expr, $expected:expr) => {
        match $result {
            $crate::ValidationResult::Invalid(reason) => {
                assert_eq!(reason.as_str(), $expected);
            }
            $crate::ValidationResult::Valid => {
                panic!("Expected Invalid with reason {:?}, got Valid", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::result::Reason;
    use crate::user::User;
    use crate::ValidationResult;

    impl Arbitrary for Reason {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            "[^\n]{1,32}"
                .prop_filter_map("reason must not be empty", |s| Reason::new(s).ok())
                .boxed()
        }
    }

    impl Arbitrary for ValidationResult {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                Just(ValidationResult::Valid),
                any::<Reason>().prop_map(ValidationResult::Invalid),
            ]
            .boxed()
        }
    }

    impl Arbitrary for User {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (
                prop_oneof![Just(String::new()), "[ \t]{1,4}", "[A-Za-z ]{1,16}"],
                0u32..130,
                prop_oneof!["[a-z]{1,8}@[a-z]{1,8}\\.com", "[a-z.]{0,16}"],
            )
                .prop_map(|(name, age, email)| User::new(name, age, email))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ValidationResult;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(ValidationResult::valid());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(ValidationResult::invalid("error"));
    }

    #[test]
    fn assert_reason_macro() {
        assert_reason!(ValidationResult::invalid("error"), "error");
    }

    #[test]
    #[should_panic(expected = "Expected Valid, got Invalid")]
    fn assert_valid_panics_on_invalid() {
        assert_valid!(ValidationResult::invalid("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Invalid, got Valid")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(ValidationResult::valid());
    }

    #[test]
    #[should_panic(expected = "Expected Invalid with reason")]
    fn assert_reason_panics_on_valid() {
        assert_reason!(ValidationResult::valid(), "error");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::user::User;
        use crate::ValidationResult;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_results_keep_reason_invariant(result in any::<ValidationResult>()) {
                match result.reason() {
                    Some(reason) => prop_assert!(!reason.is_empty()),
                    None => prop_assert!(result.is_valid()),
                }
            }

            #[test]
            fn arbitrary_users_are_well_formed(user in any::<User>()) {
                prop_assert!(user.age() < 130);
            }
        }
    }
}
