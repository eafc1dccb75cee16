//! The `User` subject and its stock checks
//!
//! A [`User`] is the record the stock validators look at. The checks come in
//! both flavors: [`predicates`] answer yes or no, [`validators`] say what is
//! wrong.
//!
//! # Example
//!
//! ```
//! use validator_combinators::prelude::*;
//! use validator_combinators::user::{validators::*, User};
//!
//! let validation = name_is_not_empty().and(e_mail_contains_at_sign());
//!
//! let gregor = User::new("Gregor", 30, "mail@mailinator.com");
//! assert_eq!(validation.validate(&gregor), ValidationResult::valid());
//!
//! let nameless = User::new("", 30, "mail@mailinator.com");
//! assert_eq!(validation.validate(&nameless), ValidationResult::invalid("Name is empty."));
//! ```

/// Reason reported when the name is blank.
pub const NAME_IS_EMPTY: &str = "Name is empty.";

/// Reason reported when the e-mail address has no `@`.
pub const MISSING_AT_SIGN: &str = "Missing @-sign in E-Mail.";

/// An immutable user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    name: String,
    age: u32,
    email: String,
}

impl User {
    /// Create a user.
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        User {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// The user's name, untrimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The user's e-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }
}

fn has_name(user: &User) -> bool {
    !user.name.trim().is_empty()
}

fn has_at_sign(user: &User) -> bool {
    user.email.contains('@')
}

/// Boolean checks on a [`User`].
pub mod predicates {
    use super::User;
    use crate::predicate::Predicate;

    /// Holds when the name contains something other than whitespace.
    pub fn name_is_not_empty() -> impl Predicate<User> + Copy {
        super::has_name
    }

    /// Holds when the e-mail address contains `@`.
    pub fn e_mail_contains_at_sign() -> impl Predicate<User> + Copy {
        super::has_at_sign
    }
}

/// Checks on a [`User`] that report why they failed.
pub mod validators {
    use super::{User, MISSING_AT_SIGN, NAME_IS_EMPTY};
    use crate::validator::{holds, Validator};

    /// Fails with [`NAME_IS_EMPTY`] when the name is blank.
    pub fn name_is_not_empty() -> impl Validator<User> + Clone {
        holds(super::predicates::name_is_not_empty(), NAME_IS_EMPTY)
    }

    /// Fails with [`MISSING_AT_SIGN`] when the e-mail has no `@`.
    pub fn e_mail_contains_at_sign() -> impl Validator<User> + Clone {
        holds(super::predicates::e_mail_contains_at_sign(), MISSING_AT_SIGN)
    }
}
