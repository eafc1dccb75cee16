//! Validators that explain their failures
//!
//! A [`Validator`] maps a subject to a [`ValidationResult`](crate::ValidationResult):
//! `Valid`, or `Invalid` with a reason. Two ways of composing them cover the
//! two common policies:
//!
//! - [`and`] / [`ValidatorExt::and`] stop at the first failure and return it.
//! - [`all`] / [`all!`](crate::all!) run everything and report every failure,
//!   one reason per line, which is what a form wants to show its user.
//!
//! Boolean [`Predicate`](crate::predicate::Predicate)s become validators
//! through [`holds`].
//!
//! # Example
//!
//! ```rust
//! use validator_combinators::prelude::*;
//! use validator_combinators::user::{validators::*, User};
//!
//! let first_failure = name_is_not_empty().and(e_mail_contains_at_sign());
//! let every_failure = all![name_is_not_empty(), e_mail_contains_at_sign()];
//!
//! let user = User::new("", 30, "mailmailinator.com");
//! assert_eq!(first_failure.validate(&user).reason(), Some("Name is empty."));
//! assert_eq!(
//!     every_failure.validate(&user).reason(),
//!     Some("Name is empty.\nMissing @-sign in E-Mail.")
//! );
//! ```

mod combinators;
mod ext;
mod trait_def;

pub use combinators::{all, and, holds, All, And, Holds, Named};
pub use ext::ValidatorExt;
pub use trait_def::{BoxedValidator, Validator};
