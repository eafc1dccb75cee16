//! # Validator combinators
//!
//! Build validations out of small, single-purpose checks and compose them.
//!
//! Two flavors are provided:
//!
//! - **Boolean** ([`predicate`]): a [`Predicate`](predicate::Predicate)
//!   answers yes or no. Compose with short-circuit `and` / `or`.
//! - **Result-typed** ([`validator`]): a [`Validator`] returns a
//!   [`ValidationResult`], either `Valid` or `Invalid` with a reason.
//!   Compose with `and` (first failure wins) or [`all`](validator::all)
//!   (every failure reported, one reason per line).
//!
//! Validators are pure and `Send + Sync`, so a composed validator can be
//! built once and reused for any number of subjects, from any thread.
//!
//! ## Quick Example
//!
//! ```rust
//! use validator_combinators::prelude::*;
//! use validator_combinators::user::{validators::*, User};
//!
//! let stop_at_first = name_is_not_empty().and(e_mail_contains_at_sign());
//! let report_every = all![name_is_not_empty(), e_mail_contains_at_sign()];
//!
//! let gregor = User::new("Gregor", 30, "mail@mailinator.com");
//! assert_eq!(stop_at_first.validate(&gregor), ValidationResult::valid());
//!
//! let broken = User::new("", 30, "mailmailinator.com");
//! assert_eq!(
//!     stop_at_first.validate(&broken),
//!     ValidationResult::invalid("Name is empty.")
//! );
//! assert_eq!(
//!     report_every.validate(&broken),
//!     ValidationResult::invalid("Name is empty.\nMissing @-sign in E-Mail.")
//! );
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: debug events from [`Named`](validator::Named) and trace
//!   events from [`All`](validator::All).
//! - `serde`: `Serialize` / `Deserialize` for [`ValidationResult`],
//!   [`Reason`](result::Reason) and [`User`](user::User).
//! - `proptest`: `Arbitrary` impls for property-based tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod monoid;
pub mod predicate;
pub mod result;
pub mod semigroup;
pub mod testing;
pub mod user;
pub mod validator;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use monoid::Monoid;
pub use result::ValidationResult;
pub use semigroup::Semigroup;
pub use validator::Validator;

/// Prelude module for convenient imports
///
/// Brings in the result-typed flavor. The boolean flavor lives in
/// [`predicate`](crate::predicate); import it from there so its `and` does
/// not compete with [`ValidatorExt::and`](crate::validator::ValidatorExt::and).
pub mod prelude {
    pub use crate::all;
    pub use crate::result::{Reason, ValidationResult};
    pub use crate::validator::{all, and, holds, BoxedValidator, Validator, ValidatorExt};
}
