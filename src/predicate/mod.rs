//! Boolean validators
//!
//! The simplest flavor of validator: a [`Predicate`] answers yes or no for a
//! subject. Predicates compose with short-circuit logical operators (`and`,
//! `or`) and can be inverted with `not`.
//!
//! A predicate says *whether* a subject is acceptable but not *why* it is
//! not. Lift it into a [`Validator`](crate::Validator) with
//! [`holds`](crate::validator::holds) to attach a failure reason.
//!
//! # Example
//!
//! ```rust
//! use validator_combinators::predicate::*;
//! use validator_combinators::user::{predicates, User};
//!
//! let check = predicates::name_is_not_empty().and(predicates::e_mail_contains_at_sign());
//!
//! assert!(check.check(&User::new("Gregor", 30, "mail@mailinator.com")));
//! assert!(!check.check(&User::new("  ", 30, "mail@mailinator.com")));
//! ```

mod combinators;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
