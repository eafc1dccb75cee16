//! Validating users with both validator flavors
//!
//! Run with: cargo run --example user_validation --features tracing

use validator_combinators::predicate::Predicate;
use validator_combinators::user::{predicates, validators, User};
use validator_combinators::{all, Validator};

// Yes or no
fn is_complete() -> impl Predicate<User> {
    use validator_combinators::predicate::PredicateExt;

    predicates::name_is_not_empty().and(predicates::e_mail_contains_at_sign())
}

// First failure wins
fn first_failure() -> impl Validator<User> {
    use validator_combinators::validator::ValidatorExt;

    validators::name_is_not_empty()
        .named("name")
        .and(validators::e_mail_contains_at_sign().named("e-mail"))
}

// Every failure, one per line
fn every_failure() -> impl Validator<User> {
    use validator_combinators::validator::ValidatorExt;

    all![
        validators::name_is_not_empty().named("name"),
        validators::e_mail_contains_at_sign().named("e-mail"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let users = [
        User::new("Gregor", 30, "mail@mailinator.com"),
        User::new("", 30, "mail@mailinator.com"),
        User::new("Gregor", 30, "mailmailinator.com"),
        User::new("", 30, "mailmailinator.com"),
    ];

    let is_complete = is_complete();
    let first_failure = first_failure();
    let every_failure = every_failure();

    for user in &users {
        tracing::info!(?user, complete = is_complete.check(user), "checking user");

        match first_failure.validate(user).reason() {
            None => tracing::info!("and: valid"),
            Some(reason) => tracing::warn!(%reason, "and: invalid"),
        }

        match every_failure.validate(user).into_result() {
            Ok(()) => tracing::info!("all: valid"),
            Err(reasons) => {
                for reason in reasons.lines() {
                    tracing::warn!(%reason, "all: invalid");
                }
            }
        }
    }
}
