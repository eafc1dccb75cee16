//! Zero-cost combinator types for validator composition.
//!
//! These are the concrete types returned by the combinator methods on
//! [`ValidatorExt`](crate::validator::ValidatorExt) and by the free
//! functions in [`validator`](crate::validator). They don't allocate (other
//! than the `Vec` inside [`All`]) and most callers never name them.

mod accumulate;
mod lift;
mod named;
mod short_circuit;

pub use accumulate::{all, All};
pub use lift::{holds, Holds};
pub use named::Named;
pub use short_circuit::{and, And};
