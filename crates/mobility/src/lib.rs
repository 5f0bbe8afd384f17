//! Vehicle example (Liskov substitution).
//!
//! Every [`Mover`] answers the same two questions. A bicycle has no engine, so it
//! says so in its status instead of failing; callers never need to know which
//! variant they hold.

pub mod mover;

pub use mover::{Bicycle, Car, Garage, Mover};
