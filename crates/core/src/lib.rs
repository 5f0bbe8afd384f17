//! `solid-core` — shared building blocks for the capability examples.
//!
//! Pure primitives only: the error model, the value-object marker and the
//! line-oriented console every driver and sink writes through.

pub mod console;
pub mod error;
pub mod value_object;

pub use console::{Console, render_line};
pub use error::{DesignError, DesignResult};
pub use value_object::ValueObject;
