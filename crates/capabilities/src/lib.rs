//! Animal example (interface segregation).
//!
//! Walking, swimming and flying are separate traits. An animal implements the
//! ones it can actually do, so asking a fish to fly does not compile:
//!
//! ```compile_fail
//! use solid_capabilities::{Fish, Fly};
//!
//! let _ = Fish.fly();
//! ```
//!
//! ```
//! use solid_capabilities::{Fish, swim_show};
//!
//! assert!(!swim_show(&Fish).is_empty());
//! ```

pub mod animal;
pub mod capability;

pub use animal::{Duck, Fish};
pub use capability::{Fly, Swim, Walk, fly_show, swim_show, walk_show};
