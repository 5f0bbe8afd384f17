//! Storage-backed audit logging (dependency inversion).
//!
//! [`AuditLogger`] depends on the [`Sink`] trait only. The file and database
//! sinks are interchangeable stand-ins: they emit a line, they persist nothing.

pub mod audit;
pub mod clock;
pub mod sink;

pub use audit::AuditLogger;
pub use clock::{Clock, FixedClock, SystemClock};
pub use sink::{DatabaseStorage, FileStorage, Sink};
