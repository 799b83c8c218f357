//! Port traits defining external boundaries.
//!
//! The worker only ever talks to the outside world through a [`LineSink`].
//! Implementations live in `src/adapters/`.

pub mod sink;

pub use sink::LineSink;
