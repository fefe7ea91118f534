//! # Layer 2: Traversal
//!
//! - [`Collector`]: owns the validated configuration and the [`Session`]
//! - [`Collect`]: the lazy, cycle-safe, deduplicating depth-first walk
//! - [`Pending`]: read-only view of the walk's remaining work

mod collector;
mod cursor;
mod frame;
mod session;

pub use collector::Collector;
pub use cursor::Collect;
pub use frame::Pending;
pub use session::Session;
