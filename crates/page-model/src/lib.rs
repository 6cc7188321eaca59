//! Control model and host-page abstraction.
//!
//! The engine never touches a page directly; everything goes through
//! [`PagePort`], which exposes controls and labels as snapshots and offers
//! exactly two mutations: a native value write (followed by the
//! input/change/blur event sequence) and a native activation click.
//! [`InMemoryPage`] is the reference implementation backing tests and the
//! CLI fixtures.

pub mod context;
pub mod control;
pub mod errors;
pub mod memory;
pub mod ports;

pub use context::*;
pub use control::*;
pub use errors::*;
pub use memory::*;
pub use ports::*;
