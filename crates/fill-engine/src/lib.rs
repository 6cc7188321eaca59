//! Retry scheduler for fill runs.
//!
//! Drives repeated resolve+inject sweeps over an ordered suggestion list.
//! Controls that render after the initial page state get caught by a later
//! pass; the pause between passes is configuration, not a constant, so
//! tests can run the whole schedule under a paused clock.

pub mod config;
pub mod engine;
pub mod events;

pub use config::FillConfig;
pub use engine::FillEngine;
pub use events::{FillObserver, NoopObserver};
