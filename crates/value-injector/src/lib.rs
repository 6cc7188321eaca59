//! Type-specific value injection.
//!
//! Given a resolved control and a target value, mutates the control with
//! the semantics its kind expects: text overwrites through the native
//! value setter (which fires input/change/blur), checked controls go
//! through native activation so bound handlers fire exactly as a user
//! interaction would. Injection never throws outward; anything that goes
//! wrong is absorbed and reported as not filled.

pub mod errors;
pub mod model;
pub mod runner;

pub use errors::*;
pub use model::*;
pub use runner::*;
