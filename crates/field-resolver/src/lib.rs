//! Suggestion-to-control resolution.
//!
//! Maps one suggestion to at most one control using three strategies in
//! strict priority order:
//! 1. Identifier - exact `name`/`id` attribute match
//! 2. Label - label text containment, following the label's target
//! 3. Placeholder - placeholder text containment
//!
//! A miss is a normal outcome, not an error: an unresolved suggestion may
//! resolve on a later pass once the page finishes rendering.

pub mod errors;
pub mod resolver;
pub mod strategies;
pub mod types;

pub use errors::*;
pub use resolver::*;
pub use strategies::*;
pub use types::*;
