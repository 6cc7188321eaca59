//! instafill CLI support library
//!
//! Page-spec fixtures and run settings; exposed for integration testing.

pub mod page_spec;
pub mod settings;
