//! Error types for the resolver

use page_model::PageError;
use thiserror::Error;

/// Resolver error enumeration
#[derive(Debug, Error, Clone)]
pub enum ResolverError {
    /// The page could not be read while a strategy ran
    #[error("failed to read page: {0}")]
    Page(#[from] PageError),
}
