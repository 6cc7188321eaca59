use page_model::PageError;
use thiserror::Error;

/// Injection error enumeration; absorbed before leaving the crate.
#[derive(Debug, Error, Clone)]
pub enum InjectError {
    /// Reading or writing the control failed mid-operation
    #[error("failed to act on control: {0}")]
    Page(#[from] PageError),
}
