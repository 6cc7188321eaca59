use thiserror::Error;

/// Page access error enumeration
#[derive(Debug, Error, Clone)]
pub enum PageError {
    /// The referenced control is no longer on the page
    #[error("control not found: {0}")]
    ControlGone(String),

    /// The operation does not apply to this control kind
    #[error("operation not supported for {kind} control: {reason}")]
    Unsupported { kind: String, reason: String },

    /// Page access failed
    #[error("page error: {0}")]
    Internal(String),
}
