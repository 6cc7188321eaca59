use async_trait::async_trait;
use instafill_core_types::ControlId;

use crate::control::{ControlSnapshot, LabelView};
use crate::errors::PageError;

/// The engine's only window onto the host page.
///
/// The page owns the controls; the engine only reads identity/options and
/// writes value/checked/selected state. Implementations must keep
/// `controls()` and `labels()` in document order, since resolution picks
/// the first match.
#[async_trait]
pub trait PagePort: Send + Sync {
    /// Page title, as the suggestion service sees it.
    async fn title(&self) -> Result<String, PageError>;

    /// All interactive controls currently on the page, document order.
    async fn controls(&self) -> Result<Vec<ControlSnapshot>, PageError>;

    /// All label elements currently on the page, document order.
    async fn labels(&self) -> Result<Vec<LabelView>, PageError>;

    /// Fresh snapshot of a single control.
    async fn control(&self, id: &ControlId) -> Result<ControlSnapshot, PageError>;

    /// Write through the page's native value setter, then dispatch
    /// `input`, `change` and `blur` in that order, all bubbling.
    ///
    /// The ordering is a correctness requirement: observers that derive
    /// shadow state from these events must end up consistent with the
    /// control, or they will revert the write on their next render.
    async fn write_value(&self, id: &ControlId, value: &str) -> Result<(), PageError>;

    /// Native activation, as a user click would be seen by the page:
    /// toggles a checkbox, selects a radio within its group.
    async fn click(&self, id: &ControlId) -> Result<(), PageError>;
}
