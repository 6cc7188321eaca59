use async_trait::async_trait;
use field_resolver::Resolution;
use instafill_core_types::{FillReport, RunId, Suggestion};
use value_injector::InjectOutcome;

/// Progress callbacks for one fill run.
///
/// Observers receive outcomes, never control flow; every method defaults
/// to a no-op.
#[async_trait]
pub trait FillObserver: Send + Sync {
    async fn on_run_started(&self, _run: &RunId, _suggestions: usize) {}

    /// One suggestion processed: its resolution (if any) and the injection
    /// outcome (absent on a resolution miss).
    async fn on_field(
        &self,
        _run: &RunId,
        _suggestion: &Suggestion,
        _resolution: Option<&Resolution>,
        _outcome: Option<&InjectOutcome>,
    ) {
    }

    async fn on_pass_finished(&self, _run: &RunId, _pass: u32, _filled: u32) {}

    async fn on_run_finished(&self, _report: &FillReport) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

#[async_trait]
impl FillObserver for NoopObserver {}
