//! Pass loop: resolve and inject every suggestion, sweep again for
//! late-rendering controls.

use std::sync::Arc;

use field_resolver::{FieldResolver, Resolution, ResolverError, SuggestionResolver};
use instafill_core_types::{FillReport, RunId, Suggestion};
use page_model::PagePort;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use value_injector::{inject, InjectOutcome};

use crate::config::FillConfig;
use crate::events::{FillObserver, NoopObserver};

/// Drives repeated resolve+inject sweeps over a suggestion list.
///
/// A run is not cancellable: once started, all configured passes execute.
/// The caller must not start a second run against the same page
/// concurrently; both would race on the same controls.
pub struct FillEngine {
    resolver: Arc<dyn SuggestionResolver>,
    config: FillConfig,
    observer: Arc<dyn FillObserver>,
}

impl FillEngine {
    pub fn new(config: FillConfig) -> Self {
        Self {
            resolver: Arc::new(FieldResolver::new()),
            config,
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn SuggestionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn FillObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run the configured number of passes and return the cumulative
    /// report. Never fails: per-field errors are absorbed and logged.
    pub async fn run(&self, page: &dyn PagePort, suggestions: &[Suggestion]) -> FillReport {
        let run = RunId::new();
        let mut report = FillReport::new(run.clone());

        info!(
            run = %run.0,
            suggestions = suggestions.len(),
            passes = self.config.max_passes,
            "fill run started"
        );
        self.observer.on_run_started(&run, suggestions.len()).await;

        for pass in 1..=self.config.max_passes {
            let filled = self.sweep(&run, page, suggestions).await;
            report.record_pass(filled);
            debug!(run = %run.0, pass, filled, "pass finished");
            self.observer.on_pass_finished(&run, pass, filled).await;

            if pass < self.config.max_passes {
                sleep(self.config.pass_interval).await;
            }
        }

        info!(run = %run.0, filled = report.filled, "fill run finished");
        self.observer.on_run_finished(&report).await;
        report
    }

    /// One sweep over the whole list; returns the pass subtotal.
    async fn sweep(&self, run: &RunId, page: &dyn PagePort, suggestions: &[Suggestion]) -> u32 {
        let mut filled = 0;
        for suggestion in suggestions {
            if suggestion.suggested_value.is_empty() {
                debug!(field = suggestion.display_name(), "skipping suggestion without a value");
                continue;
            }
            match self.apply(page, suggestion).await {
                Ok((resolution, outcome)) => {
                    if outcome.is_some_and(|o| o.filled) {
                        filled += 1;
                    }
                    self.observer
                        .on_field(run, suggestion, resolution.as_ref(), outcome.as_ref())
                        .await;
                }
                Err(err) => {
                    warn!(
                        field = suggestion.display_name(),
                        error = %err,
                        "fill attempt failed"
                    );
                    self.observer.on_field(run, suggestion, None, None).await;
                }
            }
        }
        filled
    }

    async fn apply(
        &self,
        page: &dyn PagePort,
        suggestion: &Suggestion,
    ) -> Result<(Option<Resolution>, Option<InjectOutcome>), ResolverError> {
        let Some(resolution) = self.resolver.resolve(suggestion, page).await? else {
            debug!(field = suggestion.display_name(), "no control matched");
            return Ok((None, None));
        };
        let outcome = inject(page, &resolution.control, &suggestion.suggested_value).await;
        Ok((Some(resolution), Some(outcome)))
    }
}

impl Default for FillEngine {
    fn default() -> Self {
        Self::new(FillConfig::default())
    }
}
