//! Suggestion resolver with strategy chain orchestration

use async_trait::async_trait;
use instafill_core_types::Suggestion;
use page_model::PagePort;
use tracing::debug;

use crate::errors::ResolverError;
use crate::strategies::{IdentifierStrategy, LabelStrategy, PlaceholderStrategy, Strategy};
use crate::types::{Resolution, ResolveStrategy};

/// Suggestion resolver trait
#[async_trait]
pub trait SuggestionResolver: Send + Sync {
    /// Resolve a suggestion to at most one control.
    ///
    /// `Ok(None)` is a miss, not a fault - the suggestion is skipped for
    /// this pass and may resolve on a later one.
    async fn resolve(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<Resolution>, ResolverError>;
}

/// Default resolver: strict-priority strategy chain, first hit wins.
pub struct FieldResolver {
    identifier: IdentifierStrategy,
    label: LabelStrategy,
    placeholder: PlaceholderStrategy,
}

impl FieldResolver {
    pub fn new() -> Self {
        Self {
            identifier: IdentifierStrategy,
            label: LabelStrategy,
            placeholder: PlaceholderStrategy,
        }
    }

    /// Get strategy by type
    fn strategy(&self, strategy_type: ResolveStrategy) -> &dyn Strategy {
        match strategy_type {
            ResolveStrategy::Identifier => &self.identifier,
            ResolveStrategy::Label => &self.label,
            ResolveStrategy::Placeholder => &self.placeholder,
        }
    }
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionResolver for FieldResolver {
    async fn resolve(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<Resolution>, ResolverError> {
        for strategy_type in ResolveStrategy::fallback_chain() {
            let strategy = self.strategy(strategy_type);

            if let Some(control) = strategy.locate(suggestion, page).await? {
                debug!(
                    field = suggestion.display_name(),
                    strategy = strategy.name(),
                    control = %control.id.0,
                    "control resolved"
                );
                return Ok(Some(Resolution {
                    control,
                    strategy: strategy_type,
                }));
            }
            debug!(
                field = suggestion.display_name(),
                strategy = strategy.name(),
                "strategy returned no match"
            );
        }

        Ok(None)
    }
}
