//! Resolution strategies
//!
//! Three strategies in priority order:
//! 1. Identifier - exact `name`/`id` attribute match on the cleaned identifier
//! 2. Label - first label whose text contains the suggestion label
//! 3. Placeholder - first control whose placeholder contains the label or identifier

use async_trait::async_trait;
use instafill_core_types::Suggestion;
use page_model::{ControlSnapshot, PagePort};
use tracing::debug;

use crate::errors::ResolverError;
use crate::types::ResolveStrategy;

/// Strategy trait for mapping one suggestion to a control.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Attempt to locate a control using this strategy
    async fn locate(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<ControlSnapshot>, ResolverError>;

    /// Get strategy type
    fn strategy_type(&self) -> ResolveStrategy;

    /// Get strategy name
    fn name(&self) -> &'static str {
        self.strategy_type().name()
    }
}

/// Exact identifier matching strategy
pub struct IdentifierStrategy;

#[async_trait]
impl Strategy for IdentifierStrategy {
    async fn locate(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<ControlSnapshot>, ResolverError> {
        let Some(raw) = suggestion.field_identifier.as_deref() else {
            return Ok(None);
        };
        let ident = clean_field_identifier(raw);
        if ident.is_empty() {
            return Ok(None);
        }

        debug!(identifier = %ident, "identifier resolution");
        let controls = page.controls().await?;
        Ok(controls.into_iter().find(|c| c.matches_identifier(&ident)))
    }

    fn strategy_type(&self) -> ResolveStrategy {
        ResolveStrategy::Identifier
    }
}

/// Label text containment strategy
pub struct LabelStrategy;

#[async_trait]
impl Strategy for LabelStrategy {
    async fn locate(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<ControlSnapshot>, ResolverError> {
        let Some(needle) = suggestion.label.as_deref().filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let needle = needle.to_lowercase();

        let labels = page.labels().await?;
        let Some(hit) = labels
            .iter()
            .find(|l| l.text.to_lowercase().contains(&needle))
        else {
            return Ok(None);
        };

        debug!(label = %hit.text, "label resolution");
        // The first matching label decides; a dangling target means no match.
        let controls = page.controls().await?;
        if let Some(for_id) = &hit.for_id {
            return Ok(controls
                .into_iter()
                .find(|c| c.dom_id.as_deref() == Some(for_id.as_str())));
        }
        if let Some(target) = &hit.encloses {
            return Ok(controls.into_iter().find(|c| &c.id == target));
        }
        Ok(None)
    }

    fn strategy_type(&self) -> ResolveStrategy {
        ResolveStrategy::Label
    }
}

/// Placeholder text containment strategy
pub struct PlaceholderStrategy;

#[async_trait]
impl Strategy for PlaceholderStrategy {
    async fn locate(
        &self,
        suggestion: &Suggestion,
        page: &dyn PagePort,
    ) -> Result<Option<ControlSnapshot>, ResolverError> {
        // The label is the better signal; the raw identifier is the fallback.
        let needle = suggestion
            .label
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| suggestion.field_identifier.as_deref().filter(|s| !s.is_empty()));
        let Some(needle) = needle else {
            return Ok(None);
        };
        let needle = needle.to_lowercase();

        debug!(needle = %needle, "placeholder resolution");
        let controls = page.controls().await?;
        Ok(controls.into_iter().find(|c| {
            c.placeholder
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(&needle))
        }))
    }

    fn strategy_type(&self) -> ResolveStrategy {
        ResolveStrategy::Placeholder
    }
}

/// Strip the quoting artifacts the upstream service leaves on field
/// identifiers (e.g. `name='email'` or `"email"` become `email`).
pub fn clean_field_identifier(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix("name=").unwrap_or(trimmed);
    stripped.trim_matches(|c| c == '\'' || c == '"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_identifier_strips_artifacts() {
        assert_eq!(clean_field_identifier("email"), "email");
        assert_eq!(clean_field_identifier("name='email'"), "email");
        assert_eq!(clean_field_identifier("name=\"email\""), "email");
        assert_eq!(clean_field_identifier("\"email\""), "email");
        assert_eq!(clean_field_identifier("  email  "), "email");
        assert_eq!(clean_field_identifier("name="), "");
    }

    #[test]
    fn clean_identifier_keeps_inner_quotes_only_trimmed() {
        assert_eq!(clean_field_identifier("user's_field"), "user's_field");
    }
}
