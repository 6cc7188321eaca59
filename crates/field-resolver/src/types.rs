//! Core types for the resolver

use page_model::ControlSnapshot;
use serde::{Deserialize, Serialize};

/// Resolution strategy enumeration
///
/// The three strategies, in the priority order they are tried:
/// - Identifier: exact `name`/`id` attribute matching
/// - Label: label text containment, following `for`/enclosure
/// - Placeholder: placeholder text containment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveStrategy {
    /// Exact identifier attribute match
    Identifier,

    /// Label text strategy
    Label,

    /// Placeholder text strategy
    Placeholder,
}

impl ResolveStrategy {
    /// Get strategy name as string
    pub fn name(&self) -> &'static str {
        match self {
            ResolveStrategy::Identifier => "identifier",
            ResolveStrategy::Label => "label",
            ResolveStrategy::Placeholder => "placeholder",
        }
    }

    /// Get all strategies in priority order
    pub fn fallback_chain() -> Vec<ResolveStrategy> {
        vec![
            ResolveStrategy::Identifier,
            ResolveStrategy::Label,
            ResolveStrategy::Placeholder,
        ]
    }
}

/// Outcome of resolving one suggestion: the matched control and the
/// strategy that found it.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub control: ControlSnapshot,
    pub strategy: ResolveStrategy,
}
