//! Form context assembly for the upstream suggestion service.

use serde::{Deserialize, Serialize};

use crate::control::ControlKind;
use crate::errors::PageError;
use crate::ports::PagePort;

/// Likely questions to collect from a page, at most.
const MAX_CONTEXT_LINES: usize = 20;

/// What the suggestion service consumes: page title, the likely question
/// texts, and one identity hint per input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormContext {
    pub title: String,
    /// Newline-joined label texts, longest-signal first (document order).
    pub context: String,
    /// Placeholder-or-name per input control.
    pub inputs: Vec<String>,
}

/// Assemble the form context from a live page.
///
/// Label texts shorter than 4 or longer than 199 chars are dropped as
/// unlikely questions; selects are excluded from the input hints.
pub async fn page_context(page: &dyn PagePort) -> Result<FormContext, PageError> {
    let title = page.title().await?;

    let context = page
        .labels()
        .await?
        .into_iter()
        .map(|l| l.text.trim().to_string())
        .filter(|t| t.len() > 3 && t.len() < 200)
        .take(MAX_CONTEXT_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    let inputs = page
        .controls()
        .await?
        .into_iter()
        .filter(|c| c.kind != ControlKind::Select)
        .filter_map(|c| {
            c.placeholder
                .filter(|p| !p.is_empty())
                .or(c.name)
                .filter(|n| !n.is_empty())
        })
        .collect();

    Ok(FormContext {
        title,
        context,
        inputs,
    })
}
