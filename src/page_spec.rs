//! JSON page fixtures the CLI drives runs against.

use anyhow::{Context, Result};
use instafill_core_types::ControlId;
use page_model::{ControlKind, ControlSeed, InMemoryPage};
use serde::Deserialize;

/// JSON description of a page: controls and labels in document order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub controls: Vec<ControlEntry>,
    #[serde(default)]
    pub labels: Vec<LabelEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlEntry {
    pub kind: ControlKind,
    #[serde(default)]
    pub name: Option<String>,
    /// The page-side `id` attribute
    #[serde(default, rename = "id")]
    pub dom_id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelEntry {
    pub text: String,
    /// `for` relationship: a control `id` attribute
    #[serde(default, rename = "for")]
    pub for_id: Option<String>,
    /// Enclosed control, as an index into `controls`
    #[serde(default)]
    pub encloses: Option<usize>,
}

impl PageSpec {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to parse page spec")
    }

    /// Materialize the spec as an in-memory page.
    pub fn build(&self) -> InMemoryPage {
        let page = InMemoryPage::with_title(&self.title);
        let mut ids: Vec<ControlId> = Vec::with_capacity(self.controls.len());

        for entry in &self.controls {
            let mut seed = ControlSeed::new(entry.kind)
                .with_value(&entry.value)
                .checked(entry.checked);
            if let Some(name) = &entry.name {
                seed = seed.with_name(name);
            }
            if let Some(dom_id) = &entry.dom_id {
                seed = seed.with_dom_id(dom_id);
            }
            if let Some(label) = &entry.label {
                seed = seed.with_label(label);
            }
            if let Some(placeholder) = &entry.placeholder {
                seed = seed.with_placeholder(placeholder);
            }
            for option in &entry.options {
                seed = seed.with_option(&option.value, &option.text);
            }
            ids.push(page.insert(seed));
        }

        for label in &self.labels {
            let encloses = label.encloses.and_then(|i| ids.get(i).cloned());
            page.insert_label(&label.text, label.for_id.as_deref(), encloses);
        }

        page
    }
}
