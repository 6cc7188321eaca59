//! Core types for the control model

use instafill_core_types::ControlId;
use serde::{Deserialize, Serialize};

/// Interactive control kinds the engine can fill.
///
/// A radio *group* is the set of `Radio` controls sharing a `name`; each
/// member is modelled as its own control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    Text,
    Textarea,
    Checkbox,
    Radio,
    Select,
}

impl ControlKind {
    /// Get kind name as string
    pub fn name(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Textarea => "textarea",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::Select => "select",
        }
    }

    /// Whether the kind holds free text (as opposed to a checked/selected state).
    pub fn is_text_entry(&self) -> bool {
        matches!(self, ControlKind::Text | ControlKind::Textarea)
    }
}

/// One choice of a select control, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOption {
    /// Underlying submit value
    pub value: String,
    /// Human-visible display text
    pub text: String,
}

impl ControlOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Point-in-time read of one control: identity plus current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub id: ControlId,
    pub kind: ControlKind,

    /// `name` attribute; doubles as the group key for radios
    pub name: Option<String>,
    /// `id` attribute on the page (distinct from the engine handle)
    pub dom_id: Option<String>,
    /// Associated label text, if the page links one
    pub label: Option<String>,
    pub placeholder: Option<String>,

    /// Current text value (text controls) or selected option value (select)
    pub value: String,
    /// Checked state (checkbox and radio)
    pub checked: bool,
    /// Ordered options; present only for selects
    pub options: Vec<ControlOption>,
}

impl ControlSnapshot {
    /// Exact `name`-or-`id` identity match.
    pub fn matches_identifier(&self, ident: &str) -> bool {
        self.name.as_deref() == Some(ident) || self.dom_id.as_deref() == Some(ident)
    }

    /// The option currently selected, if the value maps to one.
    pub fn selected_option(&self) -> Option<&ControlOption> {
        self.options.iter().find(|o| o.value == self.value)
    }
}

/// One label element in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelView {
    pub text: String,
    /// `for` relationship: names a control's `dom_id`
    pub for_id: Option<String>,
    /// Nearest control enclosed by the label element
    pub encloses: Option<ControlId>,
}

/// Event kinds a page emits after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageEventKind {
    Input,
    Change,
    Blur,
    Click,
}

impl PageEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            PageEventKind::Input => "input",
            PageEventKind::Change => "change",
            PageEventKind::Blur => "blur",
            PageEventKind::Click => "click",
        }
    }
}

/// One event dispatched by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEvent {
    pub control: ControlId,
    pub kind: PageEventKind,
    pub bubbles: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(ControlKind::Text.name(), "text");
        assert_eq!(ControlKind::Select.name(), "select");
        assert!(ControlKind::Textarea.is_text_entry());
        assert!(!ControlKind::Checkbox.is_text_entry());
    }

    #[test]
    fn identifier_match_covers_name_and_dom_id() {
        let snap = ControlSnapshot {
            id: ControlId("ctl-0".into()),
            kind: ControlKind::Text,
            name: Some("email".into()),
            dom_id: Some("email-field".into()),
            label: None,
            placeholder: None,
            value: String::new(),
            checked: false,
            options: Vec::new(),
        };
        assert!(snap.matches_identifier("email"));
        assert!(snap.matches_identifier("email-field"));
        assert!(!snap.matches_identifier("Email"));
    }
}
