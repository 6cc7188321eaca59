use uuid::Uuid;

/// Identifier for one fill run, stamped on logs and the final report.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RunId(pub String);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque handle to one live control, assigned by the page implementation.
///
/// Stable for the lifetime of the control; a handle whose control left the
/// page resolves to `ControlGone` on the next access.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ControlId(pub String);

/// One externally supplied field suggestion.
///
/// Produced by the upstream suggestion service before a run starts and
/// treated as read-only input. The wire format is camelCase JSON;
/// `fieldName` is accepted as an alias of `fieldIdentifier` because that is
/// what the service historically emitted.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-full", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Suggestion {
    #[cfg_attr(feature = "serde-full", serde(default, alias = "fieldName"))]
    pub field_identifier: Option<String>,
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub label: Option<String>,
    /// The value to write. A suggestion with an empty value is skipped
    /// without attempting resolution.
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub suggested_value: String,
    /// Free-text rationale from the upstream service. Diagnostic only,
    /// never used for matching.
    #[cfg_attr(feature = "serde-full", serde(default))]
    pub reasoning: Option<String>,
}

impl Suggestion {
    pub fn new(field_identifier: Option<&str>, label: Option<&str>, value: &str) -> Self {
        Self {
            field_identifier: field_identifier.map(str::to_string),
            label: label.map(str::to_string),
            suggested_value: value.to_string(),
            reasoning: None,
        }
    }

    /// Best available name for logs.
    pub fn display_name(&self) -> &str {
        self.field_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.label.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("<unnamed>")
    }
}

/// Aggregate outcome of a fill run: how many fields changed, per pass and
/// in total.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FillReport {
    pub run: RunId,
    /// Cumulative count of fields successfully changed across all passes.
    pub filled: u32,
    /// Per-pass subtotals, in pass order.
    pub pass_totals: Vec<u32>,
}

impl FillReport {
    pub fn new(run: RunId) -> Self {
        Self {
            run,
            filled: 0,
            pass_totals: Vec::new(),
        }
    }

    /// Record one finished pass.
    pub fn record_pass(&mut self, subtotal: u32) {
        self.pass_totals.push(subtotal);
        self.filled += subtotal;
    }

    pub fn passes(&self) -> u32 {
        self.pass_totals.len() as u32
    }
}
