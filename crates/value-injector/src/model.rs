/// How the injector acted on a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectAction {
    /// A new value went through the native setter
    WroteValue,
    /// The control was activated natively (checkbox/radio)
    Clicked,
    /// Current state already matched the target
    AlreadySet,
    /// No option or group member matched the target
    NoMatch,
    /// An internal failure was absorbed
    Failed,
}

impl InjectAction {
    pub fn name(&self) -> &'static str {
        match self {
            InjectAction::WroteValue => "wrote-value",
            InjectAction::Clicked => "clicked",
            InjectAction::AlreadySet => "already-set",
            InjectAction::NoMatch => "no-match",
            InjectAction::Failed => "failed",
        }
    }
}

/// Outcome of one injection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectOutcome {
    /// Whether the control's state changed
    pub filled: bool,
    pub action: InjectAction,
}

impl InjectOutcome {
    pub fn filled(action: InjectAction) -> Self {
        Self {
            filled: true,
            action,
        }
    }

    pub fn skipped(action: InjectAction) -> Self {
        Self {
            filled: false,
            action,
        }
    }
}
