//! Typed field activity and trigger policy.

/// User activity on a field, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldActivity {
    /// The field gained focus.
    Focus,
    /// A key was released while the field had focus.
    KeyUp,
    /// The field's value or selection changed.
    Change,
    /// The field lost focus.
    Blur,
}

/// When the engine revalidates in response to activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Revalidate on focus, keyup and change; dismiss assists on blur.
    #[default]
    Live,
    /// Validate only through the submission gate. Blur still dismisses
    /// assists, and the `always` option forces live behavior even here.
    SubmitOnly,
}

/// Result of the submission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field validated; the host may carry out the submit action.
    Proceed,
    /// At least one field failed; the submit action must not run.
    Blocked,
}

impl SubmitOutcome {
    /// Whether the submit action may run.
    pub fn is_allowed(self) -> bool {
        matches!(self, SubmitOutcome::Proceed)
    }
}
