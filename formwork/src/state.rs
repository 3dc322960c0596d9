//! Per-field validation state.

/// Validation state for one logical field: the display label plus the error
/// messages accumulated by the most recent validation pass.
///
/// The engine owns one `FieldState` per registered field. Each validation
/// clears the messages and repopulates them in rule order; presenters read
/// the same instance by reference and never mutate it.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    label: String,
    messages: Vec<String>,
}

impl FieldState {
    /// Create a state with no label and no messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display label. Empty input is ignored, so a field whose
    /// label disappears keeps the last one it had.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !label.is_empty() {
            self.label = label;
        }
    }

    /// The display label, empty when none was ever set.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Append one error message.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Drop all accumulated messages. The label survives.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Whether the last validation produced any messages.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Messages from the last validation, in rule order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
