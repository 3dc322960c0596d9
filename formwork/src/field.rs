//! Field kinds and the capability surface the engine validates through.

use std::fmt;

use crate::config::RuleSpec;

/// The control kinds the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Number,
    Email,
    Tel,
    Text,
    Password,
    Radio,
    Checkbox,
    Textarea,
    Select,
}

impl FieldKind {
    /// Every kind, in the order the discovery scan considers them.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Tel,
        FieldKind::Text,
        FieldKind::Password,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::Textarea,
        FieldKind::Select,
    ];

    /// Kinds whose same-named elements collapse into one logical field.
    pub fn is_grouped(self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Checkbox)
    }

    /// Lowercase name, for logs and debug output.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability surface for one logical field.
///
/// The engine and the presenter never see concrete controls, only this
/// trait. [`Form::scan`](crate::form::Form::scan) produces implementations
/// backed by [`FormElement`](crate::form::FormElement)s; other UI toolkits
/// implement it over their own widget handles and register descriptors
/// directly.
pub trait Field: Send + Sync {
    /// The field name. Grouped members share it.
    fn name(&self) -> String;

    /// The control kind.
    fn kind(&self) -> FieldKind;

    /// Display label, when the host attached one.
    fn label(&self) -> Option<String>;

    /// The current value: the text content for text-like kinds, the checked
    /// member's value for groups, the selected value for selects.
    fn current_value(&self) -> String;

    /// Whether any member is checked. Meaningful for grouped kinds.
    fn is_checked(&self) -> bool;

    /// The selected value for selects; the current value otherwise.
    fn selected_value(&self) -> String;
}

/// One registered logical field: the capability handle plus its rules.
pub struct FieldDescriptor {
    field: Box<dyn Field>,
    rules: RuleSpec,
}

impl FieldDescriptor {
    /// Pair a field with the rules it validates under.
    pub fn new(field: Box<dyn Field>, rules: RuleSpec) -> Self {
        Self { field, rules }
    }

    /// The field's capability handle.
    pub fn field(&self) -> &dyn Field {
        self.field.as_ref()
    }

    /// The rules this field validates under.
    pub fn rules(&self) -> &RuleSpec {
        &self.rules
    }

    /// The field name.
    pub fn name(&self) -> String {
        self.field.name()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.field.name())
            .field("kind", &self.field.kind())
            .field("rules", &self.rules)
            .finish()
    }
}
