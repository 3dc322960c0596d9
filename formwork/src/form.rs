//! In-memory form model and the discovery scan.
//!
//! [`FormElement`] is the crate's own control implementation: a named,
//! kinded value holder behind a shared handle, enough to stand in for a
//! real widget in tests, demos and headless hosts. [`Form::scan`] turns an
//! element list plus a rules config into the ordered logical fields the
//! engine registers.

use std::sync::{Arc, RwLock};

use crate::config::RulesConfig;
use crate::field::{Field, FieldDescriptor, FieldKind};

/// Internal state of one form control.
#[derive(Debug)]
struct ElementInner {
    name: String,
    kind: FieldKind,
    label: Option<String>,
    value: String,
    checked: bool,
}

/// One concrete control in the in-memory form model.
///
/// Handles are shared: `Clone` returns a handle to the same state, so a
/// host keeps one clone to feed user input while a bound engine reads live
/// values through the other.
///
/// # Example
///
/// ```
/// use formwork::form::FormElement;
///
/// let nick = FormElement::text("nick").with_label("Nickname");
/// let handle = nick.clone();
/// handle.set_value("kai");
/// assert_eq!(nick.value(), "kai");
/// ```
#[derive(Debug)]
pub struct FormElement {
    inner: Arc<RwLock<ElementInner>>,
}

impl FormElement {
    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ElementInner {
                name: name.into(),
                kind,
                label: None,
                value: String::new(),
                checked: false,
            })),
        }
    }

    /// Create a text input.
    pub fn text(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Text)
    }

    /// Create a password input.
    pub fn password(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Password)
    }

    /// Create an email input.
    pub fn email(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Email)
    }

    /// Create a telephone input.
    pub fn tel(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Tel)
    }

    /// Create a number input.
    pub fn number(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Number)
    }

    /// Create a multi-line text area.
    pub fn textarea(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Textarea)
    }

    /// Create a select. Its value is the selected option's value, empty
    /// until the host sets one.
    pub fn select(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Select)
    }

    /// Create one radio button of a group. `value` is the choice this
    /// button carries; buttons sharing a name form the group.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        let element = Self::with_kind(name, FieldKind::Radio);
        element.set_value(value);
        element
    }

    /// Create one checkbox. Checkboxes sharing a name form a group.
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        let element = Self::with_kind(name, FieldKind::Checkbox);
        element.set_value(value);
        element
    }

    /// Attach a display label.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = Some(label.into());
        }
        self
    }

    /// Start with an initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Start checked.
    pub fn checked(self) -> Self {
        self.set_checked(true);
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The element name.
    pub fn name(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.name.clone())
            .unwrap_or_default()
    }

    /// The element kind.
    pub fn kind(&self) -> FieldKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or(FieldKind::Text)
    }

    /// The display label, when one was attached.
    pub fn label(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or(None)
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Whether the element is checked.
    pub fn is_checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.checked)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Set the checked flag.
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = checked;
        }
    }
}

impl Clone for FormElement {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// An ordered collection of form controls.
#[derive(Debug, Clone, Default)]
pub struct Form {
    elements: Vec<FormElement>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Form::push).
    pub fn with(mut self, element: FormElement) -> Self {
        self.push(element);
        self
    }

    /// Append a control.
    pub fn push(&mut self, element: FormElement) {
        self.elements.push(element);
    }

    /// The controls, in form order.
    pub fn elements(&self) -> &[FormElement] {
        &self.elements
    }

    /// The first control with this name.
    pub fn find(&self, name: &str) -> Option<&FormElement> {
        self.elements.iter().find(|e| e.name() == name)
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the form has no controls.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Discover the logical fields of this form, in one pass.
    ///
    /// Walks the controls in form order and keeps those whose kind is in
    /// `eligible` and whose name has a rules entry. Radio buttons and
    /// checkboxes sharing a name collapse into one logical field at the
    /// first member's position, absorbing every later same-name member of
    /// the same kind; all other kinds register one field per control.
    pub fn scan(&self, eligible: &[FieldKind], rules: &RulesConfig) -> Vec<FieldDescriptor> {
        let mut fields = Vec::new();
        let mut grouped: Vec<(FieldKind, String)> = Vec::new();

        for element in &self.elements {
            let kind = element.kind();
            if !eligible.contains(&kind) {
                continue;
            }
            let name = element.name();
            let Some(spec) = rules.get(&name) else {
                continue;
            };

            let members = if kind.is_grouped() {
                if grouped.iter().any(|(k, n)| *k == kind && *n == name) {
                    continue;
                }
                grouped.push((kind, name.clone()));
                self.elements
                    .iter()
                    .filter(|e| e.kind() == kind && e.name() == name)
                    .cloned()
                    .collect()
            } else {
                vec![element.clone()]
            };

            fields.push(FieldDescriptor::new(
                Box::new(ElementField { members }),
                spec.clone(),
            ));
        }

        fields
    }
}

/// [`Field`] implementation over one or more same-named elements.
struct ElementField {
    members: Vec<FormElement>,
}

impl ElementField {
    fn first(&self) -> Option<&FormElement> {
        self.members.first()
    }
}

impl Field for ElementField {
    fn name(&self) -> String {
        self.first().map(FormElement::name).unwrap_or_default()
    }

    fn kind(&self) -> FieldKind {
        self.first()
            .map(FormElement::kind)
            .unwrap_or(FieldKind::Text)
    }

    fn label(&self) -> Option<String> {
        self.first().and_then(FormElement::label)
    }

    fn current_value(&self) -> String {
        if self.kind().is_grouped() {
            self.members
                .iter()
                .find(|m| m.is_checked())
                .map(FormElement::value)
                .unwrap_or_default()
        } else {
            self.first().map(FormElement::value).unwrap_or_default()
        }
    }

    fn is_checked(&self) -> bool {
        self.members.iter().any(FormElement::is_checked)
    }

    fn selected_value(&self) -> String {
        self.first().map(FormElement::value).unwrap_or_default()
    }
}
