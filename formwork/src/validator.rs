//! The validation engine: field registration, activity handling and the
//! submission gate.

use std::fmt;

use log::{debug, trace, warn};

use crate::config::{RuleParam, RulesConfig};
use crate::events::{FieldActivity, SubmitOutcome, TriggerMode};
use crate::field::{Field, FieldDescriptor, FieldKind};
use crate::form::Form;
use crate::messages::MessageCatalog;
use crate::presenter::{Presenter, PresenterOptions};
use crate::rules::{Rule, RuleSet, predicates};
use crate::state::FieldState;

/// Callbacks around the submission gate.
///
/// All hooks run synchronously on the engine's thread, in gate order:
/// `before_validate_all`, then the validation pass, then exactly one of
/// `on_validation_failed` and `on_validation_succeeded`.
#[derive(Default)]
pub struct Hooks {
    before_validate_all: Option<Box<dyn FnMut()>>,
    on_validation_failed: Option<Box<dyn FnMut()>>,
    on_validation_succeeded: Option<Box<dyn FnMut()>>,
}

impl Hooks {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run before the gate's validation pass.
    pub fn before_validate_all(mut self, f: impl FnMut() + 'static) -> Self {
        self.before_validate_all = Some(Box::new(f));
        self
    }

    /// Run after a failed gate pass, once the presenter has been told.
    pub fn on_validation_failed(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_validation_failed = Some(Box::new(f));
        self
    }

    /// Run after a clean gate pass.
    pub fn on_validation_succeeded(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_validation_succeeded = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_validate_all", &self.before_validate_all.is_some())
            .field("on_validation_failed", &self.on_validation_failed.is_some())
            .field(
                "on_validation_succeeded",
                &self.on_validation_succeeded.is_some(),
            )
            .finish()
    }
}

/// Construction options for [`FormValidator`].
///
/// # Example
///
/// ```
/// use formwork::config::{RuleSpec, RulesConfig};
/// use formwork::validator::ValidatorOptions;
///
/// let options = ValidatorOptions::new()
///     .with_rules(RulesConfig::new().field("email", RuleSpec::new().required().email()))
///     .with_always(true);
/// assert!(options.always);
/// ```
#[derive(Debug)]
pub struct ValidatorOptions {
    /// Field rules, matched against element names during discovery.
    pub rules: RulesConfig,
    /// Rule implementations. Default: the built-in set.
    pub rule_set: RuleSet,
    /// Message templates. Default: the built-in catalog.
    pub messages: MessageCatalog,
    /// When activity revalidates. Default: live.
    pub mode: TriggerMode,
    /// Force live behavior regardless of mode. Default: false.
    pub always: bool,
    /// Kinds the discovery scan considers. Default: every kind.
    pub eligible: Vec<FieldKind>,
    /// Options forwarded to the presenter.
    pub view: PresenterOptions,
    /// Submission hooks.
    pub hooks: Hooks,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            rules: RulesConfig::new(),
            rule_set: RuleSet::builtin(),
            messages: MessageCatalog::builtin(),
            mode: TriggerMode::default(),
            always: false,
            eligible: FieldKind::ALL.to_vec(),
            view: PresenterOptions::default(),
            hooks: Hooks::new(),
        }
    }
}

impl ValidatorOptions {
    /// Creates options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field rules.
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the rule implementations.
    pub fn with_rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_set = rule_set;
        self
    }

    /// Sets the message templates.
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// Sets the trigger mode.
    pub fn with_mode(mut self, mode: TriggerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Forces live behavior regardless of mode.
    pub fn with_always(mut self, always: bool) -> Self {
        self.always = always;
        self
    }

    /// Sets the kinds the discovery scan considers.
    pub fn with_eligible(mut self, eligible: Vec<FieldKind>) -> Self {
        self.eligible = eligible;
        self
    }

    /// Sets the presenter options.
    pub fn with_view(mut self, view: PresenterOptions) -> Self {
        self.view = view;
        self
    }

    /// Sets the submission hooks.
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }
}

/// One registered field with its validation state.
struct Entry {
    descriptor: FieldDescriptor,
    state: FieldState,
}

/// The validation engine.
///
/// Owns the registered fields, their states, the rule set, the message
/// catalog, the hooks and the presenter. Hosts feed it typed activity via
/// [`handle`](FormValidator::handle) and gate submissions through
/// [`submit`](FormValidator::submit); everything runs synchronously.
///
/// # Example
///
/// ```ignore
/// let form = Form::new()
///     .with(FormElement::email("email").with_label("Email"))
///     .with(FormElement::password("password"));
///
/// let rules = RulesConfig::new()
///     .field("email", RuleSpec::new().required().email())
///     .field("password", RuleSpec::new().required().min(8));
///
/// let mut engine = FormValidator::bind(
///     &form,
///     ValidatorOptions::new().with_rules(rules),
///     Box::new(MyPresenter::new()),
/// );
///
/// engine.handle("email", FieldActivity::KeyUp);
/// if engine.submit().is_allowed() {
///     // Carry out the real submit action.
/// }
/// ```
pub struct FormValidator {
    entries: Vec<Entry>,
    rule_set: RuleSet,
    messages: MessageCatalog,
    mode: TriggerMode,
    always: bool,
    view: PresenterOptions,
    hooks: Hooks,
    presenter: Box<dyn Presenter>,
    form: Option<Form>,
}

impl FormValidator {
    /// Bind to a form: discover its logical fields, attach the presenter
    /// to each and run the initial validation pass so preexisting values
    /// are reflected immediately.
    pub fn bind(form: &Form, options: ValidatorOptions, presenter: Box<dyn Presenter>) -> Self {
        let fields = form.scan(&options.eligible, &options.rules);
        Self::build(fields, Some(form.clone()), options, presenter)
    }

    /// Register pre-built descriptors, for hosts with their own [`Field`]
    /// implementations. Attach and initial-pass semantics match
    /// [`bind`](FormValidator::bind).
    pub fn new(
        fields: Vec<FieldDescriptor>,
        options: ValidatorOptions,
        presenter: Box<dyn Presenter>,
    ) -> Self {
        Self::build(fields, None, options, presenter)
    }

    fn build(
        fields: Vec<FieldDescriptor>,
        form: Option<Form>,
        options: ValidatorOptions,
        mut presenter: Box<dyn Presenter>,
    ) -> Self {
        for descriptor in &fields {
            presenter.attach(descriptor.field());
        }
        debug!("bound {} field(s)", fields.len());

        let mut engine = Self {
            entries: fields
                .into_iter()
                .map(|descriptor| Entry {
                    descriptor,
                    state: FieldState::new(),
                })
                .collect(),
            rule_set: options.rule_set,
            messages: options.messages,
            mode: options.mode,
            always: options.always,
            view: options.view,
            hooks: options.hooks,
            presenter,
            form,
        };
        engine.validate_all();
        engine
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate one field by name: clear its state, run its rules in
    /// order, store the resulting messages. Returns the field's validity;
    /// unknown names validate trivially. The presenter is not consulted
    /// here; activity handling and the gate drive presentation.
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(idx) = self.index_of(name) else {
            debug!("validate_field: unknown field '{name}'");
            return true;
        };
        self.revalidate(idx)
    }

    /// Validate every field in registration order, updating the presenter
    /// for each with assists disabled. No short-circuit: later fields
    /// validate even when earlier ones fail.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for idx in 0..self.entries.len() {
            all_valid &= self.validate_and_update(idx, false);
        }
        debug!(
            "validate_all: {}",
            if all_valid { "clean" } else { "errors present" }
        );
        all_valid
    }

    /// React to field activity per the trigger policy.
    ///
    /// In live operation (the default mode, or any mode under `always`),
    /// focus, keyup and change revalidate the field and update the
    /// presenter with assists enabled; focus additionally clears the
    /// field's out-of-band notice after the update. Blur dismisses the
    /// assist bubble in every mode.
    pub fn handle(&mut self, name: &str, activity: FieldActivity) {
        let Some(idx) = self.index_of(name) else {
            debug!("{activity:?} on unknown field '{name}'");
            return;
        };
        match activity {
            FieldActivity::Focus => {
                if self.is_live() {
                    self.validate_and_update(idx, true);
                    let entry = &self.entries[idx];
                    self.presenter.clear_notice(entry.descriptor.field());
                }
            }
            FieldActivity::KeyUp | FieldActivity::Change => {
                if self.is_live() {
                    self.validate_and_update(idx, true);
                }
            }
            FieldActivity::Blur => {
                let entry = &self.entries[idx];
                self.presenter.dismiss_assist(entry.descriptor.field());
            }
        }
    }

    /// Gate a submission.
    ///
    /// Runs `before_validate_all`, then the full validation pass. On
    /// failure the presenter is pointed at the first invalid field (it
    /// decides how loudly per its own options), `on_validation_failed`
    /// runs and the gate blocks. On success `on_validation_succeeded`
    /// runs and the gate opens.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(hook) = self.hooks.before_validate_all.as_mut() {
            hook();
        }
        if self.validate_all() {
            if let Some(hook) = self.hooks.on_validation_succeeded.as_mut() {
                hook();
            }
            SubmitOutcome::Proceed
        } else {
            if let Some(entry) = self.entries.iter().find(|e| e.state.has_errors()) {
                self.presenter.alert_and_scroll_to_error(entry.descriptor.field());
            }
            if let Some(hook) = self.hooks.on_validation_failed.as_mut() {
                hook();
            }
            SubmitOutcome::Blocked
        }
    }

    // -------------------------------------------------------------------------
    // Read accessors
    // -------------------------------------------------------------------------

    /// Whether activity currently triggers revalidation.
    pub fn is_live(&self) -> bool {
        self.always || self.mode == TriggerMode::Live
    }

    /// The state of a registered field.
    pub fn field_state(&self, name: &str) -> Option<&FieldState> {
        self.index_of(name).map(|idx| &self.entries[idx].state)
    }

    /// Whether a field currently has errors. Unknown names have none.
    pub fn has_errors(&self, name: &str) -> bool {
        self.field_state(name).is_some_and(FieldState::has_errors)
    }

    /// Whether every registered field is currently clean.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|e| !e.state.has_errors())
    }

    /// Registered field names, in registration order.
    pub fn field_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.descriptor.name()).collect()
    }

    /// The presenter options the engine was built with.
    pub fn view_options(&self) -> &PresenterOptions {
        &self.view
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.descriptor.name() == name)
    }

    fn revalidate(&mut self, idx: usize) -> bool {
        let state = self.evaluate(idx);
        let valid = !state.has_errors();
        trace!(
            "field '{}': {}",
            self.entries[idx].descriptor.name(),
            if valid { "valid" } else { "invalid" }
        );
        self.entries[idx].state = state;
        valid
    }

    fn validate_and_update(&mut self, idx: usize, use_assist: bool) -> bool {
        let valid = self.revalidate(idx);
        let assist = use_assist && self.view.use_assist;
        let entry = &self.entries[idx];
        self.presenter
            .update(entry.descriptor.field(), &entry.state, assist);
        valid
    }

    /// Build the field's fresh state: label, then one message per failing
    /// rule, in spec order.
    fn evaluate(&self, idx: usize) -> FieldState {
        let entry = &self.entries[idx];
        let field = entry.descriptor.field();
        let mut state = entry.state.clone();
        state.clear();
        if let Some(label) = field.label() {
            state.set_label(label);
        }

        for (name, param) in entry.descriptor.rules().entries() {
            let Some(rule) = self.rule_set.get(name) else {
                warn!(
                    "field '{}': no rule registered under '{}', skipping",
                    field.name(),
                    name
                );
                continue;
            };
            if !self.check(rule, field, param) {
                state.push_message(self.messages.render(name, &format_options(param)));
            }
        }
        state
    }

    fn check(&self, rule: &Rule, field: &dyn Field, param: &RuleParam) -> bool {
        match rule {
            Rule::Required => {
                let kind = field.kind();
                let value = if kind.is_grouped() {
                    // Sentinel: non-empty iff any member is checked.
                    if field.is_checked() { "1".to_string() } else { String::new() }
                } else if kind == FieldKind::Select {
                    field.selected_value()
                } else {
                    field.current_value()
                };
                let default = param.as_text().unwrap_or_default();
                predicates::required(&value, kind, default)
            }
            Rule::Min => match param.as_len() {
                Some(n) => predicates::min(&field.current_value(), n),
                None => {
                    warn!("field '{}': rule 'min' takes a length", field.name());
                    true
                }
            },
            Rule::Max => match param.as_len() {
                Some(n) => predicates::max(&field.current_value(), n),
                None => {
                    warn!("field '{}': rule 'max' takes a length", field.name());
                    true
                }
            },
            Rule::Between => match param.as_range() {
                Some((lo, hi)) => predicates::between(&field.current_value(), lo, hi),
                None => {
                    warn!("field '{}': rule 'between' takes a range", field.name());
                    true
                }
            },
            Rule::Number => predicates::number(&field.current_value()),
            Rule::AlphaNumeric => predicates::alpha_numeric(&field.current_value()),
            Rule::Email => predicates::email(&field.current_value()),
            Rule::EqualTo => match param.as_text() {
                Some(target) => match self.lookup_value(target) {
                    Some(other) => predicates::equal_to(&field.current_value(), &other),
                    // A dangling target can never match.
                    None => false,
                },
                None => {
                    warn!("field '{}': rule 'equalTo' takes a field name", field.name());
                    true
                }
            },
            Rule::Custom(check) => check(&field.current_value(), param),
        }
    }

    /// Resolve an `equalTo` target: registered fields first, then loose
    /// elements of the bound form.
    fn lookup_value(&self, name: &str) -> Option<String> {
        if let Some(entry) = self.entries.iter().find(|e| e.descriptor.name() == name) {
            return Some(entry.descriptor.field().current_value());
        }
        self.form.as_ref()?.find(name).map(|element| element.value())
    }
}

/// Positional format arguments for a rule's message template. Scalar
/// parameters fill `{0}`; ranges fill `{0}` and `{1}`.
fn format_options(param: &RuleParam) -> Vec<String> {
    match param {
        RuleParam::Flag(b) => vec![b.to_string()],
        RuleParam::Len(n) => vec![n.to_string()],
        RuleParam::Range(lo, hi) => vec![lo.to_string(), hi.to_string()],
        RuleParam::Text(text) => vec![text.clone()],
        RuleParam::None => Vec::new(),
    }
}
