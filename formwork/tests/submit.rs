use std::cell::RefCell;
use std::rc::Rc;

use formwork::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Shared call log. Hooks and the presenter push into the same log so the
/// tests can assert cross-collaborator ordering.
#[derive(Clone, Default)]
struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: impl Into<String>) {
        self.calls.borrow_mut().push(entry.into());
    }

    fn take(&self) -> Vec<String> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

struct RecordingPresenter {
    log: Recorder,
}

impl RecordingPresenter {
    fn new(log: &Recorder) -> Box<Self> {
        Box::new(Self { log: log.clone() })
    }
}

impl Presenter for RecordingPresenter {
    fn update(&mut self, field: &dyn Field, state: &FieldState, use_assist: bool) {
        let validity = if state.has_errors() { "invalid" } else { "valid" };
        self.log
            .push(format!("update:{}:{}:{}", field.name(), validity, use_assist));
    }

    fn dismiss_assist(&mut self, field: &dyn Field) {
        self.log.push(format!("dismiss:{}", field.name()));
    }

    fn clear_notice(&mut self, field: &dyn Field) {
        self.log.push(format!("notice:{}", field.name()));
    }

    fn alert_and_scroll_to_error(&mut self, first_invalid: &dyn Field) {
        self.log.push(format!("alert:{}", first_invalid.name()));
    }
}

fn sample_form() -> (Form, RulesConfig) {
    let form = Form::new()
        .with(FormElement::text("nick"))
        .with(FormElement::email("email"));
    let rules = RulesConfig::new()
        .field("nick", RuleSpec::new().required())
        .field("email", RuleSpec::new().required().email());
    (form, rules)
}

fn recorded_engine(options: ValidatorOptions) -> (Form, FormValidator, Recorder) {
    let (form, rules) = sample_form();
    let log = Recorder::new();
    let engine = FormValidator::bind(&form, options.with_rules(rules), RecordingPresenter::new(&log));
    log.take();
    (form, engine, log)
}

// ============================================================================
// The submission gate
// ============================================================================

#[test]
fn test_blocked_submit_fires_hooks_in_gate_order() {
    let (form, rules) = sample_form();
    let log = Recorder::new();
    let hooks = {
        let before = log.clone();
        let failed = log.clone();
        let succeeded = log.clone();
        Hooks::new()
            .before_validate_all(move || before.push("hook:before"))
            .on_validation_failed(move || failed.push("hook:failed"))
            .on_validation_succeeded(move || succeeded.push("hook:succeeded"))
    };
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules).with_hooks(hooks),
        RecordingPresenter::new(&log),
    );
    log.take();

    assert_eq!(engine.submit(), SubmitOutcome::Blocked);
    assert_eq!(
        log.take(),
        [
            "hook:before",
            "update:nick:invalid:false",
            "update:email:invalid:false",
            "alert:nick",
            "hook:failed",
        ]
    );
}

#[test]
fn test_clean_submit_proceeds() {
    let (form, rules) = sample_form();
    form.find("nick").unwrap().set_value("kai");
    form.find("email").unwrap().set_value("kai@example.com");

    let log = Recorder::new();
    let hooks = {
        let before = log.clone();
        let succeeded = log.clone();
        Hooks::new()
            .before_validate_all(move || before.push("hook:before"))
            .on_validation_succeeded(move || succeeded.push("hook:succeeded"))
    };
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules).with_hooks(hooks),
        RecordingPresenter::new(&log),
    );
    log.take();

    let outcome = engine.submit();
    assert!(outcome.is_allowed());
    assert_eq!(
        log.take(),
        [
            "hook:before",
            "update:nick:valid:false",
            "update:email:valid:false",
            "hook:succeeded",
        ]
    );
}

#[test]
fn test_alert_targets_the_first_invalid_field() {
    let (form, mut engine, log) = recorded_engine(ValidatorOptions::new());
    form.find("nick").unwrap().set_value("kai");

    engine.submit();
    let calls = log.take();
    assert!(calls.contains(&"alert:email".to_string()));
    assert!(!calls.iter().any(|c| c == "alert:nick"));
}

#[test]
fn test_failed_submit_always_reaches_the_presenter() {
    // The scroll option is the presenter's business; the engine points it
    // at the first invalid field either way.
    let view = PresenterOptions::new().with_scroll_to_error_on_submit(false);
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new().with_view(view));

    assert_eq!(engine.submit(), SubmitOutcome::Blocked);
    assert!(log.take().iter().any(|c| c == "alert:nick"));
    assert!(!engine.view_options().scroll_to_error_on_submit);
}

// ============================================================================
// Activity under the trigger policy
// ============================================================================

#[test]
fn test_live_keyup_revalidates() {
    let (form, mut engine, log) = recorded_engine(ValidatorOptions::new());

    form.find("nick").unwrap().set_value("kai");
    engine.handle("nick", FieldActivity::KeyUp);
    assert_eq!(log.take(), ["update:nick:valid:false"]);
    assert!(!engine.has_errors("nick"));
}

#[test]
fn test_focus_updates_then_clears_the_notice() {
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new());

    engine.handle("nick", FieldActivity::Focus);
    assert_eq!(log.take(), ["update:nick:invalid:false", "notice:nick"]);
}

#[test]
fn test_blur_dismisses_the_assist_in_every_mode() {
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new());
    engine.handle("nick", FieldActivity::Blur);
    assert_eq!(log.take(), ["dismiss:nick"]);

    let (_form, mut engine, log) =
        recorded_engine(ValidatorOptions::new().with_mode(TriggerMode::SubmitOnly));
    engine.handle("nick", FieldActivity::Blur);
    assert_eq!(log.take(), ["dismiss:nick"]);
}

#[test]
fn test_submit_only_mode_ignores_editing_activity() {
    let (form, mut engine, log) =
        recorded_engine(ValidatorOptions::new().with_mode(TriggerMode::SubmitOnly));

    form.find("nick").unwrap().set_value("kai");
    engine.handle("nick", FieldActivity::Focus);
    engine.handle("nick", FieldActivity::KeyUp);
    engine.handle("nick", FieldActivity::Change);
    assert!(log.take().is_empty());
    // The state still reflects the initial pass, not the edit.
    assert!(engine.has_errors("nick"));

    engine.submit();
    assert!(!engine.has_errors("nick"));
}

#[test]
fn test_always_forces_live_behavior() {
    let options = ValidatorOptions::new()
        .with_mode(TriggerMode::SubmitOnly)
        .with_always(true);
    let (form, mut engine, log) = recorded_engine(options);

    form.find("nick").unwrap().set_value("kai");
    engine.handle("nick", FieldActivity::KeyUp);
    assert_eq!(log.take(), ["update:nick:valid:false"]);
}

#[test]
fn test_activity_on_unknown_fields_is_ignored() {
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new());
    engine.handle("missing", FieldActivity::KeyUp);
    engine.handle("missing", FieldActivity::Blur);
    assert!(log.take().is_empty());
}

// ============================================================================
// Assist forwarding
// ============================================================================

#[test]
fn test_assists_reach_the_presenter_only_on_live_activity() {
    let view = PresenterOptions::new().with_use_assist(true);
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new().with_view(view));

    engine.handle("nick", FieldActivity::KeyUp);
    assert_eq!(log.take(), ["update:nick:invalid:true"]);

    // The gate's full pass never raises assists.
    engine.submit();
    let calls = log.take();
    assert!(calls.contains(&"update:nick:invalid:false".to_string()));
    assert!(!calls.iter().any(|c| c.ends_with(":true")));
}

#[test]
fn test_assists_stay_down_when_the_option_is_off() {
    let (_form, mut engine, log) = recorded_engine(ValidatorOptions::new());
    engine.handle("nick", FieldActivity::KeyUp);
    assert_eq!(log.take(), ["update:nick:invalid:false"]);
}
