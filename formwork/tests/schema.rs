use formwork::prelude::*;

fn signup_form() -> Form {
    Form::new()
        .with(FormElement::email("email").with_label("Email"))
        .with(FormElement::password("password").with_label("Password"))
        .with(FormElement::password("passwordConfirm").with_label("Confirm"))
        .with(FormElement::select("plan").with_value("none"))
}

const SIGNUP_RULES: &str = r#"{
    "email": { "required": true, "email": true },
    "password": { "required": true, "between": [8, 64] },
    "passwordConfirm": { "equalTo": "password" },
    "plan": { "required": "none" }
}"#;

#[test]
fn test_json_config_drives_validation() {
    let form = signup_form();
    let rules = RulesConfig::from_json(SIGNUP_RULES).unwrap();
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules),
        Box::new(NullPresenter),
    );
    assert_eq!(engine.submit(), SubmitOutcome::Blocked);

    form.find("email").unwrap().set_value("kai@example.com");
    form.find("password").unwrap().set_value("correct horse");
    form.find("passwordConfirm").unwrap().set_value("correct horse");
    form.find("plan").unwrap().set_value("pro");
    assert_eq!(engine.submit(), SubmitOutcome::Proceed);

    // The confirm field tracks its target live.
    form.find("password").unwrap().set_value("changed horse");
    assert_eq!(engine.submit(), SubmitOutcome::Blocked);
    assert!(engine.has_errors("passwordConfirm"));
}

#[test]
fn test_rule_order_in_the_document_is_the_message_order() {
    let form = Form::new().with(FormElement::text("code"));
    let rules =
        RulesConfig::from_json(r#"{ "code": { "alphaNumeric": true, "required": true } }"#).unwrap();
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules),
        Box::new(NullPresenter),
    );

    engine.validate_field("code");
    assert_eq!(
        engine.field_state("code").unwrap().messages(),
        [
            "Please use letters and numbers only",
            "This field is required",
        ]
    );
}

#[test]
fn test_range_parameters_render_into_templates() {
    let form = Form::new().with(FormElement::password("password").with_value("short"));
    let rules = RulesConfig::from_json(r#"{ "password": { "between": [8, 64] } }"#).unwrap();
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules),
        Box::new(NullPresenter),
    );

    engine.validate_field("password");
    assert_eq!(
        engine.field_state("password").unwrap().messages(),
        ["Please enter between 8 and 64 characters"]
    );
}

#[test]
fn test_unknown_rule_names_parse_and_are_skipped() {
    let form = Form::new().with(FormElement::text("zip").with_value("12345"));
    let rules =
        RulesConfig::from_json(r#"{ "zip": { "required": true, "zipCode": true } }"#).unwrap();
    assert_eq!(rules.get("zip").unwrap().len(), 2);

    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules),
        Box::new(NullPresenter),
    );
    assert!(engine.validate_field("zip"));
}

#[test]
fn test_malformed_documents_are_rejected() {
    assert!(RulesConfig::from_json("{ not json }").is_err());
    assert!(RulesConfig::from_json(r#"{ "email": [] }"#).is_err());
}
