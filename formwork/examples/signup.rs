//! Signup Example
//!
//! A terminal walkthrough of the validation engine:
//! - Rules loaded from a JSON config
//! - Live revalidation as values change
//! - A crossterm presenter painting errors in red
//! - Submission gating with hooks
//!
//! Type a value at each prompt; an empty line keeps the current value.
//! The prompts repeat until the form validates.

use std::fs::File;
use std::io::{self, Write};

use crossterm::style::Stylize;
use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

// ============================================================================
// Terminal Presenter
// ============================================================================

/// Paints validation output straight to stdout.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn update(&mut self, field: &dyn Field, state: &FieldState, _use_assist: bool) {
        if !state.has_errors() {
            return;
        }
        let label = if state.label().is_empty() {
            field.name()
        } else {
            state.label().to_string()
        };
        for message in state.messages() {
            println!("  {} {}", format!("{label}:").red().bold(), message);
        }
    }

    fn alert_and_scroll_to_error(&mut self, first_invalid: &dyn Field) {
        let text = format!("Some of your input needs attention (starting at '{}')", first_invalid.name());
        println!("{}", text.yellow());
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> io::Result<()> {
    // Initialize file logging
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let form = Form::new()
        .with(FormElement::email("email").with_label("Email"))
        .with(FormElement::password("password").with_label("Password"))
        .with(FormElement::password("confirm").with_label("Confirm"));

    let rules = RulesConfig::from_json(
        r#"{
            "email": { "required": true, "email": true },
            "password": { "required": true, "between": [8, 64] },
            "confirm": { "equalTo": "password" }
        }"#,
    )
    .expect("rules config is valid JSON");

    let hooks = Hooks::new().on_validation_failed(|| log::debug!("submission blocked"));
    let mut engine = FormValidator::bind(
        &form,
        ValidatorOptions::new().with_rules(rules).with_hooks(hooks),
        Box::new(TerminalPresenter),
    );

    println!("{}", "Signup".bold());
    let stdin = io::stdin();
    loop {
        for name in engine.field_names() {
            let Some(element) = form.find(&name) else {
                continue;
            };
            let label = element.label().unwrap_or_else(|| name.clone());
            print!("{} [{}]: ", label, element.value());
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if !line.is_empty() {
                element.set_value(line);
            }
            engine.handle(&name, FieldActivity::Change);
        }

        if engine.submit().is_allowed() {
            println!("{}", "Submitted. Welcome aboard!".green().bold());
            return Ok(());
        }
        println!("{}", "Fix the fields above and try again.\n".yellow());
    }
}
