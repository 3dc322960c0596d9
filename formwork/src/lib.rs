//! Form validation engine with pluggable rules, messages and presentation.
//!
//! `formwork` validates forms the way a client-side validator does: a
//! rules config names which rules apply to which fields, pure predicates
//! decide validity, a message catalog renders positional templates, and an
//! engine groups elements into logical fields, reacts to typed activity
//! (focus, keyup, change, blur) and gates submission. Painting errors is
//! delegated to a [`Presenter`] implementation; the engine itself is
//! synchronous, single-threaded and UI-toolkit agnostic.
//!
//! # Example
//!
//! ```
//! use formwork::prelude::*;
//!
//! let form = Form::new()
//!     .with(FormElement::email("email").with_label("Email"))
//!     .with(FormElement::password("password").with_label("Password"));
//!
//! let rules = RulesConfig::new()
//!     .field("email", RuleSpec::new().required().email())
//!     .field("password", RuleSpec::new().required().min(8));
//!
//! let mut engine = FormValidator::bind(
//!     &form,
//!     ValidatorOptions::new().with_rules(rules),
//!     Box::new(NullPresenter),
//! );
//!
//! // Empty form: the gate blocks and per-field messages are available.
//! assert_eq!(engine.submit(), SubmitOutcome::Blocked);
//! assert!(engine.has_errors("email"));
//!
//! form.find("email").unwrap().set_value("kai@example.com");
//! form.find("password").unwrap().set_value("correct horse");
//! assert_eq!(engine.submit(), SubmitOutcome::Proceed);
//! ```

pub mod config;
pub mod events;
pub mod field;
pub mod form;
pub mod messages;
pub mod presenter;
pub mod rules;
pub mod state;
pub mod validator;

pub use config::{ConfigError, RuleParam, RuleSpec, RulesConfig};
pub use events::{FieldActivity, SubmitOutcome, TriggerMode};
pub use field::{Field, FieldDescriptor, FieldKind};
pub use form::{Form, FormElement};
pub use messages::{MessageCatalog, format_message};
pub use presenter::{AssistStyle, NullPresenter, Presenter, PresenterOptions, Rgb};
pub use rules::{CustomRule, Rule, RuleSet};
pub use state::FieldState;
pub use validator::{FormValidator, Hooks, ValidatorOptions};

pub mod prelude {
    pub use crate::config::{ConfigError, RuleParam, RuleSpec, RulesConfig};
    pub use crate::events::{FieldActivity, SubmitOutcome, TriggerMode};
    pub use crate::field::{Field, FieldDescriptor, FieldKind};
    pub use crate::form::{Form, FormElement};
    pub use crate::messages::MessageCatalog;
    pub use crate::presenter::{AssistStyle, NullPresenter, Presenter, PresenterOptions};
    pub use crate::rules::{Rule, RuleSet};
    pub use crate::state::FieldState;
    pub use crate::validator::{FormValidator, Hooks, ValidatorOptions};
}
