//! Validation rules: the built-in predicates and the registry that names
//! them.
//!
//! Predicates are pure string functions; the [`RuleSet`] maps the names a
//! rules config uses onto implementations and is the extension point for
//! host-defined rules.
//!
//! # Example
//!
//! ```
//! use formwork::rules::{Rule, RuleSet};
//!
//! let rules = RuleSet::builtin().with(
//!     "evenLength",
//!     Rule::custom(|value, _param| value.len() % 2 == 0),
//! );
//! assert!(rules.contains("evenLength"));
//! assert!(rules.contains("required"));
//! ```

pub mod predicates;

mod registry;

pub use registry::{CustomRule, Rule, RuleSet};
