//! Rule registry: rule names mapped to implementations.

use std::collections::HashMap;
use std::fmt;

use crate::config::RuleParam;

/// Signature for host-injected rules: the field's current value as given,
/// plus the parameter the rule was configured with.
pub type CustomRule = Box<dyn Fn(&str, &RuleParam) -> bool + Send + Sync>;

/// One registered rule implementation.
///
/// The built-in variants carry engine-known value extraction (the engine
/// knows that `required` needs kind dispatch and that `equalTo` resolves
/// another field); `Custom` rules see the raw current value.
pub enum Rule {
    /// Presence, dispatched by kind.
    Required,
    /// Minimum trimmed character count.
    Min,
    /// Maximum trimmed character count.
    Max,
    /// Trimmed character count within an inclusive range.
    Between,
    /// Decimal number.
    Number,
    /// ASCII letters and digits only.
    AlphaNumeric,
    /// Email address shape.
    Email,
    /// Matches another field's current value.
    EqualTo,
    /// Host-injected predicate.
    Custom(CustomRule),
}

impl Rule {
    /// Wrap a plain closure as a custom rule.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, &RuleParam) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Box::new(f))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Required => "Required",
            Rule::Min => "Min",
            Rule::Max => "Max",
            Rule::Between => "Between",
            Rule::Number => "Number",
            Rule::AlphaNumeric => "AlphaNumeric",
            Rule::Email => "Email",
            Rule::EqualTo => "EqualTo",
            Rule::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}

/// Rule-name to [`Rule`] dispatch table.
///
/// A spec entry whose name is absent from the set is skipped at validation
/// time: no message, no effect on the outcome, a `warn` log as the only
/// trace. That mirrors how hand-written configs have always behaved and
/// keeps half-migrated configs working; typos are found through the log.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: HashMap<String, Rule>,
}

impl RuleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with the built-in rules under their config names:
    /// `required`, `min`, `max`, `between`, `number`, `alphaNumeric`,
    /// `email` and `equalTo`.
    pub fn builtin() -> Self {
        Self::new()
            .with("required", Rule::Required)
            .with("min", Rule::Min)
            .with("max", Rule::Max)
            .with("between", Rule::Between)
            .with("number", Rule::Number)
            .with("alphaNumeric", Rule::AlphaNumeric)
            .with("email", Rule::Email)
            .with("equalTo", Rule::EqualTo)
    }

    /// Register a rule under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    /// Builder form of [`register`](RuleSet::register).
    pub fn with(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.register(name, rule);
        self
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Whether a rule is registered under this name.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let rules = RuleSet::builtin();
        for name in [
            "required",
            "min",
            "max",
            "between",
            "number",
            "alphaNumeric",
            "email",
            "equalTo",
        ] {
            assert!(rules.contains(name), "missing builtin rule: {name}");
        }
        assert!(!rules.contains("url"));
        assert!(!rules.contains("date"));
    }

    #[test]
    fn test_custom_rule_sees_value_and_param() {
        let rules = RuleSet::builtin().with(
            "startsWith",
            Rule::custom(|value, param| match param {
                RuleParam::Text(prefix) => value.starts_with(prefix.as_str()),
                _ => true,
            }),
        );

        let Some(Rule::Custom(check)) = rules.get("startsWith") else {
            panic!("custom rule not registered");
        };
        assert!(check("abc", &RuleParam::Text("a".into())));
        assert!(!check("abc", &RuleParam::Text("z".into())));
    }
}
