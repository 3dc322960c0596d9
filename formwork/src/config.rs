//! Rule configuration: per-field rule specs and their JSON form.
//!
//! A rules config is an ordered map of field names to rule activations.
//! Order matters twice: fields validate in config order on the
//! registration path that takes descriptors directly, and a field's
//! messages render in the order its rules were written. The JSON
//! deserializer therefore keeps document order instead of going through a
//! standard map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors from loading a rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON or did not match the schema.
    #[error("invalid rules config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameter attached to one rule activation.
///
/// The JSON forms map onto the variants in declaration order: `true`
/// becomes `Flag`, `3` becomes `Len`, `[4, 8]` becomes `Range`, `"text"`
/// becomes `Text` and `null` becomes `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleParam {
    /// Bare activation: `"required": true`.
    Flag(bool),
    /// Single length: `"min": 3`.
    Len(usize),
    /// Inclusive range: `"between": [4, 8]`.
    Range(usize, usize),
    /// Text argument: a select default (`"required": ""`) or an `equalTo`
    /// target field name.
    Text(String),
    /// No parameter.
    None,
}

impl RuleParam {
    /// The length argument, when the parameter has one.
    pub fn as_len(&self) -> Option<usize> {
        match self {
            RuleParam::Len(n) => Some(*n),
            _ => None,
        }
    }

    /// The range arguments, when the parameter has them.
    pub fn as_range(&self) -> Option<(usize, usize)> {
        match self {
            RuleParam::Range(lo, hi) => Some((*lo, *hi)),
            _ => None,
        }
    }

    /// The text argument, when the parameter has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleParam::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Ordered rule activations for one field.
///
/// Construction order is significant: messages for a failing field render
/// in the same order the rules were added.
///
/// # Example
///
/// ```
/// use formwork::config::RuleSpec;
///
/// let spec = RuleSpec::new().required().min(3).alpha_numeric();
/// assert_eq!(spec.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSpec {
    entries: Vec<(String, RuleParam)>,
}

impl RuleSpec {
    /// Create an empty spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activation under an arbitrary rule name.
    pub fn rule(mut self, name: impl Into<String>, param: RuleParam) -> Self {
        self.entries.push((name.into(), param));
        self
    }

    /// Require a non-empty value (kind-aware at validation time).
    pub fn required(self) -> Self {
        self.rule("required", RuleParam::Flag(true))
    }

    /// Require a selection differing from `default`. Meant for selects,
    /// where the placeholder option's value still counts as unselected.
    pub fn required_default(self, default: impl Into<String>) -> Self {
        self.rule("required", RuleParam::Text(default.into()))
    }

    /// Require at least `n` characters after trimming.
    pub fn min(self, n: usize) -> Self {
        self.rule("min", RuleParam::Len(n))
    }

    /// Require at most `n` characters after trimming.
    pub fn max(self, n: usize) -> Self {
        self.rule("max", RuleParam::Len(n))
    }

    /// Require a trimmed length within `[lo, hi]`.
    pub fn between(self, lo: usize, hi: usize) -> Self {
        self.rule("between", RuleParam::Range(lo, hi))
    }

    /// Require a decimal number.
    pub fn number(self) -> Self {
        self.rule("number", RuleParam::Flag(true))
    }

    /// Require ASCII letters and digits only.
    pub fn alpha_numeric(self) -> Self {
        self.rule("alphaNumeric", RuleParam::Flag(true))
    }

    /// Require an email address shape.
    pub fn email(self) -> Self {
        self.rule("email", RuleParam::Flag(true))
    }

    /// Require equality with another field's current value.
    pub fn equal_to(self, target: impl Into<String>) -> Self {
        self.rule("equalTo", RuleParam::Text(target.into()))
    }

    /// The activations, in insertion order.
    pub fn entries(&self) -> &[(String, RuleParam)] {
        &self.entries
    }

    /// Number of activations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the spec has no activations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RuleSpecVisitor)
    }
}

struct RuleSpecVisitor;

impl<'de> Visitor<'de> for RuleSpecVisitor {
    type Value = RuleSpec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of rule names to parameters")
    }

    fn visit_map<M>(self, mut map: M) -> Result<RuleSpec, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((name, param)) = map.next_entry::<String, RuleParam>()? {
            // A repeated rule name replaces the earlier entry in place.
            match entries.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = param,
                None => entries.push((name, param)),
            }
        }
        Ok(RuleSpec { entries })
    }
}

/// Ordered field-name to [`RuleSpec`] map.
///
/// # Example
///
/// ```
/// use formwork::config::{RuleSpec, RulesConfig};
///
/// let rules = RulesConfig::new()
///     .field("email", RuleSpec::new().required().email())
///     .field("nick", RuleSpec::new().min(3).alpha_numeric());
/// assert!(rules.contains("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RulesConfig {
    fields: Vec<(String, RuleSpec)>,
}

impl RulesConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from its JSON form, keeping document order.
    ///
    /// Unknown rule *names* inside a well-formed document are kept; they
    /// are skipped later, at validation time. Only malformed documents
    /// fail.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the spec for a field. A repeated field name replaces the
    /// earlier spec in place; otherwise the field appends.
    pub fn field(mut self, name: impl Into<String>, spec: RuleSpec) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = spec,
            None => self.fields.push((name, spec)),
        }
        self
    }

    /// The spec for a field name, if present.
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Whether the config has a spec for this field name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The field entries, in config order.
    pub fn entries(&self) -> &[(String, RuleSpec)] {
        &self.fields
    }

    /// Number of configured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the config has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for RulesConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RulesConfigVisitor)
    }
}

struct RulesConfigVisitor;

impl<'de> Visitor<'de> for RulesConfigVisitor {
    type Value = RulesConfig;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field names to rule specs")
    }

    fn visit_map<M>(self, mut map: M) -> Result<RulesConfig, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut config = RulesConfig::new();
        while let Some((name, spec)) = map.next_entry::<String, RuleSpec>()? {
            config = config.field(name, spec);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_json_forms() {
        let param: RuleParam = serde_json::from_str("true").unwrap();
        assert_eq!(param, RuleParam::Flag(true));

        let param: RuleParam = serde_json::from_str("3").unwrap();
        assert_eq!(param, RuleParam::Len(3));

        let param: RuleParam = serde_json::from_str("[4, 8]").unwrap();
        assert_eq!(param, RuleParam::Range(4, 8));

        let param: RuleParam = serde_json::from_str("\"email1\"").unwrap();
        assert_eq!(param, RuleParam::Text("email1".into()));

        let param: RuleParam = serde_json::from_str("\"\"").unwrap();
        assert_eq!(param, RuleParam::Text(String::new()));

        let param: RuleParam = serde_json::from_str("null").unwrap();
        assert_eq!(param, RuleParam::None);
    }

    #[test]
    fn test_spec_keeps_rule_order() {
        let spec: RuleSpec =
            serde_json::from_str(r#"{ "min": 3, "required": true, "alphaNumeric": true }"#)
                .unwrap();
        let names: Vec<&str> = spec.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["min", "required", "alphaNumeric"]);
    }

    #[test]
    fn test_config_keeps_field_order() {
        let json = r#"{
            "zeta": { "required": true },
            "alpha": { "min": 2 }
        }"#;
        let config = RulesConfig::from_json(json).unwrap();
        let names: Vec<&str> = config.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_unknown_rule_names_are_kept() {
        let config = RulesConfig::from_json(r#"{ "f": { "zipCode": true } }"#).unwrap();
        let spec = config.get("f").unwrap();
        assert_eq!(spec.entries()[0].0, "zipCode");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(RulesConfig::from_json("{ not json").is_err());
        assert!(RulesConfig::from_json(r#"{ "f": 3 }"#).is_err());
    }

    #[test]
    fn test_repeated_field_replaces_in_place() {
        let config = RulesConfig::new()
            .field("a", RuleSpec::new().required())
            .field("b", RuleSpec::new().min(2))
            .field("a", RuleSpec::new().email());
        let names: Vec<&str> = config.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(config.get("a").unwrap().entries()[0].0, "email");
    }
}
