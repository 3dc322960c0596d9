//! Message templates and positional formatting.

use std::collections::HashMap;

/// Substitute positional arguments into a message template.
///
/// `{0}` is replaced by the first option, `{1}` by the second, and so on.
/// Placeholders without a matching option are left verbatim; extra options
/// are ignored. The formatter is total and never fails.
///
/// # Example
///
/// ```
/// use formwork::messages::format_message;
///
/// let msg = format_message("Please enter between {0} and {1} characters", &["4", "8"]);
/// assert_eq!(msg, "Please enter between 4 and 8 characters");
/// ```
pub fn format_message(template: &str, options: &[impl AsRef<str>]) -> String {
    let mut message = template.to_string();
    for (i, option) in options.iter().enumerate() {
        message = message.replace(&format!("{{{i}}}"), option.as_ref());
    }
    message
}

/// Rule-name to message-template catalog.
///
/// [`MessageCatalog::builtin`] carries an English template per built-in
/// rule, plus `url` and `date` templates that only activate when a host
/// registers rules under those names. Hosts override or extend templates
/// with [`set`](MessageCatalog::set); a rule without a template renders
/// the empty message.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the default templates.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.set("required", "This field is required");
        catalog.set("min", "Please enter at least {0} characters");
        catalog.set("max", "Please enter no more than {0} characters");
        catalog.set("between", "Please enter between {0} and {1} characters");
        catalog.set("number", "Please enter a number");
        catalog.set("url", "Please enter a valid URL");
        catalog.set("date", "Please enter a valid date");
        catalog.set("alphaNumeric", "Please use letters and numbers only");
        catalog.set("email", "Please enter a valid email address");
        catalog.set("equalTo", "The values entered do not match");
        catalog
    }

    /// Set or replace the template for a rule name.
    pub fn set(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    /// Builder form of [`set`](MessageCatalog::set).
    pub fn with(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.set(rule, template);
        self
    }

    /// The template for a rule name, if one is registered.
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.templates.get(rule).map(String::as_str)
    }

    /// Render the message for a rule name with positional options.
    /// Missing templates render as the empty string.
    pub fn render(&self, rule: &str, options: &[impl AsRef<str>]) -> String {
        match self.get(rule) {
            Some(template) => format_message(template, options),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_substitutes_in_order() {
        assert_eq!(format_message("{0}-{1}", &["a", "b"]), "a-b");
        assert_eq!(format_message("{1} then {0}", &["a", "b"]), "b then a");
    }

    #[test]
    fn test_format_leaves_unmatched_placeholders() {
        assert_eq!(format_message("need {0} and {1}", &["one"]), "need one and {1}");
        assert_eq!(format_message("no placeholders", &["ignored"]), "no placeholders");
    }

    #[test]
    fn test_builtin_templates_cover_extra_rule_names() {
        let catalog = MessageCatalog::builtin();
        assert!(catalog.get("required").is_some());
        // Templates exist for these even though no built-in rule uses them.
        assert!(catalog.get("url").is_some());
        assert!(catalog.get("date").is_some());
    }

    #[test]
    fn test_render_missing_template_is_empty() {
        let catalog = MessageCatalog::builtin();
        let empty: [&str; 0] = [];
        assert_eq!(catalog.render("zipCode", &empty), "");
    }

    #[test]
    fn test_override_replaces_builtin() {
        let catalog = MessageCatalog::builtin().with("required", "Requis");
        let empty: [&str; 0] = [];
        assert_eq!(catalog.render("required", &empty), "Requis");
    }
}
