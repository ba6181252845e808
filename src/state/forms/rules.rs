//! Field validation rules

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Pure check of one field value, returning the message to show when it fails
pub type Rule = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Rules keyed by field name. Fields without a rule are always valid.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rule for `field`
    pub fn rule<F>(mut self, field: &str, rule: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.insert(field.to_string(), Arc::new(rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.rules.keys()).finish()
    }
}

/// At least `min` characters
pub fn min_chars(min: usize, message: &'static str) -> impl Fn(&str) -> Option<String> {
    move |value| (value.chars().count() < min).then(|| message.to_string())
}

/// Any value at all
pub fn required(message: &'static str) -> impl Fn(&str) -> Option<String> {
    move |value| value.is_empty().then(|| message.to_string())
}

/// Something other than whitespace
pub fn not_blank(message: &'static str) -> impl Fn(&str) -> Option<String> {
    move |value| value.trim().is_empty().then(|| message.to_string())
}

/// `local@domain.tld` shape
pub fn email(message: &'static str) -> impl Fn(&str) -> Option<String> {
    move |value| (!is_email(value)).then(|| message.to_string())
}

/// No whitespace, exactly one `@`, and a dot in the domain with text on
/// both sides of it.
pub fn is_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_chars_counts_characters() {
        let rule = min_chars(2, "too short");
        assert_eq!(rule("a"), Some("too short".to_string()));
        assert_eq!(rule("ab"), None);
        // Two characters, more than two bytes
        assert_eq!(rule("ñé"), None);
    }

    #[test]
    fn test_required() {
        let rule = required("pick one");
        assert_eq!(rule(""), Some("pick one".to_string()));
        assert_eq!(rule(" "), None);
    }

    #[test]
    fn test_not_blank() {
        let rule = not_blank("missing");
        assert_eq!(rule("   "), Some("missing".to_string()));
        assert_eq!(rule(" Rust "), None);
    }

    #[test]
    fn test_email_accepts() {
        for ok in ["a@b.com", "first.last@mail.example.org", "x@y.z", "a@.b.c", "a@b..c"] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_email_rejects() {
        for bad in [
            "", "bad", "@b.com", "a@", "a@b", "a@b.", "a@.com", "a b@c.com", "a@b@c.com",
            "a@b .com",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_rule_set_builder() {
        let rules = RuleSet::new()
            .rule("name", min_chars(2, "name"))
            .rule("email", email("email"));
        assert_eq!(rules.len(), 2);
        assert!(rules.contains("email"));
        assert!(!rules.contains("company"));
        let fields: Vec<_> = rules.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["email", "name"]);
    }

    #[test]
    fn test_rule_replaced() {
        let rules = RuleSet::new()
            .rule("name", required("first"))
            .rule("name", required("second"));
        let (_, rule) = rules.iter().next().unwrap();
        assert_eq!(rule(""), Some("second".to_string()));
    }

    #[test]
    fn test_debug_lists_fields() {
        let rules = RuleSet::new().rule("email", email("e"));
        assert_eq!(format!("{rules:?}"), r#"{"email"}"#);
    }
}
