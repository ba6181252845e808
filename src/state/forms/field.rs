//! Form field descriptors

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// One of a fixed set of options; the empty string means "not chosen"
    Choice(&'static [&'static str]),
}

/// Describes a single form field. Values live in the form controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a single-line text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    /// Create a multi-line text field
    pub const fn multiline(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Multiline,
        }
    }

    /// Create a choice field
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Option after `current`, wrapping through "not chosen"
    pub fn next_choice(&self, current: &str) -> Option<String> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        let next = match options.iter().position(|o| *o == current) {
            None => options.first().copied().unwrap_or(""),
            Some(i) if i + 1 < options.len() => options[i + 1],
            Some(_) => "",
        };
        Some(next.to_string())
    }

    /// Option before `current`, wrapping through "not chosen"
    pub fn prev_choice(&self, current: &str) -> Option<String> {
        let FieldKind::Choice(options) = self.kind else {
            return None;
        };
        let prev = match options.iter().position(|o| *o == current) {
            None => options.last().copied().unwrap_or(""),
            Some(0) => "",
            Some(i) => options[i - 1],
        };
        Some(prev.to_string())
    }

    /// Value as shown to the user
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Choice(_) if value.is_empty() => "(select)".to_string(),
            _ => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["S", "M", "L"];

    #[test]
    fn test_text_field_has_no_choices() {
        let field = FormField::text("name", "Name");
        assert!(field.next_choice("").is_none());
        assert!(field.prev_choice("").is_none());
        assert!(!field.is_multiline());
        assert!(!field.is_choice());
    }

    #[test]
    fn test_multiline() {
        assert!(FormField::multiline("message", "Message").is_multiline());
    }

    #[test]
    fn test_next_choice_cycles_through_unset() {
        let field = FormField::choice("size", "Size", SIZES);
        assert_eq!(field.next_choice("").as_deref(), Some("S"));
        assert_eq!(field.next_choice("S").as_deref(), Some("M"));
        assert_eq!(field.next_choice("L").as_deref(), Some(""));
    }

    #[test]
    fn test_prev_choice_cycles_through_unset() {
        let field = FormField::choice("size", "Size", SIZES);
        assert_eq!(field.prev_choice("").as_deref(), Some("L"));
        assert_eq!(field.prev_choice("M").as_deref(), Some("S"));
        assert_eq!(field.prev_choice("S").as_deref(), Some(""));
    }

    #[test]
    fn test_unknown_value_restarts_cycle() {
        let field = FormField::choice("size", "Size", SIZES);
        assert_eq!(field.next_choice("XXL").as_deref(), Some("S"));
    }

    #[test]
    fn test_display_value() {
        let choice = FormField::choice("size", "Size", SIZES);
        assert_eq!(choice.display_value(""), "(select)");
        assert_eq!(choice.display_value("M"), "M");
        assert_eq!(FormField::text("name", "Name").display_value(""), "");
    }
}
