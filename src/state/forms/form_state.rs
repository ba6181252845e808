//! Form values, validation errors, and the editing cursor over a form

use super::catalog::FormKind;
use super::field::FormField;
use super::rules::RuleSet;
use std::collections::BTreeMap;

/// Field name to current value
pub type FormValues = BTreeMap<String, String>;

/// Field name to validation message. A missing entry means "valid or not yet checked".
pub type FormErrors = BTreeMap<String, String>;

/// Values and per-field errors for an arbitrary form shape
#[derive(Debug, Clone)]
pub struct FormController {
    initial: FormValues,
    values: FormValues,
    errors: FormErrors,
    rules: RuleSet,
}

impl FormController {
    pub fn new(initial: FormValues, rules: RuleSet) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FormErrors::new(),
            rules,
        }
    }

    /// Set one field and clear its error. Does not validate.
    pub fn handle_change(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    /// Re-run every rule against the current values, replacing all errors.
    /// Returns true when no rule failed.
    pub fn validate(&mut self) -> bool {
        let errors: FormErrors = self
            .rules
            .iter()
            .filter_map(|(field, rule)| {
                let value = self.values.get(field).map(String::as_str).unwrap_or("");
                rule(value).map(|message| (field.to_string(), message))
            })
            .collect();
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Restore the initial values and clear errors
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value, empty when the field was never set
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

/// An open form: its controller plus which row has focus.
///
/// Rows are the fields in order followed by the submit row.
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub controller: FormController,
    pub active_field_index: usize,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            controller: FormController::new(kind.initial_values(), kind.rules()),
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &'static [FormField] {
        self.kind.fields()
    }

    fn row_count(&self) -> usize {
        self.fields().len() + 1
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.row_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.row_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.row_count() - 1);
    }

    /// Focused field, `None` on the submit row
    pub fn active_field(&self) -> Option<&'static FormField> {
        self.fields().get(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields().len()
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(FormField::is_multiline)
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.active_field().filter(|f| !f.is_choice()) else {
            return;
        };
        let mut value = self.controller.value(field.name).to_string();
        value.push(c);
        self.controller.handle_change(field.name, value);
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self) {
        let Some(field) = self.active_field().filter(|f| !f.is_choice()) else {
            return;
        };
        let mut value = self.controller.value(field.name).to_string();
        if value.pop().is_some() {
            self.controller.handle_change(field.name, value);
        }
    }

    /// Insert a line break into the focused multi-line field
    pub fn push_newline(&mut self) {
        if self.is_active_field_multiline() {
            self.push_char('\n');
        }
    }

    /// Step the focused choice field forwards or backwards
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let current = self.controller.value(field.name);
        let next = if forward {
            field.next_choice(current)
        } else {
            field.prev_choice(current)
        };
        if let Some(next) = next {
            self.controller.handle_change(field.name, next);
        }
    }

    /// Validate; on failure focus the first field with an error
    pub fn validate(&mut self) -> bool {
        if self.controller.validate() {
            return true;
        }
        if let Some(index) = self
            .fields()
            .iter()
            .position(|f| self.controller.error(f.name).is_some())
        {
            self.active_field_index = index;
        }
        false
    }

    /// Snapshot of the values for submission
    pub fn payload(&self) -> FormValues {
        self.controller.values().clone()
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.active_field_index = 0;
    }
}
