//! Field specifications - how one property of a block is edited.

use serde::Serialize;
use serde_json::Value;

// =============================================================================
// FieldKind
// =============================================================================

/// The editing widget the host shows for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
    /// Single choice from an option list.
    Select,
    /// Exclusive choice rendered as radio buttons (used for booleans).
    Radio,
}

// =============================================================================
// FieldOption
// =============================================================================

/// One `(label, value)` pair of a choice field.
///
/// Values are JSON so a single option list can carry strings, numbers, or
/// booleans - heading levels are numbers, autoplay is a boolean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOption {
    pub label: &'static str,
    pub value: Value,
}

impl FieldOption {
    /// Create an option.
    pub fn new(label: &'static str, value: impl Into<Value>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

// =============================================================================
// FieldSpec
// =============================================================================

/// Schema entry for one editable property of a block type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Human-facing label override; the host derives one from the field
    /// name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Ordered option list; empty for free-text kinds.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl FieldSpec {
    /// Single-line free text field.
    pub fn text() -> Self {
        Self {
            kind: FieldKind::Text,
            label: None,
            options: Vec::new(),
        }
    }

    /// Multi-line free text field.
    pub fn text_area() -> Self {
        Self {
            kind: FieldKind::TextArea,
            label: None,
            options: Vec::new(),
        }
    }

    /// Single-choice field with the given options.
    pub fn select(options: Vec<FieldOption>) -> Self {
        Self {
            kind: FieldKind::Select,
            label: None,
            options,
        }
    }

    /// Radio-choice field with the given options.
    pub fn radio(options: Vec<FieldOption>) -> Self {
        Self {
            kind: FieldKind::Radio,
            label: None,
            options,
        }
    }

    /// Boolean yes/no radio field.
    pub fn yes_no() -> Self {
        Self::radio(vec![
            FieldOption::new("Yes", true),
            FieldOption::new("No", false),
        ])
    }

    /// Attach a label override (builder form).
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Whether `value` is inside this field's declared domain.
    ///
    /// Free-text fields accept any string or number by design; choice
    /// fields accept exactly their declared option values.
    pub fn allows(&self, value: &Value) -> bool {
        match self.kind {
            FieldKind::Text | FieldKind::TextArea => {
                matches!(value, Value::String(_) | Value::Number(_))
            }
            FieldKind::Select | FieldKind::Radio => {
                self.options.iter().any(|opt| &opt.value == value)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_free_text_allows_strings_and_numbers() {
        let spec = FieldSpec::text();
        assert!(spec.allows(&json!("#333")));
        assert!(spec.allows(&json!(1.6)));
        assert!(!spec.allows(&json!(true)));
        assert!(!spec.allows(&json!(null)));
    }

    #[test]
    fn test_select_allows_only_declared_options() {
        let spec = FieldSpec::select(vec![
            FieldOption::new("H1", 1),
            FieldOption::new("H2", 2),
        ]);
        assert!(spec.allows(&json!(1)));
        assert!(spec.allows(&json!(2)));
        assert!(!spec.allows(&json!(3)));
        assert!(!spec.allows(&json!("1")));
    }

    #[test]
    fn test_yes_no() {
        let spec = FieldSpec::yes_no();
        assert_eq!(spec.kind, FieldKind::Radio);
        assert!(spec.allows(&json!(true)));
        assert!(spec.allows(&json!(false)));
        assert!(!spec.allows(&json!("yes")));
    }

    #[test]
    fn test_with_label() {
        let spec = FieldSpec::text_area().with_label("Sponsors (one per line)");
        assert_eq!(spec.label, Some("Sponsors (one per line)"));
    }
}
