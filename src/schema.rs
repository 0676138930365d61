//! Declarative field constraints for calculator forms.
//!
//! A [`FormSchema`] is a table of [`FieldRule`]s. Calculators declare one and
//! the view-model checks every submitted value against it before the formula
//! is invoked. Values that fail never reach the formula.
//!
//! # Example
//!
//! ```rust
//! use finlit_sdk::schema::{FieldRule, FormSchema};
//! let schema = FormSchema::new("fd")
//!     .field(FieldRule::new("principal", "Principal").min(1000.0).max(1e9))
//!     .field(FieldRule::new("years", "Tenure").min(1.0).max(25.0).whole());
//! assert!(schema.validate(&[("principal", 5000.0), ("years", 3.0)]).is_ok());
//! ```

use crate::error::{FieldError, FinlitError, Result, ValidationErrors};

/// Constraint on a single numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
    pub whole: bool,
    /// One value per list item; each is checked and numbered from 1.
    pub repeated: bool,
}

impl FieldRule {
    /// A required field with no bounds.
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            min: None,
            max: None,
            required: true,
            whole: false,
            repeated: false,
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Mark the field optional: a missing value is accepted.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require a whole number (tenures, ages, counts).
    pub fn whole(mut self) -> Self {
        self.whole = true;
        self
    }

    /// Accept any number of values under this name (line items). An empty
    /// list passes.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Check one value. `None` means the field was not supplied.
    pub fn check(&self, value: Option<f64>) -> Option<String> {
        self.check_as(self.label, value)
    }

    fn check_as(&self, label: &str, value: Option<f64>) -> Option<String> {
        let v = match value {
            Some(v) if v.is_finite() => v,
            Some(_) => return Some(format!("{} must be a number", label)),
            None if self.required => return Some(format!("{} is required", label)),
            None => return None,
        };
        if let Some(min) = self.min {
            if v < min {
                return Some(format!("{} must be at least {}", label, min));
            }
        }
        if let Some(max) = self.max {
            if v > max {
                return Some(format!("{} must be at most {}", label, max));
            }
        }
        if self.whole && v.fract() != 0.0 {
            return Some(format!("{} must be a whole number", label));
        }
        None
    }

    /// First failing item of a repeated field, labelled by position
    /// (`"Asset 2 must be a number"`).
    fn check_items(&self, values: &[(&str, f64)]) -> Option<String> {
        values
            .iter()
            .filter(|(name, _)| *name == self.name)
            .enumerate()
            .find_map(|(idx, (_, v))| {
                self.check_as(&format!("{} {}", self.label, idx + 1), Some(*v))
            })
    }
}

/// Ordered table of field rules for one calculator form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field rule.
    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Look up a rule by field name.
    pub fn rule(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|r| r.name == name)
    }

    /// Validate `(field, value)` pairs against every rule.
    ///
    /// Errors are reported in schema order, at most one per field. Values for
    /// fields the schema does not know are ignored. A repeated field reports
    /// its first failing item.
    pub fn validate(&self, values: &[(&str, f64)]) -> std::result::Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|rule| {
                let message = if rule.repeated {
                    rule.check_items(values)
                } else {
                    let value = values
                        .iter()
                        .find(|(name, _)| *name == rule.name)
                        .map(|(_, v)| *v);
                    rule.check(value)
                };
                message.map(|message| FieldError {
                    field: rule.name.to_string(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Same as [`validate`](Self::validate), mapped into the crate error.
    pub fn check(&self, values: &[(&str, f64)]) -> Result<()> {
        self.validate(values).map_err(FinlitError::Validation)
    }
}
