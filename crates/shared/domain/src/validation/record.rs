//! Shape pass: field extraction from an untyped JSON record.

use serde_json::{Map, Value};
use validator::Validate;

use super::{Field, Violation, ViolationKind, Violations};

/// A closed set of string values accepted by a field.
pub trait ClosedEnum: Sized + Copy + Default + 'static {
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == value)
    }

    /// `'A' | 'B' | 'C'`
    fn expected() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| format!("'{}'", v.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(field: &str, expected: &str, received: &Value) -> Violation {
    Violation::new(
        field,
        ViolationKind::InvalidType,
        format!("Expected {}, received {}", expected, json_type(received)),
    )
}

/// A JSON object being parsed against a schema.
#[derive(Debug)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> Record<'a> {
    /// Start parsing `value`, which must be a JSON object.
    pub fn new(value: &'a Value) -> Result<Self, Violations> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                violations: Vec::new(),
            }),
            other => Err(Violations::single(invalid_type("", "object", other))),
        }
    }

    /// Present, non-null string. Missing fields report `Required`.
    pub fn required_string(&mut self, field: &'static str) -> String {
        match self.fields.get(field) {
            None => {
                self.reject(Violation::of_kind(field, ViolationKind::Required));
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                self.reject(invalid_type(field, "string", other));
                String::new()
            }
        }
    }

    /// String that may be absent but not null.
    pub fn optional_string(&mut self, field: &'static str) -> Option<String> {
        match self.fields.get(field) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.reject(invalid_type(field, "string", other));
                None
            }
        }
    }

    /// String that may be absent or null.
    pub fn nullable_string(&mut self, field: &'static str) -> Option<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.reject(invalid_type(field, "string", other));
                None
            }
        }
    }

    /// Present member of a closed enumeration.
    pub fn required_enum<E: ClosedEnum>(&mut self, field: &'static str) -> E {
        match self.fields.get(field) {
            None => {
                self.reject(Violation::of_kind(field, ViolationKind::Required));
                E::default()
            }
            Some(Value::String(s)) => match E::from_wire(s) {
                Some(value) => value,
                None => {
                    self.reject(Violation::new(
                        field,
                        ViolationKind::InvalidEnumValue,
                        format!(
                            "Invalid enum value. Expected {}, received '{}'",
                            E::expected(),
                            s
                        ),
                    ));
                    E::default()
                }
            },
            Some(other) => {
                self.reject(invalid_type(field, "string", other));
                E::default()
            }
        }
    }

    fn reject(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn failed(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Run the rule pass on `candidate` and merge both passes.
    ///
    /// Rule violations on fields that already failed the shape pass are
    /// dropped, since they were checked against a placeholder.
    pub fn finish<T: Validate>(self, candidate: T, fields: &[Field]) -> Result<T, Violations> {
        let mut violations = self.shape_violations_in(fields);

        if let Err(errors) = candidate.validate() {
            for (name, field_errors) in errors.field_errors() {
                let name: &str = &name;
                let Some(field) = fields.iter().find(|f| f.attr == name || f.wire == name) else {
                    continue;
                };
                if self.failed(field.wire) {
                    continue;
                }
                for error in field_errors.iter() {
                    let kind = ViolationKind::from_code(&error.code)
                        .unwrap_or(ViolationKind::PatternMismatch);
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| kind.default_message().to_string());
                    violations.push(Violation::new(field.wire, kind, message));
                }
            }
        }

        // Stable: keeps check order within a field.
        violations.sort_by_key(|v| {
            fields
                .iter()
                .position(|f| f.wire == v.field)
                .unwrap_or(usize::MAX)
        });

        match Violations::from_vec(violations) {
            None => Ok(candidate),
            Some(violations) => Err(violations),
        }
    }

    fn shape_violations_in(&self, fields: &[Field]) -> Vec<Violation> {
        self.violations
            .iter()
            .filter(|v| fields.iter().any(|f| f.wire == v.field))
            .cloned()
            .collect()
    }
}
