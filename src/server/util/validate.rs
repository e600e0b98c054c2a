//! Field-level validation of JSON request payloads.
//!
//! `PayloadReader` pulls typed values out of a JSON object one field at a time and
//! records a message for every field that is missing or malformed, so a single response
//! can report all problems at once. Services add database-backed checks (uniqueness,
//! referenced record exists) to the same `FieldErrors` before deciding the outcome.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::{
    model::api::FieldErrorsDto,
    server::{model::resource::Resource, util::hyperlink::parse_hyperlink},
};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_BOOLEAN: &str = "Must be a valid boolean.";
pub const INVALID_DATETIME: &str = "Datetime has wrong format. Use one of these formats instead: YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z].";
pub const NO_URL_MATCH: &str = "Invalid hyperlink - No URL match.";
pub const OBJECT_DOES_NOT_EXIST: &str = "Invalid hyperlink - Object does not exist.";

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation messages keyed by field name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors holding one message under `non_field_errors`.
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(NON_FIELD_ERRORS, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_dto(self) -> FieldErrorsDto {
        FieldErrorsDto(self.0)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}: {}", field, messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Reads typed fields out of a JSON object, collecting validation errors.
///
/// Every accessor returns `None` when the field is unusable and records why. Optional
/// accessors also return `None`, without an error, when the field is absent.
pub struct PayloadReader<'a> {
    body: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> PayloadReader<'a> {
    pub fn new(body: &'a Map<String, Value>) -> Self {
        Self {
            body,
            errors: FieldErrors::new(),
        }
    }

    /// Records an error against `field`.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Ends validation.
    ///
    /// # Arguments
    /// - `value` - The params assembled from the fields read, `None` when any was missing
    ///
    /// # Returns
    /// - `Ok(T)` - No errors were recorded
    /// - `Err(FieldErrors)` - At least one field failed validation
    pub fn finish<T>(self, value: Option<T>) -> Result<T, FieldErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            Some(_) => Err(self.errors),
            None if self.errors.is_empty() => Err(FieldErrors::non_field("Invalid data.")),
            None => Err(self.errors),
        }
    }

    /// Non-null value of a required field.
    fn required(&mut self, field: &str) -> Option<&'a Value> {
        match self.body.get(field) {
            None => {
                self.reject(field, REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.reject(field, NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Non-null value of an optional field; absent fields yield `None` without error.
    fn optional(&mut self, field: &str) -> Option<&'a Value> {
        match self.body.get(field) {
            None => None,
            Some(Value::Null) => {
                self.reject(field, NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Required, non-blank text of at most `max_length` characters, trimmed.
    pub fn text(&mut self, field: &str, max_length: usize) -> Option<String> {
        let raw = match self.required(field)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => {
                self.reject(field, INVALID_STRING);
                return None;
            }
        };

        let value = raw.trim();
        if value.is_empty() {
            self.reject(field, NOT_BLANK);
            return None;
        }
        if value.chars().count() > max_length {
            self.reject(
                field,
                format!("Ensure this field has no more than {} characters.", max_length),
            );
            return None;
        }

        Some(value.to_string())
    }

    /// Required 32-bit integer. Integral floats and numeric strings are accepted.
    pub fn integer(&mut self, field: &str) -> Option<i32> {
        let value = self.required(field)?;

        let Some(number) = integer_value(value) else {
            self.reject(field, INVALID_INTEGER);
            return None;
        };

        match i32::try_from(number) {
            Ok(number) => Some(number),
            Err(_) if number > 0 => {
                self.reject(
                    field,
                    format!("Ensure this value is less than or equal to {}.", i32::MAX),
                );
                None
            }
            Err(_) => {
                self.reject(
                    field,
                    format!("Ensure this value is greater than or equal to {}.", i32::MIN),
                );
                None
            }
        }
    }

    /// Optional boolean.
    pub fn optional_boolean(&mut self, field: &str) -> Option<bool> {
        let value = self.optional(field)?;

        let parsed = match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
                "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
                _ => None,
            },
            _ => None,
        };

        if parsed.is_none() {
            self.reject(field, INVALID_BOOLEAN);
        }
        parsed
    }

    /// Required date-time in RFC 3339, naive ISO 8601 (taken as UTC) or bare date form.
    pub fn datetime(&mut self, field: &str) -> Option<DateTime<Utc>> {
        let parsed = match self.required(field)? {
            Value::String(s) => parse_datetime(s.trim()),
            _ => None,
        };

        if parsed.is_none() {
            self.reject(field, INVALID_DATETIME);
        }
        parsed
    }

    /// Optional string restricted to `choices`.
    pub fn optional_choice(&mut self, field: &str, choices: &[&str]) -> Option<String> {
        let value = self.optional(field)?;

        let input = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if choices.contains(&input.as_str()) {
            Some(input)
        } else {
            self.reject(field, format!("\"{}\" is not a valid choice.", input));
            None
        }
    }

    /// Required hyperlink to a record of `resource`, returning the referenced id.
    ///
    /// Only the URL shape is checked here; whether the record exists is up to the caller.
    pub fn hyperlink(&mut self, field: &str, resource: Resource) -> Option<i32> {
        let value = self.required(field)?;

        let Value::String(link) = value else {
            self.reject(
                field,
                format!(
                    "Incorrect type. Expected URL string, received {}.",
                    json_type_name(value)
                ),
            );
            return None;
        };

        let id = parse_hyperlink(link.trim(), resource);
        if id.is_none() {
            self.reject(field, NO_URL_MATCH);
        }
        id
    }
}

fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// JSON type name used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
