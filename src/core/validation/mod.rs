//! Request body validation
//!
//! Bodies are checked against a declarative [`Schema`] before anything is
//! persisted. Every problem is collected as a [`FieldError`]; callers surface
//! the first one as a 400 with the message verbatim. Messages follow the
//! familiar `"field" is required` phrasing so existing clients can match on
//! them.

mod schemas;

pub use schemas::{
    COMMENT_SCHEMA, POST_SCHEMA, TODO_SCHEMA, USER_SCHEMA, validate_comment, validate_post,
    validate_registration, validate_todo,
};

use crate::utils::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Whether a key must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    /// Optional, and `null` or `""` are accepted as "no value"
    Nullable,
}

/// What a present value must look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty string
    String,
    /// Non-empty string shaped like an email address
    Email,
    /// String drawn from a fixed set
    OneOf(&'static [&'static str]),
    Array,
    /// RFC 3339 string or epoch milliseconds
    Date,
}

/// One declared key of a body
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
    pub presence: Presence,
}

impl Field {
    pub const fn required(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            presence: Presence::Required,
        }
    }

    pub const fn optional(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            presence: Presence::Optional,
        }
    }

    pub const fn nullable(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            presence: Presence::Nullable,
        }
    }
}

/// A single rejected key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: String) -> Self {
        Self {
            field: field.to_string(),
            message,
        }
    }
}

impl From<FieldError> for BoardError {
    fn from(error: FieldError) -> Self {
        BoardError::validation(error.field, error.message)
    }
}

/// Declarative object schema; keys not listed are rejected
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [Field],
}

impl Schema {
    /// Check `body` and return its object map, or every problem found.
    ///
    /// Declared keys are checked in declaration order, unknown keys after.
    pub fn check(&self, body: &Value) -> std::result::Result<Map<String, Value>, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::new(
                "value",
                "\"value\" must be of type object".to_string(),
            )]);
        };

        let mut errors = Vec::new();

        for field in self.fields {
            if let Some(error) = check_field(field, object.get(field.name)) {
                errors.push(error);
            }
        }

        for key in object.keys() {
            if !self.fields.iter().any(|f| f.name == key) {
                errors.push(FieldError::new(key, format!("\"{}\" is not allowed", key)));
            }
        }

        if errors.is_empty() {
            Ok(object.clone())
        } else {
            Err(errors)
        }
    }

    /// Like [`Schema::check`], surfacing only the first problem
    pub fn validate(&self, body: &Value) -> Result<Map<String, Value>> {
        self.check(body).map_err(|errors| {
            errors
                .into_iter()
                .next()
                .map(BoardError::from)
                .unwrap_or_else(|| BoardError::internal("validation failed without a reason"))
        })
    }
}

fn check_field(field: &Field, value: Option<&Value>) -> Option<FieldError> {
    let name = field.name;
    let value = match (value, field.presence) {
        (None, Presence::Required) => {
            return Some(FieldError::new(name, format!("\"{}\" is required", name)));
        }
        (None, _) => return None,
        (Some(Value::Null), Presence::Nullable) => return None,
        (Some(Value::String(s)), Presence::Nullable) if s.is_empty() => return None,
        (Some(value), _) => value,
    };

    match field.rule {
        Rule::String | Rule::Email | Rule::OneOf(_) => {
            let Some(text) = value.as_str() else {
                return Some(FieldError::new(name, format!("\"{}\" must be a string", name)));
            };
            if text.is_empty() {
                return Some(FieldError::new(
                    name,
                    format!("\"{}\" is not allowed to be empty", name),
                ));
            }
            match field.rule {
                Rule::Email if !is_valid_email(text) => Some(FieldError::new(
                    name,
                    format!("\"{}\" must be a valid email", name),
                )),
                Rule::OneOf(allowed) if !allowed.contains(&text) => Some(FieldError::new(
                    name,
                    format!("\"{}\" must be one of [{}]", name, allowed.join(", ")),
                )),
                _ => None,
            }
        }
        Rule::Array if !value.is_array() => Some(FieldError::new(
            name,
            format!("\"{}\" must be an array", name),
        )),
        Rule::Array => None,
        Rule::Date if parse_date(value).is_none() => Some(FieldError::new(
            name,
            format!("\"{}\" must be a valid date", name),
        )),
        Rule::Date => None,
    }
}

/// Email shape check used by [`Rule::Email`]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Interpret a JSON value as a timestamp
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

/// Pull a string field out of a checked map
pub(crate) fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}
