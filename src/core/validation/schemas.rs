//! Per-resource schemas and their typed results

use super::{Field, Rule, Schema, parse_date, take_string};
use crate::core::models::{CommentDraft, PostDraft, Registration, TodoDraft, TodoStatus};
use crate::utils::error::{BoardError, Result};
use serde_json::{Map, Value};

const TODO_STATUSES: &[&str] = &["Incomplete", "Working", "Complete"];

pub static USER_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("firstName", Rule::String),
        Field::required("lastName", Rule::String),
        Field::required("email", Rule::Email),
        Field::required("password", Rule::String),
        Field::nullable("avatar", Rule::String),
        Field::optional("date", Rule::Date),
    ],
};

pub static TODO_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("title", Rule::String),
        Field::optional("description", Rule::String),
        Field::optional("status", Rule::OneOf(TODO_STATUSES)),
        Field::required("owner", Rule::String),
    ],
};

pub static POST_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("title", Rule::String),
        Field::required("description", Rule::String),
        Field::required("author", Rule::String),
        Field::optional("comments", Rule::Array),
    ],
};

pub static COMMENT_SCHEMA: Schema = Schema {
    fields: &[
        Field::required("text", Rule::String),
        Field::required("author", Rule::String),
    ],
};

/// Validate a registration body
pub fn validate_registration(body: &Value) -> Result<Registration> {
    let mut map = USER_SCHEMA.validate(body)?;
    let date = map.get("date").and_then(parse_date);
    Ok(Registration {
        email: required(&mut map, "email")?,
        password: required(&mut map, "password")?,
        first_name: required(&mut map, "firstName")?,
        last_name: required(&mut map, "lastName")?,
        avatar: take_string(&mut map, "avatar"),
        date,
    })
}

/// Validate a todo body on behalf of `owner`
///
/// The owner is stamped onto the body before checking, so a client-supplied
/// `owner` never survives.
pub fn validate_todo(body: Value, owner: &str) -> Result<TodoDraft> {
    let mut map = TODO_SCHEMA.validate(&with_key(body, "owner", owner))?;
    let status = match take_string(&mut map, "status") {
        Some(status) => Some(
            status
                .parse::<TodoStatus>()
                .map_err(|e| BoardError::validation("status", e))?,
        ),
        None => None,
    };
    Ok(TodoDraft {
        title: required(&mut map, "title")?,
        description: take_string(&mut map, "description"),
        status,
    })
}

/// Validate a post body on behalf of `author`
pub fn validate_post(body: Value, author: &str) -> Result<PostDraft> {
    let mut map = POST_SCHEMA.validate(&with_key(body, "author", author))?;
    Ok(PostDraft {
        title: required(&mut map, "title")?,
        description: required(&mut map, "description")?,
    })
}

/// Validate a comment body on behalf of `author`
pub fn validate_comment(body: Value, author: &str) -> Result<CommentDraft> {
    let mut map = COMMENT_SCHEMA.validate(&with_key(body, "author", author))?;
    Ok(CommentDraft {
        text: required(&mut map, "text")?,
    })
}

fn with_key(mut body: Value, key: &str, value: &str) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    body
}

fn required(map: &mut Map<String, Value>, key: &str) -> Result<String> {
    take_string(map, key)
        .ok_or_else(|| BoardError::validation(key, format!("\"{}\" is required", key)))
}
