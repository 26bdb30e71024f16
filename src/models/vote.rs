use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vote {
    pub id: i32,
    pub nota: i32,
    pub origem: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct NewVote {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

/// A satisfaction score that is known to lie in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i64) -> Result<Self, AppError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as i32))
        } else {
            Err(AppError::InvalidRating)
        }
    }

    /// Accepts JSON numbers with no fractional part (`4` and `4.0`).
    /// Strings, booleans and `4.5` are rejected.
    pub fn from_json(value: Option<&Value>) -> Result<Self, AppError> {
        let Some(Value::Number(n)) = value else {
            return Err(AppError::InvalidRating);
        };

        if let Some(i) = n.as_i64() {
            return Self::new(i);
        }

        match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => {
                if f < f64::from(Self::MIN) || f > f64::from(Self::MAX) {
                    return Err(AppError::InvalidRating);
                }
                Self::new(f as i64)
            }
            _ => Err(AppError::InvalidRating),
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VotePayload {
    #[serde(default)]
    pub nota: Option<Value>,
    #[serde(default)]
    pub origem: Option<Value>,
}

impl VotePayload {
    /// Reads a `/save` body. A body that is not declared as JSON, is empty,
    /// or is not a JSON object carries no `nota`, so it yields an empty
    /// payload. Only unparsable JSON is a `BadRequest`.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, AppError> {
        if !content_type.is_some_and(is_json_content_type) {
            return Ok(Self::default());
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("JSON inválido: {}", e)))?;

        let Value::Object(mut fields) = value else {
            return Ok(Self::default());
        };

        Ok(Self {
            nota: fields.remove("nota"),
            origem: fields.remove("origem"),
        })
    }

    pub fn into_parts(self) -> Result<(Rating, Option<String>), AppError> {
        let rating = Rating::from_json(self.nota.as_ref())?;
        Ok((rating, normalize_origem(self.origem)))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

// Falsy values (null, false, 0, "") mean "no origin".
fn normalize_origem(origem: Option<Value>) -> Option<String> {
    match origem? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".into()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
