use models::errors::ModelError;
use models::game::{self, GamePatch, NewGame};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FieldViolation, ServiceError};

/// Create payload. Fields stay untyped JSON so that a missing or wrong-typed
/// field is reported as a violation alongside the others instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameInput {
    pub name: Option<Value>,
    pub platform: Option<Value>,
    pub genre: Option<Value>,
    pub price_paid: Option<Value>,
}

/// Partial update payload; absent or `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameInput {
    pub name: Option<Value>,
    pub platform: Option<Value>,
    pub genre: Option<Value>,
    pub price_paid: Option<Value>,
}

fn push(violations: &mut Vec<FieldViolation>, e: ModelError) {
    match e {
        ModelError::Validation { field, message } => violations.push(FieldViolation::new(field, message)),
        other => violations.push(FieldViolation::new("body", other.to_string())),
    }
}

fn required_text(violations: &mut Vec<FieldViolation>, field: &'static str, value: Option<Value>) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, "should not be empty"));
            None
        }
        Some(v) => optional_text(violations, field, Some(v)),
    }
}

fn optional_text(violations: &mut Vec<FieldViolation>, field: &'static str, value: Option<Value>) -> Option<String> {
    let v = match value? {
        Value::String(s) => s,
        _ => {
            violations.push(FieldViolation::new(field, "must be a string"));
            return None;
        }
    };
    match game::validate_text(field, &v) {
        Ok(()) => Some(v),
        Err(e) => {
            push(violations, e);
            None
        }
    }
}

fn optional_price(violations: &mut Vec<FieldViolation>, value: Option<Value>) -> Option<rust_decimal::Decimal> {
    let Some(v) = value?.as_f64() else {
        violations.push(FieldViolation::new("pricePaid", "must be a number conforming to the specified constraints"));
        return None;
    };
    match game::validate_price_paid(v) {
        Ok(d) => Some(d),
        Err(e) => {
            push(violations, e);
            None
        }
    }
}

impl CreateGameInput {
    /// Check every field and collect all violations.
    pub fn validate(self) -> Result<NewGame, ServiceError> {
        let mut violations = Vec::new();
        let name = required_text(&mut violations, "name", self.name);
        let platform = required_text(&mut violations, "platform", self.platform);
        let genre = required_text(&mut violations, "genre", self.genre);
        let price_paid = match self.price_paid {
            None => {
                violations.push(FieldViolation::new("pricePaid", "should not be empty"));
                None
            }
            some => optional_price(&mut violations, some),
        };

        match (name, platform, genre, price_paid) {
            (Some(name), Some(platform), Some(genre), Some(price_paid)) if violations.is_empty() => {
                Ok(NewGame { name, platform, genre, price_paid })
            }
            _ => Err(ServiceError::Validation(violations)),
        }
    }
}

impl UpdateGameInput {
    pub fn validate(self) -> Result<GamePatch, ServiceError> {
        let mut violations = Vec::new();
        let patch = GamePatch {
            name: optional_text(&mut violations, "name", self.name),
            platform: optional_text(&mut violations, "platform", self.platform),
            genre: optional_text(&mut violations, "genre", self.genre),
            price_paid: optional_price(&mut violations, self.price_paid),
        };
        if violations.is_empty() { Ok(patch) } else { Err(ServiceError::Validation(violations)) }
    }
}
