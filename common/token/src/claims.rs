use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{TokenError, TokenResult};

/// Reserved claim stamped on every signed token.
pub const ISSUED_AT: &str = "iat";

/// Open payload carried by a token: string keys to arbitrary JSON values.
pub type Claims = Map<String, Value>;

/// Serialize a caller payload into a claims map. Only JSON objects are
/// valid payloads.
pub fn to_claims<T>(payload: &T) -> TokenResult<Claims>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(TokenError::Encoding(format!(
            "payload must serialize to a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(err) => Err(TokenError::Encoding(err.to_string())),
    }
}

/// Deserialize verified claims into a caller-defined shape.
pub fn from_claims<T>(claims: Claims) -> TokenResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(claims))
        .map_err(|err| TokenError::InvalidClaims(err.to_string()))
}

/// Overwrite `iat` with the given unix timestamp.
pub(crate) fn stamp_issued_at(claims: &mut Claims, issued_at: i64) {
    claims.insert(ISSUED_AT.to_string(), Value::from(issued_at));
}

/// Read `iat` back as a timestamp. Returns `None` when the claim is absent,
/// not an integer, or out of range.
pub fn issued_at(claims: &Claims) -> Option<DateTime<Utc>> {
    let seconds = claims.get(ISSUED_AT)?.as_i64()?;
    Utc.timestamp_opt(seconds, 0).single()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
