//! Shared discriminator extraction for polymorphic resource families.

use serde_json::Value;

use crate::error::DecodeError;

/// Read the integer discriminator out of a raw resource value.
///
/// `type_i` wins when present; otherwise the `type` string code is
/// resolved through the family registry via `resolve_name`.
/// Backfill `type_i` when only the string discriminator was present, so
/// the variant schemas (which require it) decode uniformly.
pub(crate) fn normalize(value: &mut Value, code: i64) {
    if value.get("type_i").is_none() {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("type_i".to_string(), code.into());
        }
    }
}

pub(crate) fn discriminator(
    value: &Value,
    resolve_name: impl Fn(&str) -> Option<i64>,
) -> Result<i64, DecodeError> {
    if let Some(code) = value.get("type_i").and_then(Value::as_i64) {
        return Ok(code);
    }
    value
        .get("type")
        .and_then(Value::as_str)
        .and_then(resolve_name)
        .ok_or_else(|| {
            DecodeError::Malformed(<serde_json::Error as serde::de::Error>::custom(
                "resource carries no usable type_i/type discriminator",
            ))
        })
}
