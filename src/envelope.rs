use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

use crate::error::SweepError;
use crate::store::{Fields, Result};

/// The single recognized envelope field holding the base64 payload.
pub const DATA_FIELD: &str = "data";

/// Wrap a byte payload into the store's textual value representation.
pub fn encode(payload: &[u8]) -> Fields {
    let mut fields = Fields::new();
    fields.insert(DATA_FIELD.into(), Value::String(STANDARD.encode(payload)));
    fields
}

/// Unwrap a stored value back into its byte payload.
///
/// Two failure kinds stay distinguishable: `Malformed` when the envelope field
/// is absent or not a string (shape problem), `Decode` when the field holds
/// text that is not valid base64 (corruption problem). A missing field is
/// never treated as an empty payload.
pub fn decode(path: &str, fields: &Fields) -> Result<Vec<u8>> {
    let encoded = match fields.get(DATA_FIELD) {
        Some(Value::String(s)) => s,
        _ => return Err(SweepError::Malformed(path.to_string())),
    };

    STANDARD.decode(encoded).map_err(|e| SweepError::Decode {
        path: path.to_string(),
        detail: e.to_string(),
    })
}
