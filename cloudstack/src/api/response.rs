//! Response handling utilities for CloudStack API

use super::ApiError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Error payload the management server puts inside the response envelope
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorPayload {
    errorcode: i32,
    cserrorcode: i32,
    errortext: String,
}

pub struct ResponseDecoder;

impl ResponseDecoder {
    /// Parse a response body and strip the `<command>response` envelope.
    ///
    /// Some commands answer under a different key, so a lone key of any name
    /// is accepted as well. An error payload inside the envelope is turned
    /// into [`ApiError::ServerError`].
    pub fn extract_payload(command: &str, body: &str) -> Result<Value, ApiError> {
        let value: Value = serde_json::from_str(body).map_err(|e| {
            tracing::error!("Failed to parse response to {}: {}, body: {}", command, e, body);
            ApiError::InvalidJson {
                command: command.to_string(),
                source: e,
            }
        })?;

        let payload = match value {
            Value::Object(mut map) => {
                let key = format!("{}response", command.to_lowercase());
                match map.remove(&key) {
                    Some(payload) => payload,
                    None if map.len() == 1 => map
                        .into_iter()
                        .next()
                        .map(|(_, v)| v)
                        .unwrap_or(Value::Null),
                    None => Value::Object(map),
                }
            }
            other => other,
        };

        if let Some(error) = Self::error_in(&payload) {
            return Err(ApiError::ServerError {
                status: 200,
                error_code: error.errorcode,
                cs_error_code: error.cserrorcode,
                message: error.errortext,
            });
        }

        Ok(payload)
    }

    /// Raw value unwrap: `{"account": {...}}` becomes `{...}`.
    ///
    /// Anything that is not an object with exactly one key is returned as is.
    pub fn unwrap_raw(value: Value) -> Value {
        match value {
            Value::Object(map) if map.len() == 1 => map
                .into_iter()
                .next()
                .map(|(_, v)| v)
                .unwrap_or(Value::Null),
            other => other,
        }
    }

    /// Overlay the keys of `overlay` onto `base`. A non-object overlay
    /// leaves `base` unchanged.
    pub fn merge(base: Value, overlay: Value) -> Value {
        let mut merged = match base {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        match overlay {
            Value::Object(fields) => {
                for (k, v) in fields {
                    merged.insert(k, v);
                }
            }
            Value::Null => {}
            other => {
                tracing::debug!("Ignoring non-object job result: {}", other);
            }
        }

        Value::Object(merged)
    }

    /// Structural decode. A missing payload decodes like an empty object so
    /// every field takes its default.
    pub fn decode<T: DeserializeOwned>(command: &str, payload: Value) -> Result<T, ApiError> {
        let payload = match payload {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        serde_json::from_value(payload).map_err(|e| {
            tracing::error!("Failed to decode response to {}: {}", command, e);
            ApiError::DecodeError {
                command: command.to_string(),
                source: e,
            }
        })
    }

    /// Map a non-2xx response to an error.
    pub fn extract_error(status: u16, text: &str) -> ApiError {
        let payload = serde_json::from_str::<Value>(text)
            .ok()
            .map(Self::unwrap_raw);
        let error = payload.as_ref().and_then(Self::error_in);

        if status == 401 {
            let message = error
                .map(|e| e.errortext)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| text.to_string());
            return ApiError::AuthError(message);
        }

        match error {
            Some(error) => ApiError::ServerError {
                status,
                error_code: error.errorcode,
                cs_error_code: error.cserrorcode,
                message: error.errortext,
            },
            None => ApiError::HttpError {
                status,
                body: text.to_string(),
            },
        }
    }

    fn error_in(payload: &Value) -> Option<ErrorPayload> {
        let map = payload.as_object()?;
        if !map.contains_key("errorcode") || !map.contains_key("errortext") {
            return None;
        }
        serde_json::from_value(payload.clone()).ok()
    }
}
