//! Common types and utilities for CloudStack API

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Deref, DerefMut};

/// Response of commands that only report success, e.g. deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SuccessResponse {
    pub displaytext: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub success: bool,
}

/// Response of an asynchronous command: the job handle plus whatever the
/// job produced, merged in once the job succeeded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobResponse<T> {
    #[serde(rename = "jobid", default)]
    pub job_id: String,
    #[serde(rename = "jobstatus", default)]
    pub job_status: i32,
    #[serde(flatten)]
    pub result: T,
}

impl<T> Deref for JobResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.result
    }
}

impl<T> DerefMut for JobResponse<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.result
    }
}

impl<T> JobResponse<T> {
    pub fn into_inner(self) -> T {
        self.result
    }
}

/// Some commands return `success` as the string `"true"`/`"false"`.
pub mod bool_or_string {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum BoolOrString {
            Bool(bool),
            String(String),
            Int(u8),
        }

        match Option::<BoolOrString>::deserialize(deserializer)? {
            Some(BoolOrString::Bool(b)) => Ok(b),
            Some(BoolOrString::String(s)) => match s.as_str() {
                "true" => Ok(true),
                "false" | "" => Ok(false),
                other => Err(serde::de::Error::custom(format!(
                    "expected \"true\" or \"false\", got {:?}",
                    other
                ))),
            },
            Some(BoolOrString::Int(0)) | None => Ok(false),
            Some(BoolOrString::Int(1)) => Ok(true),
            Some(BoolOrString::Int(_)) => Err(serde::de::Error::custom("expected 0 or 1")),
        }
    }
}

/// Id-like fields that some server versions emit as a number.
pub mod string_or_number {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StringOrNumber {
            String(String),
            Number(serde_json::Number),
        }

        match Option::<StringOrNumber>::deserialize(deserializer)? {
            Some(StringOrNumber::String(s)) => Ok(s),
            Some(StringOrNumber::Number(n)) => Ok(number_to_id(&n)),
            None => Ok(String::new()),
        }
    }

    fn number_to_id(n: &serde_json::Number) -> String {
        if let Some(i) = n.as_i64() {
            return i.to_string();
        }
        if let Some(u) = n.as_u64() {
            return u.to_string();
        }
        match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
            _ => n.to_string(),
        }
    }
}
