//! Call parameters and the required-parameter binder

use std::collections::BTreeMap;

use bytes::Bytes;
use serde_json::Value;

use super::descriptor::MethodDescriptor;
use super::error::ApiError;

/// A scalar (or repeated) query/path parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl ParamValue {
    /// Values as they appear on the wire; lists expand to one entry per item.
    pub fn to_wire_values(&self) -> Vec<String> {
        match self {
            ParamValue::String(s) => vec![s.clone()],
            ParamValue::Bool(b) => vec![b.to_string()],
            ParamValue::Int(i) => vec![i.to_string()],
            ParamValue::List(items) => items.clone(),
        }
    }

    /// Single rendering used for path substitution (lists are comma-joined).
    pub fn to_path_value(&self) -> String {
        match self {
            ParamValue::List(items) => items.join(","),
            other => other.to_wire_values().concat(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::String(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

/// Binary payload for upload-capable methods.
#[derive(Debug, Clone)]
pub struct Media {
    pub mime_type: String,
    pub body: Bytes,
}

impl Media {
    pub fn new(mime_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            mime_type: mime_type.into(),
            body: body.into(),
        }
    }

    pub fn len(&self) -> u64 {
        self.body.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Caller-supplied parameters for one call.
///
/// Scalar parameters live in a sorted map so the resolved query string is
/// stable. The request body and media payload are held in reserved slots and
/// never leak into the query.
#[derive(Debug, Clone, Default)]
pub struct CallParams {
    values: BTreeMap<String, ParamValue>,
    resource: Option<Value>,
    media: Option<Media>,
}

impl CallParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a parameter only if the caller has not already provided it.
    pub fn set_default(&mut self, name: &str, value: impl Into<ParamValue>) {
        if !self.values.contains_key(name) {
            self.values.insert(name.to_string(), value.into());
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    /// Attach the JSON request body.
    pub fn resource(mut self, body: Value) -> Self {
        self.resource = Some(body);
        self
    }

    /// Attach a media payload.
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    pub fn resource_body(&self) -> Option<&Value> {
        self.resource.as_ref()
    }

    pub fn media_body(&self) -> Option<&Media> {
        self.media.as_ref()
    }

    pub fn values(&self) -> &BTreeMap<String, ParamValue> {
        &self.values
    }

    /// Split into scalar values, resource and media.
    pub fn into_parts(self) -> (BTreeMap<String, ParamValue>, Option<Value>, Option<Media>) {
        (self.values, self.resource, self.media)
    }
}

/// Check that every required parameter of `descriptor` is present.
pub fn bind(descriptor: &MethodDescriptor, params: &CallParams) -> Result<(), ApiError> {
    let missing: Vec<String> = descriptor
        .required_params
        .iter()
        .filter(|name| !params.contains(name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::MissingParameter {
            method: descriptor.id,
            names: missing,
        })
    }
}
