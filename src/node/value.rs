use std::collections::BTreeMap;

use crate::{
    foundation::error::{MaskforgeError, MaskforgeResult},
    mask::batch::MaskBatch,
};

/// A type-tagged runtime value crossing the host boundary.
#[derive(Clone, Debug)]
pub enum Value {
    /// Text.
    Str(String),
    /// True/false.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Single float.
    Float(f64),
    /// Float sequence.
    FloatArray(Vec<f64>),
    /// A generated mask batch.
    Mask(MaskBatch),
}

impl Value {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::FloatArray(_) => "float array",
            Self::Mask(_) => "mask",
        }
    }
}

/// Named input values for one node invocation, keyed by declared input name.
#[derive(Clone, Debug, Default)]
pub struct Inputs(BTreeMap<String, Value>);

impl Inputs {
    /// Build an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous entry under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style [`Inputs::insert`].
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    fn get(&self, name: &str) -> MaskforgeResult<&Value> {
        self.0
            .get(name)
            .ok_or_else(|| MaskforgeError::input(format!("missing required input '{name}'")))
    }

    fn mismatch(name: &str, expected: &str, got: &Value) -> MaskforgeError {
        MaskforgeError::input(format!(
            "input '{name}' must be a {expected}, got {}",
            got.kind_name()
        ))
    }

    /// Required text input.
    pub fn str(&self, name: &str) -> MaskforgeResult<&str> {
        match self.get(name)? {
            Value::Str(s) => Ok(s.as_str()),
            other => Err(Self::mismatch(name, "string", other)),
        }
    }

    /// Required boolean input.
    pub fn boolean(&self, name: &str) -> MaskforgeResult<bool> {
        match self.get(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(Self::mismatch(name, "boolean", other)),
        }
    }

    /// Required integer input.
    pub fn int(&self, name: &str) -> MaskforgeResult<i64> {
        match self.get(name)? {
            Value::Int(i) => Ok(*i),
            other => Err(Self::mismatch(name, "int", other)),
        }
    }

    /// Required float-array input.
    ///
    /// A lone [`Value::Float`] is accepted and promoted to a one-element
    /// array, matching how hosts hand single floats to array inputs.
    pub fn float_array(&self, name: &str) -> MaskforgeResult<Vec<f64>> {
        match self.get(name)? {
            Value::FloatArray(values) => Ok(values.clone()),
            Value::Float(v) => Ok(vec![*v]),
            other => Err(Self::mismatch(name, "float array", other)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/value.rs"]
mod tests;
