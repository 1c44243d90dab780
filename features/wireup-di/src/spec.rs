use std::collections::BTreeMap;

use serde::Deserialize;

use crate::errors::ValidationError;

/// A symbolic pointer to another registry entry.
///
/// Spelled `{ ref = "name" }` in configuration, so a literal string that
/// happens to equal a component name is never mistaken for a reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    pub name: String,
}

/// Argument value of a [ComponentSpec]: a literal, or a reference to be
/// substituted with the live instance bound under the referenced name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Reference(Reference),
}

impl Value {
    pub fn reference(name: impl Into<String>) -> Value {
        Value::Reference(Reference { name: name.into() })
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Integer literals widen to `f64`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Value::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Shape of the value, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a float",
            Value::Str(_) => "a string",
            Value::Reference(_) => "a reference",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}
impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}
impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}
impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}
impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

/// Named constructor arguments of a [ComponentSpec]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Arguments(BTreeMap<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Arguments(BTreeMap::new())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn required(&self, name: &'static str) -> Result<&Value, ValidationError> {
        self.get(name)
            .ok_or(ValidationError::MissingArgument { argument: name })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Immutable blueprint for one graph entry: which factory kind to run, and
/// the arguments to feed it. Read once from configuration, never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentSpec {
    pub kind: String,
    #[serde(default)]
    pub args: Arguments,
}

impl ComponentSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        ComponentSpec {
            kind: kind.into(),
            args: Arguments::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args = self.args.with(name, value);
        self
    }
}
