use crate::ast::Ident;
use crate::ast::ValueError;
use crate::SourcePosition;
use std::collections::HashMap;

/// Variable bindings supplied with an operation, keyed by variable name
/// (without the `$` sigil).
pub type VariableValues = HashMap<String, serde_json::Value>;

/// A literal value as written in a document.
///
/// Immutable once parsed. A value parsed in constant mode can never contain a
/// [`Value::Variable`] node; [`Value::resolve_const`] enforces the same
/// property at materialization time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Scalar(ScalarValue),
    List(ListValue),
    Object(ObjectValue),
    Null(SourcePosition),
    Variable(VariableRef),
}

/// Which scalar token a [`ScalarValue`] was lexed from.
///
/// `Name` covers `true`, `false`, and enum values; which one is decided at
/// materialization time, the way the token text is preserved in source form
/// until then.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Name,
}

/// A single-token literal: int, float, string, boolean, or enum value.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarValue {
    pub kind: ScalarKind,
    /// Raw source text for `Int`/`Float`/`Name`; unescaped content for
    /// `String`.
    pub text: String,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListValue {
    pub entries: Vec<Value>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValue {
    pub fields: Vec<ObjectValueField>,
    pub location: SourcePosition,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectValueField {
    pub name: Ident,
    pub value: Value,
}

/// A `$name` reference to an operation variable.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableRef {
    pub name: String,
    pub location: SourcePosition,
}

impl Value {
    /// Builds a [`Value::List`] from already-parsed entries.
    pub fn list(entries: Vec<Value>, location: SourcePosition) -> Value {
        Value::List(ListValue { entries, location })
    }

    /// Builds a [`Value::Object`] from already-parsed `name: value` pairs.
    pub fn object(fields: Vec<(Ident, Value)>, location: SourcePosition) -> Value {
        Value::Object(ObjectValue {
            fields: fields
                .into_iter()
                .map(|(name, value)| ObjectValueField { name, value })
                .collect(),
            location,
        })
    }

    pub fn location(&self) -> SourcePosition {
        match self {
            Value::Scalar(scalar) => scalar.location,
            Value::List(list) => list.location,
            Value::Object(object) => object.location,
            Value::Null(location) => *location,
            Value::Variable(variable) => variable.location,
        }
    }

    /// Materializes this literal to a runtime value, resolving variable
    /// references against `vars`.
    ///
    /// Referencing a variable with no binding is an error, not a silent
    /// `null`.
    pub fn resolve(&self, vars: &VariableValues) -> Result<serde_json::Value, ValueError> {
        self.resolve_impl(Some(vars))
    }

    /// Materializes this literal in constant mode: any variable reference is
    /// an error.
    pub fn resolve_const(&self) -> Result<serde_json::Value, ValueError> {
        self.resolve_impl(None)
    }

    fn resolve_impl(
        &self,
        vars: Option<&VariableValues>,
    ) -> Result<serde_json::Value, ValueError> {
        match self {
            Value::Scalar(scalar) => scalar.resolve(),

            Value::List(list) => {
                let mut entries = Vec::with_capacity(list.entries.len());
                for entry in &list.entries {
                    entries.push(entry.resolve_impl(vars)?);
                }
                Ok(serde_json::Value::Array(entries))
            }

            Value::Object(object) => {
                let mut fields = serde_json::Map::with_capacity(object.fields.len());
                for field in &object.fields {
                    fields.insert(field.name.name.clone(), field.value.resolve_impl(vars)?);
                }
                Ok(serde_json::Value::Object(fields))
            }

            Value::Null(_) => Ok(serde_json::Value::Null),

            Value::Variable(variable) => {
                let vars = vars.ok_or_else(|| ValueError::VariableInConstValue {
                    name: variable.name.clone(),
                    location: variable.location,
                })?;
                match vars.get(variable.name.as_str()) {
                    Some(value) => Ok(value.clone()),
                    None => Err(ValueError::UndefinedVariable {
                        name: variable.name.clone(),
                        location: variable.location,
                    }),
                }
            }
        }
    }
}

impl ScalarValue {
    fn resolve(&self) -> Result<serde_json::Value, ValueError> {
        match self.kind {
            ScalarKind::Int => {
                let parsed: i64 = self.text.parse().map_err(|_| {
                    ValueError::MalformedNumber {
                        text: self.text.clone(),
                        location: self.location,
                    }
                })?;
                Ok(serde_json::Value::from(parsed))
            }
            ScalarKind::Float => {
                let parsed: f64 = self.text.parse().map_err(|_| {
                    ValueError::MalformedNumber {
                        text: self.text.clone(),
                        location: self.location,
                    }
                })?;
                Ok(serde_json::Value::from(parsed))
            }
            ScalarKind::String => Ok(serde_json::Value::String(self.text.clone())),
            ScalarKind::Name => match self.text.as_str() {
                "true" => Ok(serde_json::Value::Bool(true)),
                "false" => Ok(serde_json::Value::Bool(false)),
                // Enum values materialize as their name.
                _ => Ok(serde_json::Value::String(self.text.clone())),
            },
        }
    }
}

fn write_escaped_string(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    write!(f, "\"")?;
    for ch in text.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            other => write!(f, "{other}")?,
        }
    }
    write!(f, "\"")
}

impl std::fmt::Display for Value {
    /// Prints the canonical source form of this literal.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(scalar) => match scalar.kind {
                ScalarKind::String => write_escaped_string(f, &scalar.text),
                _ => write!(f, "{}", scalar.text),
            },

            Value::List(list) => {
                write!(f, "[")?;
                for (idx, entry) in list.entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                write!(f, "]")
            }

            Value::Object(object) => {
                write!(f, "{{")?;
                for (idx, field) in object.fields.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                write!(f, "}}")
            }

            Value::Null(_) => write!(f, "null"),

            Value::Variable(variable) => write!(f, "${}", variable.name),
        }
    }
}
