use crate::resolvable::FieldError;
use indexmap::IndexMap;

/// Materialized argument values for one field invocation, keyed by argument
/// name in declaration order.
///
/// Lookups are explicit results; a missing argument is a [`FieldError`] at
/// the API boundary, never a panic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentValues(IndexMap<String, serde_json::Value>);

impl ArgumentValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Like [`ArgumentValues::get`], but a missing argument is an error.
    pub fn require(&self, name: &str) -> Result<&serde_json::Value, FieldError> {
        self.0
            .get(name)
            .ok_or_else(|| FieldError::new(format!("argument `{name}` not provided")))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, serde_json::Value)> for ArgumentValues {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
