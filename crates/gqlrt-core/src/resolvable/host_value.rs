use std::any::Any;
use std::sync::Arc;

/// A runtime value flowing between field resolvers.
///
/// Leaves are plain JSON-shaped values; composite results are
/// [`HostObject`]s carrying the concrete schema type name plus opaque host
/// state for nested capabilities to resolve against.
#[derive(Clone)]
pub enum HostValue {
    Null,
    Leaf(serde_json::Value),
    List(Vec<HostValue>),
    Object(HostObject),
}

impl HostValue {
    pub fn leaf(value: impl Into<serde_json::Value>) -> HostValue {
        HostValue::Leaf(value.into())
    }

    pub fn list(values: impl IntoIterator<Item = HostValue>) -> HostValue {
        HostValue::List(values.into_iter().collect())
    }

    pub fn object(
        type_name: impl Into<String>,
        state: impl Any + Send + Sync,
    ) -> HostValue {
        HostValue::Object(HostObject {
            type_name: type_name.into(),
            state: Arc::new(state),
        })
    }

    /// The concrete object type name, when this value is an object.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            HostValue::Object(object) => Some(object.type_name()),
            _ => None,
        }
    }

    /// Downcasts the state of an object value.
    pub fn state<T: 'static>(&self) -> Option<&T> {
        match self {
            HostValue::Object(object) => object.state(),
            _ => None,
        }
    }
}

impl std::fmt::Debug for HostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostValue::Null => write!(f, "Null"),
            HostValue::Leaf(value) => write!(f, "Leaf({value})"),
            HostValue::List(values) => {
                f.debug_tuple("List").field(&values.len()).finish()
            }
            HostValue::Object(object) => {
                f.debug_tuple("Object").field(&object.type_name).finish()
            }
        }
    }
}

/// A typed object handle: the dynamic, concrete type name of the value
/// (never an interface or union name) plus opaque host state.
#[derive(Clone)]
pub struct HostObject {
    pub(crate) type_name: String,
    pub(crate) state: Arc<dyn Any + Send + Sync>,
}

impl HostObject {
    pub fn new(type_name: impl Into<String>, state: impl Any + Send + Sync) -> Self {
        Self {
            type_name: type_name.into(),
            state: Arc::new(state),
        }
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn state<T: 'static>(&self) -> Option<&T> {
        self.state.downcast_ref::<T>()
    }
}

impl std::fmt::Debug for HostObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostObject")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
