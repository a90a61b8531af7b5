use crate::ast::Ident;
use crate::ast::Value;
use crate::SourcePosition;

/// A directive invocation: `@name(args)`.
///
/// Directive order is significant and preserved by every list of directives
/// in the AST.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub name: Ident,
    pub arguments: Vec<Argument>,
}

impl Directive {
    pub fn location(&self) -> SourcePosition {
        self.name.location
    }

    /// Looks up an argument value by name.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name.name == name)
            .map(|arg| &arg.value)
    }
}

/// A named argument in a directive invocation or field selection:
/// `name: value`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: Ident,
    pub value: Value,
}
