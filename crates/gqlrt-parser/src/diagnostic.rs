use crate::SourcePosition;

/// Broad classification of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DiagnosticKind {
    /// A grammar or token-level violation.
    Syntax,
    /// A type-name reference that did not resolve against the schema's type
    /// table.
    TypeResolution,
    /// An interface-conformance failure or a duplicate declaration.
    Conformance,
    /// A schema field with no matching host capability. Fatal at build time.
    Binding,
}

/// The uniform structured error form surfaced to callers.
///
/// Every stage of the pipeline (lexing, parsing, linking, conformance
/// checking, binding) reports failures in this shape: a human-readable
/// message, zero or more source locations, and an optional stable rule tag
/// (e.g. `"KnownTypeNames"`).
///
/// Serializable for transports that report errors to clients; the rule tag
/// is a static identifier, so the type is serialize-only.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    locations: Vec<SourcePosition>,
    rule: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        message: impl Into<String>,
        locations: Vec<SourcePosition>,
        rule: Option<&'static str>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            locations,
            rule,
        }
    }

    pub fn syntax(message: impl Into<String>, location: SourcePosition) -> Self {
        Self::new(DiagnosticKind::Syntax, message, vec![location], None)
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn locations(&self) -> &[SourcePosition] {
        &self.locations
    }

    /// The stable diagnostic rule tag, when one applies (e.g.
    /// `"KnownTypeNames"` for an unresolved type-name reference).
    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        let mut sep = " (at ";
        for loc in &self.locations {
            write!(f, "{sep}{loc}")?;
            sep = ", ";
        }
        if !self.locations.is_empty() {
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
