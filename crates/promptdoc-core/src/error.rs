use thiserror::Error;

/// An enumerated value (mode, audience, tone, depth) that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseValueError {
    /// Which kind of value was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseValueError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
