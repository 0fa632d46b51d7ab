use std::fmt;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Line and column (both 1-based) in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u64,
    pub column: u64,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Everything that can go wrong while turning a payload into a report.
///
/// A provider error document is *not* one of these: it decodes successfully
/// into [`crate::Report::Failure`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("missing required attribute '{name}' on <{element}> at {position}")]
    MissingAttribute {
        element: String,
        name: String,
        position: Position,
    },

    #[error("can't parse {expected} from {field} '{value}' at {position}")]
    MalformedNumber {
        field: String,
        value: String,
        expected: &'static str,
        position: Position,
    },

    #[error("can't parse time from <{tag}> '{value}' at {position}: {reason}")]
    MalformedTime {
        tag: String,
        value: String,
        reason: String,
        position: Position,
    },

    #[error("expected {expected} but found {found} at {position}")]
    StructuralMismatch {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("XML syntax error at {position}")]
    Xml {
        position: Position,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute at {position}")]
    Attribute {
        position: Position,
        #[source]
        source: AttrError,
    },

    #[error("<{tag}> is not valid UTF-8 at {position}")]
    Utf8 {
        tag: String,
        position: Position,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl DecodeError {
    pub(crate) fn malformed_time(
        tag: &str,
        value: &str,
        reason: impl ToString,
        position: Position,
    ) -> Self {
        DecodeError::MalformedTime {
            tag: tag.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            position,
        }
    }

    /// Where in the payload the failure was detected.
    pub fn position(&self) -> Position {
        match self {
            DecodeError::MissingAttribute { position, .. }
            | DecodeError::MalformedNumber { position, .. }
            | DecodeError::MalformedTime { position, .. }
            | DecodeError::StructuralMismatch { position, .. }
            | DecodeError::Xml { position, .. }
            | DecodeError::Attribute { position, .. }
            | DecodeError::Utf8 { position, .. } => *position,
        }
    }
}
