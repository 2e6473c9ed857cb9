//! Error types for figwind.

use thiserror::Error;

/// Errors while reading a scene document.
///
/// These only cover the document as a whole. Problems inside individual nodes
/// never surface here; they are captured as [`NodeDecodeError`] on an
/// unknown-kind node so the rest of the tree still renders.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("I/O error while reading scene: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return SceneError::Io(err.into());
        }
        SceneError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Reasons a single node could not be decoded into a known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeDecodeError {
    #[error("node is not a JSON object")]
    NotAnObject,

    #[error("node has no string `type` field")]
    MissingType,

    #[error("`visible` must be a boolean")]
    InvalidVisibility,

    #[error("invalid {kind} node: {message}")]
    InvalidField { kind: String, message: String },

    #[error("`children` must be an array")]
    InvalidChildren,

    #[error("maximum nesting depth ({depth}) exceeded while decoding")]
    TooDeep { depth: usize },
}

/// Errors while loading a component registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid registry document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("I/O error while reading registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate component name: {name}")]
    DuplicateComponent { name: String },

    #[error("Component name '{name}' must be non-empty and alphanumeric")]
    InvalidName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_from_json() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let scene: SceneError = err.into();
        match scene {
            SceneError::InvalidJson { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_node_decode_error_display() {
        let err = NodeDecodeError::InvalidField {
            kind: "FRAME".to_string(),
            message: "bad width".to_string(),
        };
        assert_eq!(err.to_string(), "invalid FRAME node: bad width");
    }
}
