use std::fmt;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Main error type for the planner library
#[derive(Debug, Clone)]
pub enum PlannerError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            PlannerError::IoError(msg) => write!(f, "IO error: {}", msg),
            PlannerError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

// Conversion from std::io::Error
impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::IoError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for PlannerError {
    fn from(err: bincode::Error) -> Self {
        PlannerError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::SerializationError(err.to_string())
    }
}

impl PlannerError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        PlannerError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
