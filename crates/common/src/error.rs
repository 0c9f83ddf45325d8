//! Error types shared across FaceLink crates.

/// Top-level error type for FaceLink operations.
#[derive(Debug, thiserror::Error)]
pub enum FacelinkError {
    #[error("Action '{action_id}' is already registered")]
    DuplicateAction { action_id: String },

    #[error("Action engine has been released")]
    Released,

    #[error("Invalid binding: {message}")]
    InvalidBinding { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using FacelinkError.
pub type FacelinkResult<T> = Result<T, FacelinkError>;

impl FacelinkError {
    pub fn duplicate_action(action_id: impl Into<String>) -> Self {
        Self::DuplicateAction {
            action_id: action_id.into(),
        }
    }

    pub fn invalid_binding(msg: impl Into<String>) -> Self {
        Self::InvalidBinding {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_action_message_names_the_action() {
        let err = FacelinkError::duplicate_action("wave");
        assert_eq!(err.to_string(), "Action 'wave' is already registered");
    }

    #[test]
    fn test_config_error_message() {
        let err = FacelinkError::config("bad level");
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FacelinkError = io.into();
        assert!(matches!(err, FacelinkError::Io(_)));
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: FacelinkError = parse_err.into();
        assert!(matches!(err, FacelinkError::Json(_)));
    }
}
