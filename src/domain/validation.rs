use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingEnv { var: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingEnv { var } => {
                write!(f, "{var} environment variable is not set")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "segment_id" };
        assert_eq!(err.to_string(), "segment_id must not be empty");

        let err = ValidationError::MissingEnv {
            var: "STREAM_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "STREAM_API_KEY environment variable is not set"
        );
    }
}
