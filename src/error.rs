use std::fmt;

#[derive(Debug)]
pub enum UrlBuildError {
    /// A value could not be percent-encoded because it is not valid text
    Encoding(String),
    /// Represents missing environment variable errors
    MissingEnvVar(String),
    /// Represents JSON parsing errors
    Parse(serde_json::Error),
    /// Represents file I/O errors
    Io(std::io::Error),
}

impl std::error::Error for UrlBuildError {}

impl fmt::Display for UrlBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlBuildError::Encoding(value) => {
                write!(f, "Cannot percent-encode malformed text: {value:?}")
            }
            UrlBuildError::MissingEnvVar(var) => write!(
                f,
                "Missing required environment variable: {var}\n\
                 Please set it in your environment or .env file"
            ),
            UrlBuildError::Parse(e) => write!(f, "Parse error: {e}"),
            UrlBuildError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<serde_json::Error> for UrlBuildError {
    fn from(err: serde_json::Error) -> Self {
        UrlBuildError::Parse(err)
    }
}

impl From<std::io::Error> for UrlBuildError {
    fn from(err: std::io::Error) -> Self {
        UrlBuildError::Io(err)
    }
}

/// Helper type for Result with `UrlBuildError`
pub type Result<T> = std::result::Result<T, UrlBuildError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_var_message_names_variable() {
        let err = UrlBuildError::MissingEnvVar("SOME_VAR".to_string());

        assert!(err.to_string().contains("SOME_VAR"));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: UrlBuildError = io.into();

        assert!(matches!(err, UrlBuildError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
