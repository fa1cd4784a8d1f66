use std::fmt;

/// Failure of a probe request.
///
/// Connection errors, unresponsive receivers and unparseable response
/// bodies all collapse into the same kind. The prober never retries and
/// never distinguishes transient from permanent failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    RequestFailure {
        message: String,
    },
}

impl ProbeError {
    pub fn request_failure(message: impl Into<String>) -> Self {
        ProbeError::RequestFailure {
            message: message.into(),
        }
    }

    /// Underlying failure description.
    pub fn message(&self) -> &str {
        match self {
            ProbeError::RequestFailure { message } => message,
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::RequestFailure { message } =>
                write!(f, "request failed: {}", message),
        }
    }
}

impl std::error::Error for ProbeError {}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest's Display omits the cause chain ("connection refused").
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        ProbeError::request_failure(message)
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::request_failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_underlying_message() {
        let err = ProbeError::request_failure("connection refused");
        assert_eq!(err.message(), "connection refused");
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn json_errors_become_request_failures() {
        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = parse.to_string();
        let err = ProbeError::from(parse);
        assert_eq!(err.message(), expected);
    }
}
