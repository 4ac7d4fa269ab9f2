use thiserror::Error;

/// Failure of a single fetch. Never propagated past the action that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request rejected, connection failure, timeout or non-2xx status
    #[error("network error: {0}")]
    Network(String),

    /// Body is not JSON or lacks a required field
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::MalformedResponse(message.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::MalformedResponse(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::MalformedResponse(err.to_string());
        }
        if let Some(status) = err.status() {
            return FetchError::Network(format!("HTTP {}", status));
        }
        // reqwest hides the interesting part (os error, dns) in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            message = format!("{}: {}", message, inner);
            source = inner.source();
        }
        FetchError::Network(message)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Malformed,
    Other,
}

/// Classify a fetch error for the status bar and debug log
pub fn classify_error(error: &FetchError) -> ErrorType {
    let message = match error {
        FetchError::MalformedResponse(_) => return ErrorType::Malformed,
        FetchError::Network(message) => message.to_lowercase(),
    };

    if message.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if message.contains("timeout") || message.contains("timed out") {
        return ErrorType::Timeout;
    }
    if let Some(code) = http_status_code(&message) {
        return match code {
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }
    if message.contains("dns") || message.contains("network") || message.contains("connect") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Short label for the status bar
pub fn error_type_label(error_type: &ErrorType) -> &'static str {
    match error_type {
        ErrorType::ConnectionRefused => "connection refused",
        ErrorType::Timeout => "timed out",
        ErrorType::NotFound => "not found",
        ErrorType::ServerError => "server error",
        ErrorType::NetworkError => "network error",
        ErrorType::Malformed => "malformed response",
        ErrorType::Other => "request failed",
    }
}

fn http_status_code(message: &str) -> Option<u16> {
    let rest = message.split("http ").nth(1)?;
    rest.get(..3)?.parse().ok()
}
