//! ODPT client error types.

/// Errors that can occur when talking to the ODPT API.
#[derive(Debug, thiserror::Error)]
pub enum OdptError {
    /// Access key not available at construction time
    #[error("missing ODPT access key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check the ODPT access key")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OdptError::MissingApiKey("ODPT_KEY");
        assert_eq!(
            err.to_string(),
            "missing ODPT access key: set the ODPT_KEY environment variable"
        );

        let err = OdptError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = OdptError::Json {
            message: "expected an array".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
