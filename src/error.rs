//! Error handling for the Carteira client
//!
//! Defines the typed error raised at the HTTP boundary and establishes a
//! unified Result type using anyhow for context chaining and propagation.

use thiserror::Error;

/// Errors raised while talking to the tracker backend.
///
/// Non-2xx responses are modelled as a tagged value carrying the status and
/// the backend's `detail` message when its JSON body was parsable. The
/// `detail` text is surfaced to the user verbatim; callers attach their own
/// per-operation context on top.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("request failed with HTTP {}", status),
    }
}

impl ApiError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_surfaces_detail_verbatim() {
        let err = ApiError::Http {
            status: 404,
            detail: Some("Ativo não encontrado".to_string()),
        };
        assert_eq!(err.to_string(), "Ativo não encontrado");
    }

    #[test]
    fn test_http_error_without_detail_falls_back() {
        let err = ApiError::Http {
            status: 502,
            detail: None,
        };
        assert_eq!(err.to_string(), "request failed with HTTP 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_validation_error_formatting() {
        let err = ApiError::Validation("quantity must be positive".to_string());
        assert!(err.to_string().starts_with("validation error"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_anyhow_context_chains_errors() {
        use anyhow::Context;
        let result: Result<()> = Err(ApiError::Http {
            status: 500,
            detail: None,
        })
        .context("failed to load assets");
        match result {
            Err(e) => {
                assert!(e.to_string().contains("failed to load assets"));
                let debug_msg = format!("{:?}", e);
                assert!(debug_msg.contains("HTTP 500"));
            }
            Ok(_) => panic!("expected error"),
        }
    }
}
