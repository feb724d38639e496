//! Turn free text into structured query attributes.
//!
//! The `QueryInterpreter` trait abstracts the natural-language service.
//! Callers treat every [`InterpretError`] as an empty
//! [`QueryAttributes`](crate::QueryAttributes) so a failed interpretation
//! degrades to the popularity ranking instead of surfacing an error.

use thiserror::Error;

use crate::QueryAttributes;

/// Errors from [`QueryInterpreter::interpret`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The request did not complete within the configured timeout.
    #[error("interpreter request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was called.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("interpreter at {url} returned HTTP {status}: {message}")]
    Http {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("interpreter request to {url} failed: {message}")]
    Network {
        /// Endpoint that was called.
        url: String,
        /// Error description.
        message: String,
    },
    /// The response body was not a flat attribute object.
    #[error("failed to parse interpreter response: {message}")]
    Parse {
        /// Error description.
        message: String,
    },
}

/// Map a free-text query to structured attributes.
///
/// # Examples
///
/// ```rust
/// use dishmatch_core::{AttributeName, InterpretError, QueryAttributes, QueryInterpreter};
///
/// struct KeywordInterpreter;
///
/// impl QueryInterpreter for KeywordInterpreter {
///     fn interpret(&self, text: &str) -> Result<QueryAttributes, InterpretError> {
///         let mut attributes = QueryAttributes::new();
///         if text.contains("sweet") {
///             attributes = attributes.with_text(AttributeName::Taste, "sweet");
///         }
///         Ok(attributes)
///     }
/// }
///
/// let attributes = KeywordInterpreter.interpret("something sweet")?;
/// assert_eq!(attributes.len(), 1);
/// # Ok::<(), InterpretError>(())
/// ```
pub trait QueryInterpreter {
    /// Interpret `text`.
    fn interpret(&self, text: &str) -> Result<QueryAttributes, InterpretError>;
}

impl<T: QueryInterpreter + ?Sized> QueryInterpreter for Box<T> {
    fn interpret(&self, text: &str) -> Result<QueryAttributes, InterpretError> {
        (**self).interpret(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubInterpreter;
    use rstest::rstest;

    #[rstest]
    fn stub_returns_configured_error() {
        let interpreter = StubInterpreter::with_error(InterpretError::Parse {
            message: "not an object".into(),
        });
        let err = interpreter
            .interpret("pizza")
            .expect_err("configured error should surface");
        assert!(matches!(err, InterpretError::Parse { .. }));
    }

    #[rstest]
    fn error_messages_name_the_endpoint() {
        let err = InterpretError::Timeout {
            url: "http://nlp.local/interpret".into(),
            timeout_secs: 30,
        };
        assert!(err.to_string().contains("http://nlp.local/interpret"));
    }
}
