use thiserror::Error;

/// Failures surfaced by a data provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider '{provider}' is unavailable: {reason}")]
    Unavailable {
        provider: &'static str,
        reason: String,
    },

    #[error("provider '{provider}' returned an error: {message}")]
    Upstream {
        provider: &'static str,
        message: String,
    },

    /// The request is well-formed but the provider cannot serve it (e.g. an interval it lacks).
    #[error("{0}")]
    Unsupported(String),
}
