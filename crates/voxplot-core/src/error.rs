use crate::VisualizationKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported visualization kind: {tag}")]
    UnsupportedKind { tag: String },

    #[error("No standardizer registered for visualization kind: {kind}")]
    NotImplemented { kind: VisualizationKind },

    #[error("Data parse error ({kind}): {message}")]
    Parse {
        kind: VisualizationKind,
        message: String,
    },

    #[error("Degenerate input ({kind}): {message}")]
    DegenerateInput {
        kind: VisualizationKind,
        message: String,
    },

    #[error("No data endpoint configured for visualization kind: {kind}")]
    MissingEndpoint { kind: VisualizationKind },

    #[error("Fetching {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("Invalid configuration JSON: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Whether a caller may retry the request that produced this error.
    ///
    /// Only transport failures are retryable. A missing endpoint or an unknown kind will fail the
    /// same way on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Fetch { .. })
    }

    pub(crate) fn parse(kind: VisualizationKind, message: impl Into<String>) -> Self {
        Error::Parse {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn degenerate(kind: VisualizationKind, message: impl Into<String>) -> Self {
        Error::DegenerateInput {
            kind,
            message: message.into(),
        }
    }
}
