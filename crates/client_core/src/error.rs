use thiserror::Error;

/// Terminal failure of a single query.
///
/// The display text of each variant is exactly the message the presentation
/// layer shows for the error phase; flows never expose which variant
/// occurred beyond that text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Bad or missing local input; never reaches the network.
    #[error("{0}")]
    Validation(String),
    /// The backend reported no data for the requested resource.
    #[error("{0}")]
    NotFound(String),
    /// Any other non-success status code.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// The backend could not be reached, or the request timed out.
    #[error("{0}")]
    Transport(String),
    /// A success status carried a body that could not be interpreted.
    #[error("{0}")]
    Parse(String),
}

/// Failure to construct a [`crate::StatusClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to construct http client: {0}")]
    Http(#[from] reqwest::Error),
}
