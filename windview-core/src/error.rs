use thiserror::Error;

/// Failure to obtain the raw document bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot build a URL from '{url}'")]
    UrlConstruction {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response from {url} had an empty body")]
    EmptyResponse { url: String },
}

/// The document did not match the weather schema.
#[derive(Debug, Error)]
#[error("Failed to decode weather document at '{path}': {source}")]
pub struct DecodeError {
    /// Location of the offending value, `.` for the document root.
    pub path: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl PipelineError {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Fetch(_) => "fetch",
            PipelineError::Decode(_) => "decode",
        }
    }
}
