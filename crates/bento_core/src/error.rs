use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The content platform answered with a non-success status.
    #[error("Fetch error: {url} returned {status}")]
    Fetch { url: String, status: u16 },

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The completion endpoint answered with a non-success status.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The completion endpoint answered with something that is not a chat completion.
    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    /// The model reply could not be parsed as JSON even after repair.
    #[error("Model output is not valid JSON: {reason}")]
    ModelOutputParse { reason: String, raw: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// HTTP status the request boundary answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidInput(_) | Error::InvalidUrl(_) | Error::Extraction(_) => 400,
            Error::Fetch { .. } => 400,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Stable name of the error class, reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "IoError",
            Error::Serialization(_) => "SerializationError",
            Error::InvalidInput(_) | Error::InvalidUrl(_) => "InputError",
            Error::Fetch { .. } | Error::Extraction(_) => "ExtractionError",
            Error::Configuration(_) => "ConfigurationError",
            Error::Upstream(_) | Error::Http(_) => "UpstreamError",
            Error::UpstreamFormat(_) => "UpstreamFormatError",
            Error::ModelOutputParse { .. } => "ModelOutputParseError",
            Error::NotFound(_) => "NotFoundError",
            Error::Storage(_) => "StorageError",
            Error::External(_) => "InternalError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
