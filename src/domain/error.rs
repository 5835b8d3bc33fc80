use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("HTTP request error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no definitions found for the word {word}")]
    NotFound { word: String },

    #[error("invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<url::ParseError> for DictionaryError {
    fn from(err: url::ParseError) -> Self {
        DictionaryError::InvalidUrl(err.to_string())
    }
}
