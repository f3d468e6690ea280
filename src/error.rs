use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("device API returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("failed to parse device list")]
    Parse(#[source] serde_json::Error),

    /// The device list decoded fine but was empty.
    #[error("no device found")]
    NoDevice,

    #[error("failed to serialize room condition")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to write room condition")]
    StoreWrite(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CollectError>;
