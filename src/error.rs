/// All errors that can occur while fetching or persisting sports data.
#[derive(thiserror::Error, Debug)]
pub enum SportsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    /// A key-value store read or write failed.
    #[error("storage operation failed for key {key}: {source}")]
    Storage {
        key: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SportsError>;
