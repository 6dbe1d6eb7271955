#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-success HTTP status. `message` carries the server's `error`
    /// field when the failure body parsed as JSON.
    #[error("search API returned status {status}")]
    Api { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Text for the user-visible error panel: the server-supplied message
    /// verbatim when one exists, otherwise a generic fallback.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message,
            _ => "Failed to fetch flights",
        }
    }
}
