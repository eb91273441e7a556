use thiserror::Error;

/// Failure to obtain the country dataset. Fatal to initialization: no markers are placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to fetch map data: HTTP {status}")]
    Status { status: u16 },
    #[error("failed to fetch map data: {0}")]
    Transport(String),
    #[error("failed to read map data: {0}")]
    Io(String),
    #[error("failed to decode map data: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
