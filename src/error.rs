use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Keyring catalog unavailable: {0}")]
    CatalogError(String),
    #[error("Account source failed: {0}")]
    AccountSourceError(String),
    #[error("Highlight store failed: {0}")]
    HighlightError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Snapshot I/O error: {0}")]
    SnapshotIo(#[from] std::io::Error),
    #[error("Snapshot parse error: {0}")]
    SnapshotParse(#[from] serde_json::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

/// Failure of a single hardware `getAccountInfo` request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("device did not answer within {0}ms")]
    Timeout(u64),
    #[error("device disconnected")]
    Disconnected,
    #[error("device rejected request: {0}")]
    Rejected(String),
    #[error("keyring {0} does not support account info")]
    Unsupported(String),
    #[error("probe task aborted: {0}")]
    Aborted(String),
}
