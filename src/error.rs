use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    InvalidMagic { expected: u64, found: u64 },

    #[error("Checksum verification failed")]
    ChecksumMismatch,

    #[error("Save file truncated")]
    Truncated,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SaveError>;

/// The session task behind a handle has stopped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Session has shut down")]
pub struct SessionClosed;
