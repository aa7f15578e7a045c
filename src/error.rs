//! Error types for the transcoding core.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid UMP group {0} (must be 0-15)")]
    InvalidGroup(u8),

    #[error("invalid USB-MIDI cable number {0} (must be 0-15)")]
    InvalidCable(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
