mod response;
mod signal;

pub use response::Response;
pub use signal::{Signal, SignalResult};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unknown signal: {0}")]
    UnknownSignal(u8),

    #[error("Unknown signal name: {0}")]
    UnknownSignalName(String),

    #[error("Unknown result: {0}")]
    UnknownResult(u8),

    #[error("Response was empty")]
    EmptyResponse,

    #[error("State description was not valid UTF-8")]
    DecodeError(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
