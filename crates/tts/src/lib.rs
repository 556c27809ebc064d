mod chunk;
mod client;
mod error;

pub use client::TtsClient;
pub use error::TtsError;

pub type Result<T> = std::result::Result<T, TtsError>;
