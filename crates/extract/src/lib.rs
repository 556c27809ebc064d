mod client;
mod error;
pub mod models;

pub use client::ExtractClient;
pub use error::ExtractError;
pub use models::ExtractResponse;

pub type Result<T> = std::result::Result<T, ExtractError>;
