mod error;
mod impls;
mod traits;

pub use error::StoreError;
pub use impls::memory::MemoryStore;
pub use impls::s3::S3Store;
pub use traits::ObjectStore;

pub type Result<T> = std::result::Result<T, StoreError>;
