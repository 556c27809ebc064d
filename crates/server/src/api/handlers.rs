mod convert;
mod feed;

pub use convert::convert_webpage;
pub use feed::get_rss;

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use convert::__path_convert_webpage;
#[doc(hidden)]
pub use feed::__path_get_rss;
