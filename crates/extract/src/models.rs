use serde::Deserialize;

/// Payload returned by the full-text extraction endpoint.
///
/// The API returns more fields (excerpt, date, effective url); only the ones
/// the service consumes are deserialized.
#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    /// Article title as detected by the extractor
    pub title: Option<String>,
    /// Extracted plain-text article body
    pub content: String,
}
