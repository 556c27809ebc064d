use utoipa::OpenApi;

use crate::models::{ConvertRequest, ConvertResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Earcast API",
        version = "1.0.0"
    ),
    tags(
        (name = "convert", description = "Webpage conversion endpoints"),
        (name = "feed", description = "Podcast feed endpoints")
    ),
    components(schemas(ConvertRequest, ConvertResponse))
)]
pub struct ApiDoc;
