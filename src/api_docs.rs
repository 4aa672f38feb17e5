use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::availability::search_json,
        api::auth::login,
    ),
    tags(
        (name = "innbook", description = "Innbook booking API")
    )
)]
pub struct ApiDoc;
