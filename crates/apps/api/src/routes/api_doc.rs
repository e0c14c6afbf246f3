use crate::routes::{root, search, upload};
use common_services::api::MessageResponse;
use common_services::api::search::interfaces::{
    MatchResult, SearchFaceRequest, SearchFaceResponse,
};
use common_services::api::upload::interfaces::UploadGrantResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        upload::handlers::get_presigned_url_handler,
        search::handlers::search_face_handler,
    ),
    components(
        schemas(
            MessageResponse,
            UploadGrantResponse,
            SearchFaceRequest,
            SearchFaceResponse,
            MatchResult,
        ),
    ),
    tags(
        (name = "Face Search", description = "Upload a captured image and search the face collection"),
        (name = "System", description = "Liveness"),
    )
)]
pub struct ApiDoc;
