use crate::api_state::ApiContext;
use crate::create_router;
use app_state::AppSettings;
use axum::Router;
use color_eyre::Result;
use common_services::aws::load_aws_config;
use common_services::collection::ensure_collection;
use common_services::face_index::{FaceIndex, RekognitionFaceIndex};
use common_services::object_store::{ObjectStore, S3ObjectStore};
use http::{HeaderValue, header};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn serve(settings: AppSettings) -> Result<()> {
    info!("🚀 Initializing server...");
    let sdk_config = load_aws_config(settings.aws.region.as_deref()).await;
    let face_index: Arc<dyn FaceIndex> = Arc::new(RekognitionFaceIndex::new(
        &sdk_config,
        &settings.aws.bucket_name,
    ));
    let object_store: Arc<dyn ObjectStore> =
        Arc::new(S3ObjectStore::new(&sdk_config, &settings.aws.bucket_name));

    // Doubles as the connection test; the server still starts when AWS is unreachable.
    info!("Testing connection to AWS Rekognition...");
    match ensure_collection(face_index.as_ref(), &settings.aws.collection_id).await {
        Ok(status) => info!("Connected to AWS Rekognition ({status:?})."),
        Err(e) => error!("Failed to connect to AWS Rekognition: {}", e),
    }

    let listen_address = format!("{}:{}", settings.api.host, settings.api.port);
    let context = ApiContext {
        settings,
        face_index,
        object_store,
    };
    let listener = TcpListener::bind(&listen_address).await?;

    info!("📚 Docs available at http://{listen_address}/docs");
    info!("✅ Server listening on http://{listen_address}");
    serve_with_listener(context, listener).await
}

/// Serves the API on an already bound listener, e.g. an ephemeral port in tests.
pub async fn serve_with_listener(context: ApiContext, listener: TcpListener) -> Result<()> {
    axum::serve(listener, build_app(context)).await?;
    Ok(())
}

#[must_use]
pub fn build_app(context: ApiContext) -> Router {
    let cors = cors_layer(&context.settings.api.allowed_origins);

    create_router(context)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(hv) => Some(hv),
                Err(e) => {
                    error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allow_origin)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}
