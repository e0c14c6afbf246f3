use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::face_index::FaceIndex;
use common_services::object_store::ObjectStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub settings: AppSettings,
    pub face_index: Arc<dyn FaceIndex>,
    pub object_store: Arc<dyn ObjectStore>,
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}

impl FromRef<ApiContext> for Arc<dyn ObjectStore> {
    fn from_ref(state: &ApiContext) -> Self {
        Arc::clone(&state.object_store)
    }
}

impl FromRef<ApiContext> for Arc<dyn FaceIndex> {
    fn from_ref(state: &ApiContext) -> Self {
        Arc::clone(&state.face_index)
    }
}
