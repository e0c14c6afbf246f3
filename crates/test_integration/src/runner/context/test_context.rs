use crate::runner::context::object_endpoint::{ObjectEndpointState, object_router};
use crate::test_constants::{SEEDED_IMAGES, SETTINGS_PATH};
use api::api_state::ApiContext;
use app_state::{AppSettings, load_settings_from_path};
use color_eyre::Result;
use common_services::testing::{FakeFaceIndex, InMemoryObjectStore};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The main context for our integration tests: the real API router on an
/// ephemeral port, backed by in-memory face index and object store fakes.
pub struct TestContext {
    pub settings: AppSettings,
    pub http_client: reqwest::Client,
    pub face_index: Arc<FakeFaceIndex>,
    pub object_store: Arc<InMemoryObjectStore>,
    reject_uploads: Arc<AtomicBool>,
    _api_handle: JoinHandle<()>,
    _object_endpoint_handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        info!("Setting up test environment...");
        let settings_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(SETTINGS_PATH);
        let mut settings = load_settings_from_path(&settings_path, false)?;

        let object_listener = TcpListener::bind("127.0.0.1:0").await?;
        let object_url = format!("http://{}", object_listener.local_addr()?);
        let object_store = Arc::new(InMemoryObjectStore::new(object_url));
        for key in SEEDED_IMAGES {
            object_store.put_object(key, b"seeded jpeg".to_vec()).await;
        }

        let reject_uploads = Arc::new(AtomicBool::new(false));
        let endpoint = object_router(ObjectEndpointState {
            objects: object_store.objects(),
            reject_uploads: Arc::clone(&reject_uploads),
        });
        let object_endpoint_handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(object_listener, endpoint).await {
                error!("Object endpoint failed: {}", e);
            }
        });

        let api_listener = TcpListener::bind("127.0.0.1:0").await?;
        let api_address = api_listener.local_addr()?;
        settings.api.port = u32::from(api_address.port());
        settings.api.public_url = format!("http://{api_address}");

        let face_index = Arc::new(FakeFaceIndex::new().with_collection(&settings.aws.collection_id));
        let context = ApiContext {
            settings: settings.clone(),
            face_index: face_index.clone(),
            object_store: object_store.clone(),
        };
        let api_handle = tokio::spawn(async move {
            if let Err(e) = api::serve_with_listener(context, api_listener).await {
                error!("API server failed: {}", e);
            }
        });
        info!("Test environment is ready at {}.", settings.api.public_url);

        Ok(Self {
            settings,
            http_client: reqwest::Client::new(),
            face_index,
            object_store,
            reject_uploads,
            _api_handle: api_handle,
            _object_endpoint_handle: object_endpoint_handle,
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.settings.api.public_url)
    }

    pub fn reject_uploads(&self, reject: bool) {
        self.reject_uploads.store(reject, Ordering::SeqCst);
    }

    /// No matches, no failures: the state every test starts from.
    pub async fn reset(&self) {
        self.face_index.set_matches(Vec::new()).await;
        self.object_store.fail_puts(false);
        self.object_store.fail_gets(false);
        self.reject_uploads(false);
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        info!("Tearing down test environment...");
        self._api_handle.abort();
        self._object_endpoint_handle.abort();
    }
}
