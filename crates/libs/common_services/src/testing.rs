//! In-memory stand-ins for the object store and the face index, with
//! deterministic scores. Enabled for this crate's tests and, through the
//! `testing` feature, for dependent crates.

use crate::face_index::{FaceIndex, FaceIndexError, FaceMatch, FaceSearchQuery, IndexedFace};
use crate::object_store::{ObjectStore, ObjectStoreError};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

/// Shared map of object key to bytes, so an HTTP upload endpoint in a test can
/// write into the same bucket the store lists.
pub type SharedObjects = Arc<Mutex<BTreeMap<String, Vec<u8>>>>;

#[must_use]
pub fn face_match(face_id: &str, external_image_id: &str, similarity: f32) -> FaceMatch {
    FaceMatch {
        face_id: face_id.to_owned(),
        external_image_id: Some(external_image_id.to_owned()),
        similarity,
    }
}

/// Object store whose signed URLs are `{base_url}/{key}?method=..&expires=..`.
pub struct InMemoryObjectStore {
    base_url: String,
    objects: SharedObjects,
    fail_put: AtomicBool,
    fail_get: AtomicBool,
    fail_get_for: HashSet<String>,
    get_delays: HashMap<String, Duration>,
    signed_puts: Mutex<Vec<(String, String)>>,
    signed_gets: Mutex<Vec<String>>,
}

impl InMemoryObjectStore {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            objects: SharedObjects::default(),
            fail_put: AtomicBool::new(false),
            fail_get: AtomicBool::new(false),
            fail_get_for: HashSet::new(),
            get_delays: HashMap::new(),
            signed_puts: Mutex::default(),
            signed_gets: Mutex::default(),
        }
    }

    #[must_use]
    pub fn failing_put(self) -> Self {
        self.fail_puts(true);
        self
    }

    /// Makes every later write grant fail, or succeed again.
    pub fn fail_puts(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
    }

    /// Makes every later read grant fail, or succeed again.
    pub fn fail_gets(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn failing_get_for(mut self, key: &str) -> Self {
        self.fail_get_for.insert(key.to_owned());
        self
    }

    /// Delays signing a read URL for `key`, to make concurrent signing observable.
    #[must_use]
    pub fn with_get_delay(mut self, key: &str, delay: Duration) -> Self {
        self.get_delays.insert(key.to_owned(), delay);
        self
    }

    #[must_use]
    pub fn objects(&self) -> SharedObjects {
        Arc::clone(&self.objects)
    }

    pub async fn put_object(&self, key: &str, bytes: Vec<u8>) {
        self.objects.lock().await.insert(key.to_owned(), bytes);
    }

    /// `(key, content type)` of every write grant, in issue order.
    pub async fn signed_puts(&self) -> Vec<(String, String)> {
        self.signed_puts.lock().await.clone()
    }

    /// Keys of every read grant, in completion order.
    pub async fn signed_gets(&self) -> Vec<String> {
        self.signed_gets.lock().await.clone()
    }

    fn signed_url(&self, key: &str, method: &str, expires_in: Duration) -> String {
        format!(
            "{}/{key}?method={method}&expires={}",
            self.base_url,
            expires_in.as_secs()
        )
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, ObjectStoreError> {
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(ObjectStoreError::Request("access denied".to_owned()));
        }
        self.signed_puts
            .lock()
            .await
            .push((key.to_owned(), content_type.to_owned()));
        Ok(self.signed_url(key, "PUT", expires_in))
    }

    async fn presign_get(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ObjectStoreError> {
        if let Some(delay) = self.get_delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_get.load(Ordering::SeqCst) || self.fail_get_for.contains(key) {
            return Err(ObjectStoreError::Request(format!("cannot sign {key}")));
        }
        self.signed_gets.lock().await.push(key.to_owned());
        Ok(self.signed_url(key, "GET", expires_in))
    }

    async fn list_keys(&self) -> Result<Vec<String>, ObjectStoreError> {
        Ok(self.objects.lock().await.keys().cloned().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeSearchFailure {
    /// The query image contains no face.
    NoFace,
    /// The service itself fails.
    Service,
}

/// A search as received by [`FakeFaceIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSearch {
    pub collection_id: String,
    pub image_key: String,
    pub threshold: f32,
    pub max_faces: i32,
}

/// Face index returning preconfigured matches, filtered by the query's
/// threshold and limit like the real service.
#[derive(Default)]
pub struct FakeFaceIndex {
    matches: Mutex<Vec<FaceMatch>>,
    search_failure: Mutex<Option<FakeSearchFailure>>,
    searches: Mutex<Vec<RecordedSearch>>,
    faceless_images: Mutex<HashSet<String>>,
    faces: Mutex<Vec<IndexedFace>>,
    collections: Mutex<Vec<String>>,
    fail_index_for: Mutex<HashSet<String>>,
}

impl FakeFaceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_matches(mut self, matches: Vec<FaceMatch>) -> Self {
        *self.matches.get_mut() = matches;
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection_id: &str) -> Self {
        self.collections.get_mut().push(collection_id.to_owned());
        self
    }

    #[must_use]
    pub fn with_faceless_image(mut self, key: &str) -> Self {
        self.faceless_images.get_mut().insert(key.to_owned());
        self
    }

    #[must_use]
    pub fn with_faces(mut self, faces: Vec<IndexedFace>) -> Self {
        *self.faces.get_mut() = faces;
        self
    }

    /// Makes indexing `key` fail with a service error.
    #[must_use]
    pub fn failing_index_for(mut self, key: &str) -> Self {
        self.fail_index_for.get_mut().insert(key.to_owned());
        self
    }

    /// Replaces the matches returned by later searches and clears any failure.
    pub async fn set_matches(&self, matches: Vec<FaceMatch>) {
        *self.matches.lock().await = matches;
        *self.search_failure.lock().await = None;
    }

    pub async fn fail_search_with(&self, failure: FakeSearchFailure) {
        *self.search_failure.lock().await = Some(failure);
    }

    pub async fn searches(&self) -> Vec<RecordedSearch> {
        self.searches.lock().await.clone()
    }

    pub async fn search_calls(&self) -> usize {
        self.searches.lock().await.len()
    }

    pub async fn indexed_faces(&self) -> Vec<IndexedFace> {
        self.faces.lock().await.clone()
    }

    pub async fn collections(&self) -> Vec<String> {
        self.collections.lock().await.clone()
    }
}

#[async_trait]
impl FaceIndex for FakeFaceIndex {
    async fn search_faces_by_image(
        &self,
        query: FaceSearchQuery<'_>,
    ) -> Result<Vec<FaceMatch>, FaceIndexError> {
        self.searches.lock().await.push(RecordedSearch {
            collection_id: query.collection_id.to_owned(),
            image_key: query.image_key.to_owned(),
            threshold: query.threshold,
            max_faces: query.max_faces,
        });

        match *self.search_failure.lock().await {
            Some(FakeSearchFailure::NoFace) => return Err(FaceIndexError::NoFaceInImage),
            Some(FakeSearchFailure::Service) => {
                return Err(FaceIndexError::Service("service unavailable".to_owned()));
            }
            None => {}
        }

        let max_faces = usize::try_from(query.max_faces).unwrap_or(0);
        Ok(self
            .matches
            .lock()
            .await
            .iter()
            .filter(|m| m.similarity >= query.threshold)
            .take(max_faces)
            .cloned()
            .collect())
    }

    async fn index_faces(
        &self,
        _collection_id: &str,
        image_key: &str,
        external_image_id: &str,
    ) -> Result<Vec<IndexedFace>, FaceIndexError> {
        if self.fail_index_for.lock().await.contains(image_key) {
            return Err(FaceIndexError::Service(format!("cannot index {image_key}")));
        }
        if self.faceless_images.lock().await.contains(image_key) {
            return Ok(Vec::new());
        }

        let mut faces = self.faces.lock().await;
        let face = IndexedFace {
            face_id: format!("face-{}", faces.len() + 1),
            external_image_id: Some(external_image_id.to_owned()),
        };
        faces.push(face.clone());
        Ok(vec![face])
    }

    async fn list_faces(
        &self,
        _collection_id: &str,
        max_results: i32,
    ) -> Result<Vec<IndexedFace>, FaceIndexError> {
        let max_results = usize::try_from(max_results).unwrap_or(0);
        Ok(self
            .faces
            .lock()
            .await
            .iter()
            .take(max_results)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>, FaceIndexError> {
        Ok(self.collections.lock().await.clone())
    }

    async fn create_collection(&self, collection_id: &str) -> Result<(), FaceIndexError> {
        let mut collections = self.collections.lock().await;
        if collections.iter().any(|c| c == collection_id) {
            return Err(FaceIndexError::Service(format!(
                "collection {collection_id} already exists"
            )));
        }
        collections.push(collection_id.to_owned());
        Ok(())
    }
}
