use crate::error::ClientError;
use crate::interfaces::{ErrorBody, SearchFaceRequest, SearchFaceResponse, UploadGrant};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

const FRAME_CONTENT_TYPE: &str = "image/jpeg";

/// The three network calls of a capture cycle.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn request_upload_grant(&self) -> Result<UploadGrant, ClientError>;

    /// Uploads the frame straight to storage using the grant's URL.
    async fn upload(&self, upload_url: &str, frame: Vec<u8>) -> Result<(), ClientError>;

    async fn search(&self, key: &str) -> Result<SearchFaceResponse, ClientError>;
}

/// [`SearchApi`] talking to the face search backend over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSearchApi {
    http_client: Client,
    base_url: Url,
}

impl HttpSearchApi {
    pub fn new(http_client: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base_url: Url = base_url.parse()?;
        // Keep any path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Passes successful responses through, turns the others into [`ClientError::Status`].
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    debug!("Request failed with {status}: {message:?}");
    Err(ClientError::Status { status, message })
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    #[instrument(skip(self))]
    async fn request_upload_grant(&self) -> Result<UploadGrant, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint("api/get-presigned-url")?)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    #[instrument(skip(self, frame), fields(bytes = frame.len()))]
    async fn upload(&self, upload_url: &str, frame: Vec<u8>) -> Result<(), ClientError> {
        let response = self
            .http_client
            .put(upload_url)
            .header(CONTENT_TYPE, FRAME_CONTENT_TYPE)
            .body(frame)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, key: &str) -> Result<SearchFaceResponse, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint("api/search-face")?)
            .json(&SearchFaceRequest { key })
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }
}
