use crate::runner::context::test_context::TestContext;
use crate::test_constants::{CAPTURED_FRAME, UPLOAD_KEY_LEN};
use async_trait::async_trait;
use client::frame_source::FrameSource;
use client::search_api::HttpSearchApi;
use client::session::CaptureSession;
use color_eyre::Result;
use reqwest::StatusCode;
use serde_json::Value;

/// Camera stand-in that always yields the same frame.
pub struct FixedFrame;

#[async_trait]
impl FrameSource for FixedFrame {
    async fn capture(&self) -> Option<Vec<u8>> {
        Some(CAPTURED_FRAME.to_vec())
    }
}

pub fn capture_session(context: &TestContext) -> Result<CaptureSession<FixedFrame, HttpSearchApi>> {
    let api = HttpSearchApi::new(context.http_client.clone(), &context.settings.api.public_url)?;
    Ok(CaptureSession::new(FixedFrame, api))
}

pub fn is_upload_key(key: &str) -> bool {
    key.len() == UPLOAD_KEY_LEN
        && key.ends_with(".jpeg")
        && key[..32]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Posts a raw body to the search endpoint and returns the status with the JSON body.
pub async fn post_search(context: &TestContext, body: reqwest::Body) -> Result<(StatusCode, Value)> {
    let response = context
        .http_client
        .post(context.api_url("/api/search-face"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    let status = response.status();
    let body = response.json().await?;

    Ok((status, body))
}
