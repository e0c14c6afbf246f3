//! The capture cycle: grab a frame, get an upload grant, upload, search.

use crate::frame_source::FrameSource;
use crate::interfaces::MatchResult;
use crate::search_api::SearchApi;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

pub const CAPTURE_FAILED_MESSAGE: &str = "Could not capture an image.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Capturing,
    RequestingUploadGrant,
    Uploading,
    Searching,
    /// Matches in the order the server ranked them.
    MatchesFound(Vec<MatchResult>),
    NoMatchFound,
    Error(String),
}

impl Status {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Capturing => "Capturing image...",
            Self::RequestingUploadGrant => "Getting secure upload URL...",
            Self::Uploading => "Uploading image...",
            Self::Searching => "Searching for a match...",
            Self::MatchesFound(_) => "Matches Found!",
            Self::NoMatchFound => "No Match Found",
            Self::Error(_) => "Error",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::MatchesFound(_) | Self::NoMatchFound | Self::Error(_)
        )
    }

    /// A new capture may only start from `Ready` or after the previous cycle ended.
    #[must_use]
    pub const fn accepts_trigger(&self) -> bool {
        matches!(self, Self::Ready) || self.is_terminal()
    }

    #[must_use]
    pub fn matches(&self) -> &[MatchResult] {
        match self {
            Self::MatchesFound(matches) => matches,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    #[error("a capture is already in progress ({0})")]
    Busy(&'static str),
}

/// Runs capture cycles one at a time and publishes every status change.
pub struct CaptureSession<F, A> {
    frame_source: F,
    api: A,
    status: watch::Sender<Status>,
}

impl<F: FrameSource, A: SearchApi> CaptureSession<F, A> {
    pub fn new(frame_source: F, api: A) -> Self {
        let (status, _) = watch::channel(Status::Ready);
        Self {
            frame_source,
            api,
            status,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    /// Runs one full capture cycle and returns the terminal status it ended in.
    ///
    /// Starting a cycle clears the previous results and error. Triggers arriving
    /// while a cycle is running are rejected rather than queued.
    pub async fn capture_and_search(&self) -> Result<Status, TriggerError> {
        let mut current = "";
        let started = self.status.send_if_modified(|status| {
            current = status.label();
            if status.accepts_trigger() {
                *status = Status::Capturing;
                true
            } else {
                false
            }
        });
        if !started {
            warn!("Ignoring capture trigger while {current}");
            return Err(TriggerError::Busy(current));
        }
        info!("Status: {}", Status::Capturing.label());

        let outcome = self.run_cycle().await;
        self.transition(outcome.clone());
        Ok(outcome)
    }

    async fn run_cycle(&self) -> Status {
        let Some(frame) = self.frame_source.capture().await else {
            return Status::Error(CAPTURE_FAILED_MESSAGE.to_owned());
        };

        self.transition(Status::RequestingUploadGrant);
        let grant = match self.api.request_upload_grant().await {
            Ok(grant) => grant,
            Err(e) => {
                warn!("Requesting upload grant failed: {e}");
                return Status::Error(e.user_message());
            }
        };

        self.transition(Status::Uploading);
        if let Err(e) = self.api.upload(&grant.upload_url, frame).await {
            warn!("Upload failed: {e}");
            return Status::Error(e.user_message());
        }

        self.transition(Status::Searching);
        match self.api.search(&grant.key).await {
            Ok(response) if response.matches.is_empty() => Status::NoMatchFound,
            Ok(response) => Status::MatchesFound(response.matches),
            // The server reports "no match" as 404; that is an outcome, not a failure.
            Err(e) if e.is_not_found() => Status::NoMatchFound,
            Err(e) => {
                warn!("Search failed: {e}");
                Status::Error(e.user_message())
            }
        }
    }

    fn transition(&self, status: Status) {
        info!("Status: {}", status.label());
        self.status.send_replace(status);
    }
}
