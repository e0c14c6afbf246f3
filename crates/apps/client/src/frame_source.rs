use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Produces one JPEG frame per capture, or nothing when no frame is available.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture(&self) -> Option<Vec<u8>>;
}

/// Reads the latest frame from a file kept up to date by an external camera
/// tool (e.g. `ffmpeg -f v4l2 -i /dev/video0 -update 1 frame.jpeg`).
#[derive(Debug, Clone)]
pub struct FileFrameSource {
    path: PathBuf,
}

impl FileFrameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FrameSource for FileFrameSource {
    async fn capture(&self) -> Option<Vec<u8>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => {
                warn!("Frame file {} is empty", self.path.display());
                None
            }
            Ok(bytes) => {
                debug!("Captured {} bytes from {}", bytes.len(), self.path.display());
                Some(bytes)
            }
            Err(e) => {
                warn!("Cannot read frame from {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_no_frame() {
        let source = FileFrameSource::new("/nonexistent/frame.jpeg");
        assert_eq!(source.capture().await, None);
    }

    #[tokio::test]
    async fn empty_and_filled_files() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("frame.jpeg");

        tokio::fs::write(&path, b"").await?;
        assert_eq!(FileFrameSource::new(&path).capture().await, None);

        tokio::fs::write(&path, [0xFF, 0xD8, 0xFF]).await?;
        assert_eq!(
            FileFrameSource::new(&path).capture().await,
            Some(vec![0xFF, 0xD8, 0xFF])
        );
        Ok(())
    }
}
