use thiserror::Error;

/// Errors from the photo API
///
/// One variant per call that can fail. A non-2xx status is reported the
/// same way as a network failure; neither is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `POST /upload/files` failed (network error or non-2xx status)
    #[error("upload failed: {0}")]
    Upload(#[source] reqwest::Error),

    /// `GET /photos` failed (network error or non-2xx status)
    #[error("photo list fetch failed: {0}")]
    Fetch(#[source] reqwest::Error),

    /// `GET /files/{path}` failed for a gallery image
    #[error("image download failed: {0}")]
    Download(#[source] reqwest::Error),
}
