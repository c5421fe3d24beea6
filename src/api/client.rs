/// HTTP client for the photo API
///
/// Wraps a reqwest client plus the configured base URL. The client is
/// constructed once at startup and handed to the view, so there is no
/// ambient global HTTP state.

use reqwest::multipart;

use super::error::ApiError;
use crate::state::data::{PendingFile, Photo};

/// Client for the photo upload backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    ///
    /// A trailing slash on the base URL is trimmed so derived endpoint
    /// URLs always contain exactly one separator.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        ApiClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full photo list
    ///
    /// Returns the server's list verbatim; ordering is the server's and
    /// is not re-sorted client-side.
    pub async fn fetch_photos(&self) -> Result<Vec<Photo>, ApiError> {
        let url = format!("{}/photos", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ApiError::Fetch)?;

        response.json().await.map_err(ApiError::Fetch)
    }

    /// Upload one file as a multipart form
    ///
    /// The payload carries a single part named `file` with the original
    /// filename. Any 2xx response body is ignored.
    pub async fn upload(&self, file: PendingFile) -> Result<(), ApiError> {
        let part = multipart::Part::bytes(file.bytes).file_name(file.name);
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/upload/files", self.base_url);
        self.http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ApiError::Upload)?;

        Ok(())
    }

    /// The retrieval URL for a stored photo
    pub fn file_url(&self, photo: &Photo) -> String {
        format!("{}/files/{}", self.base_url, photo.path)
    }

    /// Download a stored photo's bytes for the gallery grid
    pub async fn download(&self, photo: &Photo) -> Result<Vec<u8>, ApiError> {
        let response = self
            .http
            .get(self.file_url(photo))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(ApiError::Download)?;

        let bytes = response.bytes().await.map_err(ApiError::Download)?;
        Ok(bytes.to_vec())
    }
}
