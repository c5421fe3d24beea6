/// Shared data structures for the application state
///
/// These structs represent the data that flows between
/// the API layer and the UI layer.

use serde::Deserialize;
use std::path::PathBuf;

/// A photo already stored on the server
///
/// Returned by `GET /photos` as a JSON array. The client never creates or
/// mutates these; it only renders the most recently fetched list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    /// Unique identifier, also the key for the downloaded-image cache
    pub id: String,
    /// Display name (e.g. "DSC_0001.jpg")
    pub name: String,
    /// Relative storage path, appended to `{base}/files/` for retrieval
    pub path: String,
}

/// The user's selected, not-yet-uploaded file
///
/// Held in transient view state between the file picker and a successful
/// upload. Never persisted.
#[derive(Clone, PartialEq)]
pub struct PendingFile {
    /// Filename sent as the multipart part's file name
    pub name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl PendingFile {
    /// Read a picked file from disk
    ///
    /// Returns `None` if the file cannot be read, which leaves the
    /// selection cleared (same as cancelling the picker).
    pub async fn read(path: PathBuf) -> Option<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());

        match tokio::fs::read(&path).await {
            Ok(bytes) => Some(PendingFile { name, bytes }),
            Err(e) => {
                eprintln!("⚠️  Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }
}

// Implement Debug by hand to keep file contents out of logs
impl std::fmt::Debug for PendingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFile")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
