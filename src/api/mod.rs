/// Photo API module
///
/// This module talks to the backend:
/// - HTTP client for list, upload and image download (client.rs)
/// - API error types (error.rs)

pub mod client;
pub mod error;
