/// State management module
///
/// This module holds the data the view works with:
/// - Server-provided photo records (data.rs)
/// - The locally selected, not-yet-uploaded file (data.rs)

pub mod data;
