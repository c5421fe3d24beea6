use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;

// Declare the application modules
mod api;
mod config;
mod state;
mod ui;

use api::client::ApiClient;
use config::{AppConfig, FailureNotice};
use state::data::{PendingFile, Photo};

/// Main application state
struct PhotoUploader {
    /// Injected API client (base URL comes from configuration)
    client: ApiClient,
    /// Last successfully fetched photo list, in server order
    photos: Vec<Photo>,
    /// Downloaded gallery images, keyed by photo id
    thumbnails: HashMap<String, image::Handle>,
    /// The selected, not-yet-uploaded file
    selected: Option<PendingFile>,
    /// Live preview of the selected file
    preview: Option<image::Handle>,
    /// Status message to display to the user
    status: String,
    /// Sequence number of the most recently issued list fetch.
    /// Responses tagged with an older number are discarded.
    fetch_seq: u64,
    /// Whether upload/fetch failures are shown in the status line
    failure_notice: FailureNotice,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Choose Photo" button
    PickFile,
    /// Picked file finished reading (None = cancelled or unreadable)
    FileSelected(Option<PendingFile>),
    /// User clicked the "Upload" button
    Upload,
    /// Upload finished
    UploadComplete(Result<(), String>),
    /// Photo list fetch finished, tagged with its request sequence number
    PhotosLoaded(u64, Result<Vec<Photo>, String>),
    /// A gallery image finished downloading
    ThumbnailLoaded(String, Result<image::Handle, String>),
    /// An alert dialog was dismissed
    AlertClosed,
}

impl PhotoUploader {
    /// Create a new instance and kick off the initial photo fetch
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::from_env();
        println!("🖼️  Photo Uploader — API at {}", config.api_base_url);

        let mut app = PhotoUploader {
            client: ApiClient::new(config.api_base_url),
            photos: Vec::new(),
            thumbnails: HashMap::new(),
            selected: None,
            preview: None,
            status: String::from("Loading photos..."),
            fetch_seq: 0,
            failure_notice: config.failure_notice,
        };

        let fetch = app.refresh_photos();
        (app, fetch)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFile => {
                // Show the native file picker. Any file is accepted;
                // the backend does the validating.
                let picked = FileDialog::new().set_title("Select a Photo").pick_file();

                match picked {
                    Some(path) => {
                        Task::perform(PendingFile::read(path), Message::FileSelected)
                    }
                    // Cancelling the picker clears the selection
                    None => Task::done(Message::FileSelected(None)),
                }
            }

            Message::FileSelected(file) => {
                self.preview = file
                    .as_ref()
                    .map(|f| image::Handle::from_bytes(f.bytes.clone()));
                self.status = match &file {
                    Some(f) => format!("Selected {}", f.name),
                    None => String::from("No file selected."),
                };
                self.selected = file;
                Task::none()
            }

            Message::Upload => {
                // Precondition short-circuits before any network call
                let Some(file) = self.selected.clone() else {
                    self.status = String::from("Select a file first.");
                    return alert("No file selected", "Select a file first.");
                };

                self.status = format!("Uploading {}...", file.name);
                let client = self.client.clone();
                Task::perform(
                    async move { client.upload(file).await.map_err(|e| e.to_string()) },
                    Message::UploadComplete,
                )
            }

            Message::UploadComplete(Ok(())) => {
                println!("✅ Upload complete");
                self.status = String::from("Upload complete.");
                self.selected = None;
                self.preview = None;

                Task::batch([
                    alert("Upload", "Photo uploaded successfully!"),
                    self.refresh_photos(),
                ])
            }

            Message::UploadComplete(Err(e)) => {
                // The selection stays put so the user can retry
                eprintln!("⚠️  Upload failed: {}", e);
                if self.failure_notice == FailureNotice::Status {
                    self.status = format!("Upload failed: {}", e);
                }
                Task::none()
            }

            Message::PhotosLoaded(seq, result) => {
                if seq < self.fetch_seq {
                    // A newer fetch was issued after this one
                    println!("🔄 Dropping stale photo list (seq {} < {})", seq, self.fetch_seq);
                    return Task::none();
                }

                match result {
                    Ok(photos) => {
                        self.status = format!("{} photos.", photos.len());
                        self.photos = photos;

                        // The cache only holds images for listed photos
                        let photos = &self.photos;
                        self.thumbnails
                            .retain(|id, _| photos.iter().any(|p| &p.id == id));

                        self.download_missing()
                    }
                    Err(e) => {
                        // The previous list stays on screen
                        eprintln!("⚠️  Photo list fetch failed: {}", e);
                        if self.failure_notice == FailureNotice::Status {
                            self.status = format!("Could not load photos: {}", e);
                        }
                        Task::none()
                    }
                }
            }

            Message::ThumbnailLoaded(id, Ok(handle)) => {
                // Ignore downloads for photos that left the list meanwhile
                if self.photos.iter().any(|p| p.id == id) {
                    self.thumbnails.insert(id, handle);
                }
                Task::none()
            }

            Message::ThumbnailLoaded(id, Err(e)) => {
                // The cell keeps its placeholder; no retry
                eprintln!("⚠️  Image download failed for {}: {}", id, e);
                Task::none()
            }

            Message::AlertClosed => Task::none(),
        }
    }

    /// Issue a photo list fetch tagged with a fresh sequence number
    fn refresh_photos(&mut self) -> Task<Message> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let client = self.client.clone();

        Task::perform(
            async move { client.fetch_photos().await.map_err(|e| e.to_string()) },
            move |result| Message::PhotosLoaded(seq, result),
        )
    }

    /// Queue downloads for listed photos that have no cached image yet
    fn download_missing(&self) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .photos
            .iter()
            .filter(|photo| !self.thumbnails.contains_key(&photo.id))
            .map(|photo| {
                let client = self.client.clone();
                let photo = photo.clone();
                let id = photo.id.clone();

                Task::perform(
                    async move {
                        client
                            .download(&photo)
                            .await
                            .map(image::Handle::from_bytes)
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::ThumbnailLoaded(id.clone(), result),
                )
            })
            .collect();

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut upload_panel = column![
            text("Upload a Photo").size(28),
            text("Pick a photo and click Upload.").size(14),
            button("Choose Photo").on_press(Message::PickFile).padding(10),
        ]
        .spacing(12)
        .width(260.0);

        // The live preview only exists while a file is selected
        if let Some(handle) = &self.preview {
            upload_panel = upload_panel.push(
                image(handle.clone())
                    .width(Length::Fill)
                    .height(160.0)
                    .content_fit(ContentFit::Cover),
            );
        }

        upload_panel =
            upload_panel.push(button("Upload").on_press(Message::Upload).padding(10));

        let gallery = column![
            text("Photos").size(28),
            text("Everything uploaded so far.").size(14),
            scrollable(ui::grid::photo_grid(&self.photos, &self.thumbnails))
                .height(Length::Fill),
        ]
        .spacing(12)
        .width(Length::Fill);

        let content = column![
            row![upload_panel, gallery].spacing(40).height(Length::Fill),
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Start);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Show an informational alert dialog without blocking the update loop
fn alert(title: &str, description: &str) -> Task<Message> {
    let dialog = rfd::AsyncMessageDialog::new()
        .set_title(title)
        .set_level(rfd::MessageLevel::Info)
        .set_description(description);

    Task::perform(async move { dialog.show().await }, |_| Message::AlertClosed)
}

fn main() -> iced::Result {
    iced::application(
        "Photo Uploader",
        PhotoUploader::update,
        PhotoUploader::view,
    )
    .theme(PhotoUploader::theme)
    .centered()
    .run_with(PhotoUploader::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> PhotoUploader {
        PhotoUploader {
            client: ApiClient::new("http://localhost:3333"),
            photos: Vec::new(),
            thumbnails: HashMap::new(),
            selected: None,
            preview: None,
            status: String::new(),
            fetch_seq: 0,
            failure_notice: FailureNotice::Status,
        }
    }

    fn photo(id: &str, name: &str) -> Photo {
        Photo {
            id: id.to_string(),
            name: name.to_string(),
            path: name.to_string(),
        }
    }

    fn pending() -> PendingFile {
        PendingFile {
            name: "cat.jpg".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_upload_without_selection_is_rejected() {
        let mut app = test_app();

        let _ = app.update(Message::Upload);

        // No refresh was issued and nothing else moved
        assert_eq!(app.fetch_seq, 0);
        assert!(app.selected.is_none());
        assert_eq!(app.status, "Select a file first.");
    }

    #[test]
    fn test_successful_upload_clears_selection_and_refreshes_once() {
        let mut app = test_app();
        app.selected = Some(pending());
        app.preview = Some(image::Handle::from_bytes(vec![1, 2, 3]));

        let _ = app.update(Message::UploadComplete(Ok(())));

        assert!(app.selected.is_none());
        assert!(app.preview.is_none());
        assert_eq!(app.fetch_seq, 1);
    }

    #[test]
    fn test_failed_upload_keeps_selection_and_preview() {
        let mut app = test_app();
        app.selected = Some(pending());
        app.preview = Some(image::Handle::from_bytes(vec![1, 2, 3]));

        let _ = app.update(Message::UploadComplete(Err("500".to_string())));

        assert_eq!(app.selected, Some(pending()));
        assert!(app.preview.is_some());
        assert_eq!(app.fetch_seq, 0);
        assert_eq!(app.status, "Upload failed: 500");
    }

    #[test]
    fn test_silent_policy_keeps_failures_off_the_status_line() {
        let mut app = test_app();
        app.failure_notice = FailureNotice::Silent;
        app.status = String::from("Ready.");

        let _ = app.update(Message::UploadComplete(Err("500".to_string())));
        let _ = app.update(Message::PhotosLoaded(1, Err("500".to_string())));

        assert_eq!(app.status, "Ready.");
    }

    #[test]
    fn test_loaded_list_replaces_photos_verbatim() {
        let mut app = test_app();
        app.photos = vec![photo("9", "old.jpg")];

        let _ = app.update(Message::PhotosLoaded(
            1,
            Ok(vec![photo("1", "a.jpg"), photo("2", "b.jpg")]),
        ));

        let ids: Vec<&str> = app.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_stale_list_response_is_discarded() {
        let mut app = test_app();
        app.fetch_seq = 2;
        app.photos = vec![photo("1", "a.jpg")];

        let _ = app.update(Message::PhotosLoaded(1, Ok(vec![photo("9", "z.jpg")])));

        assert_eq!(app.photos, vec![photo("1", "a.jpg")]);
    }

    #[test]
    fn test_fetch_failure_keeps_previous_list() {
        let mut app = test_app();
        app.photos = vec![photo("1", "a.jpg")];

        let _ = app.update(Message::PhotosLoaded(1, Err("down".to_string())));

        assert_eq!(app.photos, vec![photo("1", "a.jpg")]);
        assert_eq!(app.status, "Could not load photos: down");
    }

    #[test]
    fn test_clearing_selection_hides_preview() {
        let mut app = test_app();

        let _ = app.update(Message::FileSelected(Some(pending())));
        assert!(app.preview.is_some());
        assert_eq!(app.selected, Some(pending()));

        let _ = app.update(Message::FileSelected(None));
        assert!(app.preview.is_none());
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_thumbnail_cache_follows_the_list() {
        let mut app = test_app();
        app.photos = vec![photo("1", "a.jpg")];
        app.thumbnails
            .insert("1".to_string(), image::Handle::from_bytes(vec![1]));

        // A download for a photo no longer listed is dropped
        let _ = app.update(Message::ThumbnailLoaded(
            "2".to_string(),
            Ok(image::Handle::from_bytes(vec![2])),
        ));
        assert!(!app.thumbnails.contains_key("2"));

        // Replacing the list evicts cache entries that left it
        let _ = app.update(Message::PhotosLoaded(1, Ok(vec![photo("2", "b.jpg")])));
        assert!(!app.thumbnails.contains_key("1"));
    }
}
