/// Client configuration loaded from environment variables
///
/// Both settings have defaults so the app starts with zero configuration
/// against a local development backend.

/// How upload/fetch failures are surfaced to the user
///
/// The web client this replaces announced success with an alert but kept
/// failures console-only. That asymmetry is preserved here as an explicit
/// choice instead of an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureNotice {
    /// Console-only: success is announced, failure is never shown
    Silent,
    /// Failures are also written to the status line
    Status,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the photo API.
    /// Env: `PHOTO_API_URL`
    /// Default: `http://localhost:3333`
    pub api_base_url: String,

    /// Whether upload/fetch failures are shown in the status line.
    /// Env: `PHOTO_FAILURE_NOTICE` (`silent` / `status`)
    /// Default: `status`
    pub failure_notice: FailureNotice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            failure_notice: FailureNotice::Status,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PHOTO_API_URL") {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }

        if let Ok(val) = std::env::var("PHOTO_FAILURE_NOTICE") {
            match parse_failure_notice(&val) {
                Some(notice) => config.failure_notice = notice,
                None => {
                    eprintln!("⚠️  Unknown PHOTO_FAILURE_NOTICE '{}', using default", val);
                }
            }
        }

        config
    }
}

/// Parse a failure notice policy name
fn parse_failure_notice(val: &str) -> Option<FailureNotice> {
    match val.trim() {
        "silent" => Some(FailureNotice::Silent),
        "status" => Some(FailureNotice::Status),
        _ => None,
    }
}
