use serde::{Deserialize, Serialize};

/// Countdown value the display starts from after every successful refresh.
pub const COUNTDOWN_START: i32 = 10;

/// At or below this value the countdown is rendered in the warning tone.
pub const WARNING_THRESHOLD: i32 = 3;

/// Course/session pair scraped from the display page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLocator {
    pub course_id: String,
    pub session_id: String,
}

impl SessionLocator {
    pub fn new(course_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            session_id: session_id.into(),
        }
    }

    /// Path of the session-scoped refresh endpoint.
    pub fn refresh_path(&self) -> String {
        format!(
            "/courses/{}/sessions/{}/refresh-qr/",
            self.course_id, self.session_id
        )
    }
}

/// Wire shape of the refresh-qr endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Rendering tone for the countdown text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTone {
    Normal,
    Warning,
}

impl CountdownTone {
    pub fn for_value(value: i32) -> Self {
        if value <= WARNING_THRESHOLD {
            CountdownTone::Warning
        } else {
            CountdownTone::Normal
        }
    }
}

/// Element identifiers of the display page.
///
/// The surrounding page supplies these elements; keeping the ids as explicit
/// configuration makes the page contract testable without a real page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub qr_section: String,
    pub qr_image: String,
    pub countdown_display: String,
    pub generate_button: String,
    pub expired_notice_class: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            qr_section: "qr-code-section".to_string(),
            qr_image: "qr-code-image".to_string(),
            countdown_display: "countdown-display".to_string(),
            generate_button: "generate-qr-button".to_string(),
            expired_notice_class: "alert-warning".to_string(),
        }
    }
}
