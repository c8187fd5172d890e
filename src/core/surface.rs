use crate::core::{CountdownTone, ElementIds, QrSurface};

/// In-memory model of the attendance display page.
///
/// Stands in for the server-rendered page: it tracks which elements exist,
/// the displayed QR image source, the countdown text and whether an expired
/// notice is shown. The CLI binary renders through it and tests observe it.
#[derive(Debug, Clone)]
pub struct PageSurface {
    elements: ElementIds,
    qr_section: bool,
    generate_button: bool,
    countdown_text: Option<String>,
    countdown_tone: CountdownTone,
    qr_image_src: Option<String>,
    expired_notice: bool,
}

impl PageSurface {
    pub fn new(elements: ElementIds) -> Self {
        Self {
            elements,
            qr_section: true,
            generate_button: true,
            countdown_text: Some("10".to_string()),
            countdown_tone: CountdownTone::Normal,
            qr_image_src: None,
            expired_notice: false,
        }
    }

    pub fn with_countdown_text(mut self, text: impl Into<String>) -> Self {
        self.countdown_text = Some(text.into());
        self
    }

    pub fn without_countdown(mut self) -> Self {
        self.countdown_text = None;
        self
    }

    pub fn without_qr_section(mut self) -> Self {
        self.qr_section = false;
        self
    }

    pub fn without_generate_button(mut self) -> Self {
        self.generate_button = false;
        self
    }

    pub fn with_qr_image(mut self, src: impl Into<String>) -> Self {
        self.qr_image_src = Some(src.into());
        self
    }

    pub fn with_expired_notice(mut self) -> Self {
        self.expired_notice = true;
        self
    }

    pub fn qr_image_src(&self) -> Option<&str> {
        self.qr_image_src.as_deref()
    }

    pub fn countdown_text(&self) -> Option<&str> {
        self.countdown_text.as_deref()
    }

    pub fn countdown_tone(&self) -> CountdownTone {
        self.countdown_tone
    }

    pub fn has_expired_notice(&self) -> bool {
        self.expired_notice
    }
}

impl QrSurface for PageSurface {
    fn has_qr_section(&self) -> bool {
        self.qr_section
    }

    fn has_countdown(&self) -> bool {
        self.countdown_text.is_some()
    }

    fn has_generate_button(&self) -> bool {
        self.generate_button
    }

    fn initial_countdown_text(&self) -> Option<String> {
        self.countdown_text.clone()
    }

    fn set_countdown(&mut self, value: i32, tone: CountdownTone) {
        if self.countdown_text.is_none() {
            return;
        }
        self.countdown_text = Some(value.to_string());
        self.countdown_tone = tone;
        match tone {
            CountdownTone::Warning => println!("⏳ {}  (expiring soon)", value),
            CountdownTone::Normal => println!("⏳ {}", value),
        }
    }

    fn set_qr_image(&mut self, src: &str) {
        self.qr_image_src = Some(src.to_string());
        tracing::info!(element = %self.elements.qr_image, "QR image updated: {}", src);
    }

    fn remove_expired_notice(&mut self) {
        if self.expired_notice {
            tracing::info!(
                class = %self.elements.expired_notice_class,
                "Removed expired notice"
            );
        }
        self.expired_notice = false;
    }
}
