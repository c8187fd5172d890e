use crate::core::locator::locate_session;
use crate::core::{
    CountdownTone, QrSurface, RefreshBackend, SessionLocator, COUNTDOWN_START,
};
use crate::utils::error::{QrError, Result};

/// Countdown state owned by the controller. Both triggers (the tick and the
/// manual generate) go through the owning controller, never through shared
/// mutable fields.
#[derive(Debug, Clone, Copy)]
pub struct CountdownState {
    pub time_left: i32,
    pub refresh_in_flight: bool,
}

/// Drives the visible countdown and invokes the remote refresh on schedule
/// or on demand.
///
/// Every error is swallowed at this boundary: locator, transport and
/// application failures are logged and the next trigger starts a fresh
/// attempt. Nothing is retried and nothing propagates to the caller.
pub struct RefreshController<S: QrSurface, B: RefreshBackend> {
    surface: S,
    backend: B,
    page_path: String,
    duration: u32,
    state: CountdownState,
}

impl<S: QrSurface, B: RefreshBackend> RefreshController<S, B> {
    /// The initial countdown is seeded from whatever the page rendered into
    /// the countdown element, falling back to the standard start value.
    pub fn new(surface: S, backend: B, page_path: impl Into<String>, duration: u32) -> Self {
        let time_left = surface
            .initial_countdown_text()
            .and_then(|text| text.trim().parse::<i32>().ok())
            .unwrap_or(COUNTDOWN_START);

        Self {
            surface,
            backend,
            page_path: page_path.into(),
            duration,
            state: CountdownState {
                time_left,
                refresh_in_flight: false,
            },
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn countdown(&self) -> i32 {
        self.state.time_left
    }

    /// Resolves the course/session pair from the page path.
    pub fn locate_session(&self) -> Result<SessionLocator> {
        locate_session(&self.page_path).ok_or_else(|| QrError::SessionNotLocated {
            path: self.page_path.clone(),
        })
    }

    /// One countdown tick. Does nothing unless both the countdown display
    /// and the QR section exist. When the value reaches zero the refresh is
    /// invoked and the countdown restarts regardless of the outcome.
    pub async fn tick(&mut self) {
        if !(self.surface.has_countdown() && self.surface.has_qr_section()) {
            return;
        }

        self.state.time_left -= 1;
        let value = self.state.time_left;
        self.surface
            .set_countdown(value, CountdownTone::for_value(value));

        if self.state.time_left <= 0 {
            tracing::info!("Countdown reached zero, refreshing QR code");
            self.refresh().await;
            self.state.time_left = COUNTDOWN_START;
        }
    }

    /// Manual generate trigger. Invokes the refresh immediately, independent
    /// of the timer phase. On failure the countdown is left where it was;
    /// only the zero-reached tick path restarts it unconditionally.
    pub async fn generate(&mut self) {
        tracing::debug!("Manual QR generation requested");
        self.refresh().await;
    }

    /// Issues one refresh attempt, swallowing every failure. Returns whether
    /// the displayed image was replaced.
    pub async fn refresh(&mut self) -> bool {
        if self.state.refresh_in_flight {
            tracing::debug!("Refresh already in flight, skipping trigger");
            return false;
        }

        self.state.refresh_in_flight = true;
        let outcome = self.try_refresh().await;
        self.state.refresh_in_flight = false;

        match outcome {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error generating QR code: {}", e);
                false
            }
        }
    }

    async fn try_refresh(&mut self) -> Result<()> {
        let locator = self.locate_session()?;
        tracing::info!(
            course = %locator.course_id,
            session = %locator.session_id,
            "Refreshing QR code"
        );

        let response = self.backend.refresh_qr(&locator, self.duration).await?;

        if !response.success {
            return Err(QrError::Rejected {
                message: response.error.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }
        let Some(image) = response.qr_image else {
            return Err(QrError::Rejected {
                message: "Response carried no QR image".to_string(),
            });
        };

        self.surface.set_qr_image(&image);
        self.surface.remove_expired_notice();
        self.state.time_left = COUNTDOWN_START;
        self.surface
            .set_countdown(COUNTDOWN_START, CountdownTone::for_value(COUNTDOWN_START));

        tracing::info!("QR code refreshed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::PageSurface;
    use crate::core::{ElementIds, RefreshResponse};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy)]
    enum Outcome {
        Success,
        Rejected,
        Transport,
    }

    #[derive(Clone)]
    struct MockBackend {
        outcome: Outcome,
        image: String,
        calls: Arc<Mutex<Vec<(SessionLocator, u32)>>>,
    }

    impl MockBackend {
        fn succeeding(image: &str) -> Self {
            Self {
                outcome: Outcome::Success,
                image: image.to_string(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn rejecting() -> Self {
            Self {
                outcome: Outcome::Rejected,
                image: String::new(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Outcome::Transport,
                image: String::new(),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl RefreshBackend for MockBackend {
        async fn refresh_qr(
            &self,
            locator: &SessionLocator,
            duration: u32,
        ) -> crate::utils::error::Result<RefreshResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((locator.clone(), duration));
            match self.outcome {
                Outcome::Success => Ok(RefreshResponse {
                    success: true,
                    qr_image: Some(self.image.clone()),
                    error: None,
                }),
                Outcome::Rejected => Ok(RefreshResponse {
                    success: false,
                    qr_image: None,
                    error: Some("Session is not active".to_string()),
                }),
                Outcome::Transport => Err(QrError::HttpStatus {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                }),
            }
        }
    }

    fn controller_with(
        surface: PageSurface,
        backend: MockBackend,
    ) -> RefreshController<PageSurface, MockBackend> {
        RefreshController::new(surface, backend, "/courses/12/sessions/99/display/", 10)
    }

    #[tokio::test]
    async fn test_tick_decrements_and_updates_display() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("10");
        let backend = MockBackend::succeeding("/q.png");
        let mut controller = controller_with(surface, backend.clone());

        controller.tick().await;

        assert_eq!(controller.countdown(), 9);
        assert_eq!(controller.surface().countdown_text(), Some("9"));
        assert_eq!(controller.surface().countdown_tone(), CountdownTone::Normal);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_warning_tone_at_threshold() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("4");
        let backend = MockBackend::succeeding("/q.png");
        let mut controller = controller_with(surface, backend);

        controller.tick().await;

        assert_eq!(controller.surface().countdown_text(), Some("3"));
        assert_eq!(
            controller.surface().countdown_tone(),
            CountdownTone::Warning
        );
    }

    #[tokio::test]
    async fn test_tick_noop_without_qr_section() {
        let surface = PageSurface::new(ElementIds::default()).without_qr_section();
        let backend = MockBackend::succeeding("/q.png");
        let mut controller = controller_with(surface, backend.clone());

        controller.tick().await;

        assert_eq!(controller.countdown(), 10);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_tick_noop_without_countdown_display() {
        let surface = PageSurface::new(ElementIds::default()).without_countdown();
        let backend = MockBackend::succeeding("/q.png");
        let mut controller = controller_with(surface, backend.clone());

        controller.tick().await;

        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_zero_triggers_one_refresh_and_resets() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("1");
        let backend = MockBackend::succeeding("/media/qr/new.png");
        let mut controller = controller_with(surface, backend.clone());

        controller.tick().await;

        assert_eq!(backend.call_count(), 1);
        assert_eq!(controller.countdown(), 10);
        assert_eq!(
            controller.surface().qr_image_src(),
            Some("/media/qr/new.png")
        );
    }

    #[tokio::test]
    async fn test_zero_resets_even_when_refresh_fails() {
        let surface = PageSurface::new(ElementIds::default())
            .with_countdown_text("1")
            .with_qr_image("/media/qr/old.png");
        let backend = MockBackend::failing();
        let mut controller = controller_with(surface, backend.clone());

        controller.tick().await;

        assert_eq!(backend.call_count(), 1);
        assert_eq!(controller.countdown(), 10);
        // Failed refresh leaves the displayed image alone
        assert_eq!(
            controller.surface().qr_image_src(),
            Some("/media/qr/old.png")
        );
    }

    #[tokio::test]
    async fn test_successful_refresh_swaps_image_and_removes_notice() {
        let surface = PageSurface::new(ElementIds::default())
            .with_qr_image("/media/qr/old.png")
            .with_expired_notice();
        let backend = MockBackend::succeeding("/media/qr/new.png");
        let mut controller = controller_with(surface, backend.clone());

        let refreshed = controller.refresh().await;

        assert!(refreshed);
        assert_eq!(
            controller.surface().qr_image_src(),
            Some("/media/qr/new.png")
        );
        assert!(!controller.surface().has_expired_notice());
        assert_eq!(controller.countdown(), 10);
        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SessionLocator::new("12", "99"));
        assert_eq!(calls[0].1, 10);
    }

    #[tokio::test]
    async fn test_manual_failure_does_not_reset_countdown() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("7");
        let backend = MockBackend::failing();
        let mut controller = controller_with(surface, backend.clone());

        controller.generate().await;

        assert_eq!(backend.call_count(), 1);
        assert_eq!(controller.countdown(), 7);
    }

    #[tokio::test]
    async fn test_manual_success_resets_countdown() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("7");
        let backend = MockBackend::succeeding("/q.png");
        let mut controller = controller_with(surface, backend);

        controller.generate().await;

        assert_eq!(controller.countdown(), 10);
        assert_eq!(controller.surface().countdown_text(), Some("10"));
    }

    #[tokio::test]
    async fn test_rejected_refresh_leaves_image_unchanged() {
        let surface = PageSurface::new(ElementIds::default())
            .with_qr_image("/media/qr/old.png")
            .with_expired_notice();
        let backend = MockBackend::rejecting();
        let mut controller = controller_with(surface, backend);

        let refreshed = controller.refresh().await;

        assert!(!refreshed);
        assert_eq!(
            controller.surface().qr_image_src(),
            Some("/media/qr/old.png")
        );
        assert!(controller.surface().has_expired_notice());
    }

    #[tokio::test]
    async fn test_unlocatable_session_sends_no_request() {
        let surface = PageSurface::new(ElementIds::default());
        let backend = MockBackend::succeeding("/q.png");
        let mut controller =
            RefreshController::new(surface, backend.clone(), "/dashboard/overview/", 10);

        let refreshed = controller.refresh().await;

        assert!(!refreshed);
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_initial_countdown_seeded_from_page_text() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("6");
        let backend = MockBackend::succeeding("/q.png");
        let controller = controller_with(surface, backend);

        assert_eq!(controller.countdown(), 6);
    }

    #[tokio::test]
    async fn test_unparseable_countdown_text_falls_back_to_start() {
        let surface = PageSurface::new(ElementIds::default()).with_countdown_text("--");
        let backend = MockBackend::succeeding("/q.png");
        let controller = controller_with(surface, backend);

        assert_eq!(controller.countdown(), COUNTDOWN_START);
    }
}
