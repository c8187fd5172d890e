use crate::domain::model::{CountdownTone, ElementIds, RefreshResponse, SessionLocator};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn page_path(&self) -> &str;
    fn cookie_header(&self) -> &str;
    fn csrf_cookie_name(&self) -> &str;
    fn qr_duration(&self) -> u32;
    fn tick_interval(&self) -> Duration;
    fn elements(&self) -> ElementIds;
}

/// The display page as seen by the controller.
///
/// Implementations model the page contract: a QR section, a QR image, a
/// countdown text, an optional generate button and an optional expired
/// notice. Every write is a no-op when the corresponding element is absent.
pub trait QrSurface: Send {
    fn has_qr_section(&self) -> bool;
    fn has_countdown(&self) -> bool;
    fn has_generate_button(&self) -> bool;

    /// Text the page rendered into the countdown element, if any.
    fn initial_countdown_text(&self) -> Option<String>;

    fn set_countdown(&mut self, value: i32, tone: CountdownTone);
    fn set_qr_image(&mut self, src: &str);
    fn remove_expired_notice(&mut self);
}

#[async_trait]
pub trait RefreshBackend: Send + Sync {
    async fn refresh_qr(
        &self,
        locator: &SessionLocator,
        duration: u32,
    ) -> Result<RefreshResponse>;
}
