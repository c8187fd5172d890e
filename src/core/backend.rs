use crate::core::cookie::cookie_value;
use crate::core::{ConfigProvider, RefreshBackend, RefreshResponse, SessionLocator};
use crate::utils::error::{QrError, Result};
use async_trait::async_trait;
use reqwest::Client;

const AJAX_HEADER: &str = "X-Requested-With";
const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Talks to the session-scoped refresh-qr endpoint over HTTP.
pub struct HttpBackend<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpBackend<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn refresh_url(&self, locator: &SessionLocator) -> String {
        format!(
            "{}{}",
            self.config.base_url().trim_end_matches('/'),
            locator.refresh_path()
        )
    }
}

#[async_trait]
impl<C: ConfigProvider> RefreshBackend for HttpBackend<C> {
    async fn refresh_qr(
        &self,
        locator: &SessionLocator,
        duration: u32,
    ) -> Result<RefreshResponse> {
        let url = self.refresh_url(locator);
        tracing::debug!("Posting refresh request to: {}", url);

        let mut request = self
            .client
            .post(&url)
            .header(AJAX_HEADER, AJAX_HEADER_VALUE)
            .form(&[("duration", duration.to_string())]);

        if let Some(token) = cookie_value(
            self.config.cookie_header(),
            self.config.csrf_cookie_name(),
        ) {
            request = request.header(CSRF_HEADER, token);
        } else {
            tracing::warn!(
                "CSRF cookie '{}' not found, sending request without token",
                self.config.csrf_cookie_name()
            );
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Refresh response status: {}", status);

        if !status.is_success() {
            return Err(QrError::HttpStatus { status });
        }

        let body: RefreshResponse = response.json().await?;
        Ok(body)
    }
}
