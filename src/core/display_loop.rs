use crate::core::controller::RefreshController;
use crate::core::{QrSurface, RefreshBackend};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Runs the refresh controller against a recurring timer.
///
/// One tick per interval for the lifetime of the page view; the timer is
/// never cancelled. When the surface has a generate button, a line on stdin
/// acts as the button press and triggers an immediate refresh. Both triggers
/// are serialized through the controller, so a manual press during a
/// timer-triggered refresh simply waits its turn.
pub struct DisplayLoop<S: QrSurface, B: RefreshBackend> {
    controller: RefreshController<S, B>,
    interval: Duration,
}

impl<S: QrSurface, B: RefreshBackend> DisplayLoop<S, B> {
    pub fn new(controller: RefreshController<S, B>, interval: Duration) -> Self {
        Self {
            controller,
            interval,
        }
    }

    pub async fn run(mut self) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut manual_enabled = self.controller.surface().has_generate_button();
        if manual_enabled {
            tracing::info!("Press Enter to generate a new QR code manually");
        }

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.controller.tick().await;
                }
                line = lines.next_line(), if manual_enabled => {
                    match line {
                        Ok(Some(_)) => {
                            self.controller.generate().await;
                        }
                        Ok(None) | Err(_) => {
                            // stdin closed; the countdown keeps running
                            manual_enabled = false;
                        }
                    }
                }
            }
        }
    }
}
