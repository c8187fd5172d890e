pub mod backend;
pub mod controller;
pub mod cookie;
pub mod display_loop;
pub mod locator;
pub mod surface;

pub use crate::domain::model::{
    CountdownTone, ElementIds, RefreshResponse, SessionLocator, COUNTDOWN_START,
    WARNING_THRESHOLD,
};
pub use crate::domain::ports::{ConfigProvider, QrSurface, RefreshBackend};
pub use crate::utils::error::Result;
