//! The vendor backend seam.
//!
//! Concrete implementations live outside this crate (SDM, legacy MM, or
//! whatever the platform ships) and are injected into [`DisplayHal`] at
//! startup. All calls are synchronous and assumed reentrant by the
//! underlying driver.
//!
//! [`DisplayHal`]: crate::DisplayHal

use thiserror::Error;

use crate::types::{BalanceRange, DisplayMode, Feature, Hsic, HsicRanges};

/// Errors reported by a vendor backend.
///
/// These never cross the public facade boundary; [`DisplayHal`] collapses
/// them into absent values or `false` per the platform contract.
///
/// [`DisplayHal`]: crate::DisplayHal
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend not initialized")]
    NotInitialized,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("vendor call failed: {0}")]
    Vendor(String),
}

/// Operations a vendor display backend must provide.
///
/// `color_balance` and the two `*_enabled` queries are infallible by vendor
/// convention: drivers report a current value or a resting default, never an
/// error. Everything else returns `Result` so initialization and hardware
/// faults can be surfaced to the facade, which logs and resets.
pub trait VendorBackend: Send {
    /// Bring up the backend. Called lazily, once per connection.
    fn initialize(&mut self) -> Result<(), BackendError>;

    /// Tear down the backend. Must be safe to call after a failed call.
    fn deinitialize(&mut self);

    /// Whether the driver exposes `feature` on this panel.
    fn has_feature(&self, feature: Feature) -> bool;

    // Display modes
    fn display_modes(&mut self) -> Result<Vec<DisplayMode>, BackendError>;
    fn current_display_mode(&mut self) -> Result<Option<DisplayMode>, BackendError>;
    fn default_display_mode(&mut self) -> Result<Option<DisplayMode>, BackendError>;
    fn set_display_mode(&mut self, mode_id: i32, make_default: bool) -> Result<(), BackendError>;

    // Color balance
    fn color_balance_range(&mut self) -> Result<BalanceRange, BackendError>;
    fn color_balance(&mut self) -> i32;
    fn set_color_balance(&mut self, value: i32) -> Result<(), BackendError>;

    // Mode toggles
    fn outdoor_mode_enabled(&mut self) -> bool;
    fn set_outdoor_mode(&mut self, enabled: bool) -> Result<(), BackendError>;
    fn adaptive_backlight_enabled(&mut self) -> bool;
    fn set_adaptive_backlight(&mut self, enabled: bool) -> Result<(), BackendError>;

    // Picture adjustment
    fn picture_adjustment(&mut self) -> Result<Hsic, BackendError>;
    fn default_picture_adjustment(&mut self) -> Result<Hsic, BackendError>;
    fn set_picture_adjustment(&mut self, hsic: Hsic) -> Result<(), BackendError>;
    fn picture_adjustment_ranges(&mut self) -> Result<HsicRanges, BackendError>;
}
