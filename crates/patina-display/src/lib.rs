//! Vendor display capability layer.
//!
//! Higher-level platform code uses this crate to query and adjust
//! panel-level color features: picture adjustment (HSIC), color balance,
//! calibration modes, outdoor mode, and adaptive backlight. The actual
//! driver work happens in a vendor-supplied [`VendorBackend`] injected at
//! startup; this crate only gates each operation on the backend's
//! capability bits and collapses failures into the defaults platform
//! callers expect.

mod backend;
mod hal;
mod picture;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use backend::{BackendError, VendorBackend};
pub use hal::DisplayHal;
pub use picture::PictureAdjustment;
pub use types::{BalanceRange, DisplayMode, Feature, FloatRange, Hsic, HsicRanges};
