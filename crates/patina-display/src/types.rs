//! Value types shared between the vendor backend seam and the public facades.
//!
//! Field sets and feature bit values are fixed by the vendor ABI; nothing
//! here validates ranges — that is the backend's job.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Capability bits reported by the vendor backend.
    ///
    /// The values are part of the vendor ABI and must not be renumbered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature: u32 {
        /// Named display calibration profiles.
        const DISPLAY_MODES = 0x01;
        /// Color temperature / color balance control.
        const COLOR_TEMPERATURE = 0x02;
        /// High-brightness outdoor (sunlight) mode.
        const OUTDOOR_MODE = 0x04;
        /// Content-adaptive backlight control.
        const ADAPTIVE_BACKLIGHT = 0x08;
        /// Direct hue/saturation/intensity/contrast adjustment.
        const PICTURE_ADJUSTMENT = 0x10;
    }
}

/// Hue/saturation/intensity/contrast picture adjustment.
///
/// All fields are in backend-native units; the valid window for each channel
/// is reported by [`HsicRanges`]. The all-zero default is the panel's
/// unadjusted state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsic {
    pub hue: f32,
    pub saturation: f32,
    pub intensity: f32,
    pub contrast: f32,
    /// Chroma cutoff below which saturation boosts are not applied.
    pub saturation_threshold: f32,
}

/// Inclusive `[min, max]` bounds for one adjustable channel.
///
/// A degenerate `(0.0, 0.0)` range is the "unsupported" sentinel used
/// throughout the public API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True when the range carries real bounds rather than the sentinel.
    pub fn is_non_zero(&self) -> bool {
        self.min != 0.0 || self.max != 0.0
    }
}

/// Integral bounds for the packed color-balance value.
///
/// Zero means no shift, negative values move towards warmer temperatures,
/// positive values towards cooler ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalanceRange {
    pub min: i32,
    pub max: i32,
}

impl BalanceRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn is_non_zero(&self) -> bool {
        self.min != 0 || self.max != 0
    }
}

/// Per-channel adjustment windows reported by the backend in one call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HsicRanges {
    pub hue: FloatRange,
    pub saturation: FloatRange,
    pub intensity: FloatRange,
    pub contrast: FloatRange,
    pub saturation_threshold: FloatRange,
}

impl HsicRanges {
    /// The backend advertises picture adjustment meaningfully only when the
    /// four primary channels all carry real bounds.
    pub fn is_valid(&self) -> bool {
        self.hue.is_non_zero()
            && self.saturation.is_non_zero()
            && self.intensity.is_non_zero()
            && self.contrast.is_non_zero()
    }
}

/// A named display calibration profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub id: i32,
    pub name: String,
}

impl DisplayMode {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
