//! Picture adjustment accessor for platform callers.
//!
//! Thin view over [`DisplayHal`] with the contract platform code expects:
//! no errors, ever. "Unsupported" and "the vendor call failed" are both
//! reported as an absent value or `false`; callers are expected to check
//! [`PictureAdjustment::is_supported`] before trusting anything else.

use std::sync::Arc;

use crate::hal::DisplayHal;
use crate::types::{Feature, FloatRange, Hsic, HsicRanges};

/// Hue/saturation/intensity/contrast control for the panel.
pub struct PictureAdjustment {
    hal: Arc<DisplayHal>,
    supported: bool,
}

impl PictureAdjustment {
    /// Probes the capability bit once; the answer is held for the lifetime
    /// of this value, so [`is_supported`](Self::is_supported) never flaps.
    pub fn new(hal: Arc<DisplayHal>) -> Self {
        let supported = hal.has_feature(Feature::PICTURE_ADJUSTMENT);
        Self { hal, supported }
    }

    /// Whether the panel supports picture adjustment. Stable across calls.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// The current adjustment, or `None` when unsupported or the backend
    /// call fails.
    pub fn adjustment(&self) -> Option<Hsic> {
        if !self.supported {
            return None;
        }
        self.hal.picture_adjustment()
    }

    /// The panel's factory adjustment.
    pub fn default_adjustment(&self) -> Option<Hsic> {
        if !self.supported {
            return None;
        }
        self.hal.default_picture_adjustment()
    }

    /// Apply an adjustment. `false` when unsupported or when the backend
    /// reports failure; the two causes are indistinguishable here.
    pub fn set_adjustment(&self, hsic: Hsic) -> bool {
        if !self.supported {
            return false;
        }
        self.hal.set_picture_adjustment(hsic)
    }

    pub fn hue_range(&self) -> FloatRange {
        self.channel_range(|r| r.hue)
    }

    pub fn saturation_range(&self) -> FloatRange {
        self.channel_range(|r| r.saturation)
    }

    pub fn intensity_range(&self) -> FloatRange {
        self.channel_range(|r| r.intensity)
    }

    pub fn contrast_range(&self) -> FloatRange {
        self.channel_range(|r| r.contrast)
    }

    pub fn saturation_threshold_range(&self) -> FloatRange {
        self.channel_range(|r| r.saturation_threshold)
    }

    /// All per-channel ranges come from one backend call; a failure or a
    /// missing feature degrades every channel to the `(0.0, 0.0)` sentinel.
    fn channel_range(&self, pick: impl Fn(&HsicRanges) -> FloatRange) -> FloatRange {
        if !self.supported {
            return FloatRange::default();
        }
        self.hal
            .picture_adjustment_ranges()
            .map(|ranges| pick(&ranges))
            .unwrap_or_default()
    }
}
