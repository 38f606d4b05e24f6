//! Capability-gated facade over the injected vendor backend.
//!
//! Every public operation follows the same shape: connect lazily, check the
//! relevant [`Feature`] bit, forward to the backend, and collapse any error
//! into the platform's "absent / false / degenerate default" contract. A
//! backend error also drops the connection so the next call re-probes from
//! scratch.

use parking_lot::Mutex;

use crate::backend::{BackendError, VendorBackend};
use crate::types::{BalanceRange, DisplayMode, Feature, Hsic, HsicRanges};

/// Process-wide entry point for vendor display control.
///
/// Holds the backend behind a single mutex; vendor drivers are not trusted
/// to handle overlapping calls even when they claim reentrancy.
pub struct DisplayHal {
    inner: Mutex<HalState>,
}

struct HalState {
    backend: Box<dyn VendorBackend>,
    connected: bool,
    features: Feature,
}

impl HalState {
    fn connect(&mut self) -> bool {
        if self.connected {
            return true;
        }

        self.features = Feature::empty();
        if let Err(err) = self.backend.initialize() {
            tracing::error!(%err, "failed to initialize vendor display backend");
            return false;
        }

        for feature in Feature::all().iter() {
            if self.backend.has_feature(feature) {
                self.features |= feature;
            }
        }
        self.connected = true;
        tracing::debug!(features = ?self.features, "vendor display backend connected");

        !self.features.is_empty()
    }

    fn check(&mut self, feature: Feature) -> bool {
        self.connect() && self.features.contains(feature)
    }

    /// Log a failed vendor call and drop the connection so the next
    /// operation starts from a clean probe.
    fn fail(&mut self, what: &str, err: &BackendError) {
        tracing::error!(%err, "{what}");
        if self.connected {
            self.backend.deinitialize();
        }
        self.features = Feature::empty();
        self.connected = false;
    }
}

impl DisplayHal {
    pub fn new(backend: Box<dyn VendorBackend>) -> Self {
        Self {
            inner: Mutex::new(HalState {
                backend,
                connected: false,
                features: Feature::empty(),
            }),
        }
    }

    /// The feature set the backend reports for this panel.
    pub fn supported_features(&self) -> Feature {
        let mut state = self.inner.lock();
        state.connect();
        state.features
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.inner.lock().check(feature)
    }

    // -- Display modes -------------------------------------------------

    /// All calibration profiles the panel offers, or empty when the
    /// feature is missing or the backend call fails.
    pub fn display_modes(&self) -> Vec<DisplayMode> {
        let mut state = self.inner.lock();
        if !state.check(Feature::DISPLAY_MODES) {
            return Vec::new();
        }
        match state.backend.display_modes() {
            Ok(modes) => modes,
            Err(err) => {
                state.fail("unable to fetch display modes", &err);
                Vec::new()
            }
        }
    }

    pub fn current_display_mode(&self) -> Option<DisplayMode> {
        let mut state = self.inner.lock();
        if !state.check(Feature::DISPLAY_MODES) {
            return None;
        }
        match state.backend.current_display_mode() {
            Ok(mode) => mode,
            Err(err) => {
                state.fail("unable to fetch current display mode", &err);
                None
            }
        }
    }

    pub fn default_display_mode(&self) -> Option<DisplayMode> {
        let mut state = self.inner.lock();
        if !state.check(Feature::DISPLAY_MODES) {
            return None;
        }
        match state.backend.default_display_mode() {
            Ok(mode) => mode,
            Err(err) => {
                state.fail("unable to fetch default display mode", &err);
                None
            }
        }
    }

    pub fn set_display_mode(&self, mode_id: i32, make_default: bool) -> bool {
        let mut state = self.inner.lock();
        if !state.check(Feature::DISPLAY_MODES) {
            return false;
        }
        match state.backend.set_display_mode(mode_id, make_default) {
            Ok(()) => true,
            Err(err) => {
                state.fail("unable to set display mode", &err);
                false
            }
        }
    }

    // -- Color balance -------------------------------------------------

    pub fn color_balance_range(&self) -> BalanceRange {
        let mut state = self.inner.lock();
        if !state.check(Feature::COLOR_TEMPERATURE) {
            return BalanceRange::default();
        }
        match state.backend.color_balance_range() {
            Ok(range) => range,
            Err(err) => {
                state.fail("unable to fetch color balance range", &err);
                BalanceRange::default()
            }
        }
    }

    /// Current packed color-balance value; 0 when unsupported.
    pub fn color_balance(&self) -> i32 {
        let mut state = self.inner.lock();
        if state.check(Feature::COLOR_TEMPERATURE) {
            state.backend.color_balance()
        } else {
            0
        }
    }

    pub fn set_color_balance(&self, value: i32) -> bool {
        let mut state = self.inner.lock();
        if !state.check(Feature::COLOR_TEMPERATURE) {
            return false;
        }
        match state.backend.set_color_balance(value) {
            Ok(()) => true,
            Err(err) => {
                state.fail("unable to set color balance", &err);
                false
            }
        }
    }

    // -- Mode toggles --------------------------------------------------

    pub fn outdoor_mode_enabled(&self) -> bool {
        let mut state = self.inner.lock();
        state.check(Feature::OUTDOOR_MODE) && state.backend.outdoor_mode_enabled()
    }

    pub fn set_outdoor_mode(&self, enabled: bool) -> bool {
        let mut state = self.inner.lock();
        if !state.check(Feature::OUTDOOR_MODE) {
            return false;
        }
        match state.backend.set_outdoor_mode(enabled) {
            Ok(()) => true,
            Err(err) => {
                state.fail("unable to toggle outdoor mode", &err);
                false
            }
        }
    }

    pub fn adaptive_backlight_enabled(&self) -> bool {
        let mut state = self.inner.lock();
        state.check(Feature::ADAPTIVE_BACKLIGHT) && state.backend.adaptive_backlight_enabled()
    }

    pub fn set_adaptive_backlight(&self, enabled: bool) -> bool {
        let mut state = self.inner.lock();
        if !state.check(Feature::ADAPTIVE_BACKLIGHT) {
            return false;
        }
        match state.backend.set_adaptive_backlight(enabled) {
            Ok(()) => true,
            Err(err) => {
                state.fail("unable to set adaptive backlight state", &err);
                false
            }
        }
    }

    // -- Picture adjustment --------------------------------------------

    pub fn picture_adjustment(&self) -> Option<Hsic> {
        let mut state = self.inner.lock();
        if !state.check(Feature::PICTURE_ADJUSTMENT) {
            return None;
        }
        match state.backend.picture_adjustment() {
            Ok(hsic) => Some(hsic),
            Err(err) => {
                state.fail("unable to get picture adjustment", &err);
                None
            }
        }
    }

    pub fn default_picture_adjustment(&self) -> Option<Hsic> {
        let mut state = self.inner.lock();
        if !state.check(Feature::PICTURE_ADJUSTMENT) {
            return None;
        }
        match state.backend.default_picture_adjustment() {
            Ok(hsic) => Some(hsic),
            Err(err) => {
                state.fail("unable to get default picture adjustment", &err);
                None
            }
        }
    }

    pub fn set_picture_adjustment(&self, hsic: Hsic) -> bool {
        let mut state = self.inner.lock();
        if !state.check(Feature::PICTURE_ADJUSTMENT) {
            return false;
        }
        match state.backend.set_picture_adjustment(hsic) {
            Ok(()) => true,
            Err(err) => {
                state.fail("unable to set picture adjustment", &err);
                false
            }
        }
    }

    pub fn picture_adjustment_ranges(&self) -> Option<HsicRanges> {
        let mut state = self.inner.lock();
        if !state.check(Feature::PICTURE_ADJUSTMENT) {
            return None;
        }
        match state.backend.picture_adjustment_ranges() {
            Ok(ranges) => Some(ranges),
            Err(err) => {
                state.fail("unable to get picture adjustment ranges", &err);
                None
            }
        }
    }
}
