//! Scripted backend used by the unit tests in this crate.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, VendorBackend};
use crate::types::{BalanceRange, DisplayMode, Feature, FloatRange, Hsic, HsicRanges};

/// Call counters shared with the test body after the backend is boxed.
#[derive(Default)]
pub(crate) struct CallLog {
    pub initialize: AtomicUsize,
    pub deinitialize: AtomicUsize,
    pub picture_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
    pub mode_calls: AtomicUsize,
}

pub(crate) struct MockBackend {
    features: Feature,
    pub fail_initialize: bool,
    pub fail_mutations: bool,
    outdoor: bool,
    adaptive: bool,
    log: Arc<CallLog>,
}

impl MockBackend {
    pub fn parts(features: Feature) -> (Self, Arc<CallLog>) {
        let log = Arc::new(CallLog::default());
        let backend = Self {
            features,
            fail_initialize: false,
            fail_mutations: false,
            outdoor: false,
            adaptive: false,
            log: Arc::clone(&log),
        };
        (backend, log)
    }

    pub fn with_features(features: Feature) -> (Box<dyn VendorBackend>, Arc<CallLog>) {
        let (backend, log) = Self::parts(features);
        (Box::new(backend), log)
    }

    pub fn sample_hsic() -> Hsic {
        Hsic {
            hue: 10.0,
            saturation: 1.1,
            intensity: 0.9,
            contrast: 1.2,
            saturation_threshold: 0.2,
        }
    }

    pub fn sample_ranges() -> HsicRanges {
        HsicRanges {
            hue: FloatRange::new(0.0, 360.0),
            saturation: FloatRange::new(0.0, 2.0),
            intensity: FloatRange::new(0.25, 1.75),
            contrast: FloatRange::new(0.5, 1.5),
            saturation_threshold: FloatRange::new(0.0, 1.0),
        }
    }

    fn mutate(&mut self) -> Result<(), BackendError> {
        if self.fail_mutations {
            Err(BackendError::Vendor("mock mutation failure".into()))
        } else {
            Ok(())
        }
    }
}

impl VendorBackend for MockBackend {
    fn initialize(&mut self) -> Result<(), BackendError> {
        self.log.initialize.fetch_add(1, Ordering::SeqCst);
        if self.fail_initialize {
            Err(BackendError::Vendor("mock init failure".into()))
        } else {
            Ok(())
        }
    }

    fn deinitialize(&mut self) {
        self.log.deinitialize.fetch_add(1, Ordering::SeqCst);
    }

    fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }

    fn display_modes(&mut self) -> Result<Vec<DisplayMode>, BackendError> {
        self.log.mode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            DisplayMode::new(0, "standard"),
            DisplayMode::new(1, "vivid"),
        ])
    }

    fn current_display_mode(&mut self) -> Result<Option<DisplayMode>, BackendError> {
        self.log.mode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(DisplayMode::new(0, "standard")))
    }

    fn default_display_mode(&mut self) -> Result<Option<DisplayMode>, BackendError> {
        self.log.mode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(DisplayMode::new(1, "vivid")))
    }

    fn set_display_mode(&mut self, _mode_id: i32, _make_default: bool) -> Result<(), BackendError> {
        self.log.mode_calls.fetch_add(1, Ordering::SeqCst);
        self.mutate()
    }

    fn color_balance_range(&mut self) -> Result<BalanceRange, BackendError> {
        self.log.balance_calls.fetch_add(1, Ordering::SeqCst);
        Ok(BalanceRange::new(-100, 100))
    }

    fn color_balance(&mut self) -> i32 {
        self.log.balance_calls.fetch_add(1, Ordering::SeqCst);
        7
    }

    fn set_color_balance(&mut self, _value: i32) -> Result<(), BackendError> {
        self.log.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.mutate()
    }

    fn outdoor_mode_enabled(&mut self) -> bool {
        self.outdoor
    }

    fn set_outdoor_mode(&mut self, enabled: bool) -> Result<(), BackendError> {
        self.mutate()?;
        self.outdoor = enabled;
        Ok(())
    }

    fn adaptive_backlight_enabled(&mut self) -> bool {
        self.adaptive
    }

    fn set_adaptive_backlight(&mut self, enabled: bool) -> Result<(), BackendError> {
        self.mutate()?;
        self.adaptive = enabled;
        Ok(())
    }

    fn picture_adjustment(&mut self) -> Result<Hsic, BackendError> {
        self.log.picture_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::sample_hsic())
    }

    fn default_picture_adjustment(&mut self) -> Result<Hsic, BackendError> {
        self.log.picture_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Hsic::default())
    }

    fn set_picture_adjustment(&mut self, _hsic: Hsic) -> Result<(), BackendError> {
        self.log.picture_calls.fetch_add(1, Ordering::SeqCst);
        self.mutate()
    }

    fn picture_adjustment_ranges(&mut self) -> Result<HsicRanges, BackendError> {
        self.log.picture_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::sample_ranges())
    }
}
