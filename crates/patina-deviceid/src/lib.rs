//! Deterministic unique device identifier.
//!
//! Derives a stable, unchangeable ID for the device from the primary eMMC
//! chip's CID register, which the kernel exposes as a one-line sysfs
//! pseudo-file. The identifier is computed at most once per process and
//! cached — success and failure alike — so the hardware is never re-probed.
//!
//! A missing or malformed CID is not an error: the device simply reports
//! the capability as unsupported.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default sysfs location of the primary eMMC CID register.
const MMC0_CID_PATH: &str = "/sys/block/mmcblk0/device/cid";

/// Environment override for the CID source path.
const CID_PATH_ENV: &str = "PATINA_CID_PATH";

/// Expected length of the hex-encoded CID after trimming.
const CID_HEX_LEN: usize = 32;

/// Hardware sources an identifier can be derived from.
///
/// The source's tag becomes the leading field of the formatted identifier,
/// so new variants must claim a fresh tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    /// CID register of the first eMMC storage device.
    Mmc0Cid,
}

impl IdSource {
    const fn type_tag(self) -> u32 {
        match self {
            Self::Mmc0Cid => 0,
        }
    }
}

/// Lazily computed, process-lifetime device identifier.
///
/// The first call to [`unique_device_id`](Self::unique_device_id) or
/// [`is_supported`](Self::is_supported) probes the source file; every later
/// call returns the cached outcome, even if the file changes or appears
/// afterwards.
pub struct DeviceId {
    source_path: PathBuf,
    cached: OnceLock<Option<String>>,
}

impl DeviceId {
    /// Uses the standard sysfs CID path, or `PATINA_CID_PATH` when set.
    pub fn new() -> Self {
        let path = std::env::var(CID_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(MMC0_CID_PATH));
        Self::with_source_path(path)
    }

    /// Reads the CID from an explicit path instead of the sysfs default.
    pub fn with_source_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            cached: OnceLock::new(),
        }
    }

    /// Whether a usable identifier could be derived on this device.
    pub fn is_supported(&self) -> bool {
        self.unique_device_id().is_some()
    }

    /// The formatted identifier: `{type_tag:03x}` + five reserved zero
    /// digits + the 32-character CID, 40 characters total.
    pub fn unique_device_id(&self) -> Option<&str> {
        self.cached
            .get_or_init(|| probe(&self.source_path))
            .as_deref()
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::new()
    }
}

fn probe(path: &Path) -> Option<String> {
    let line = read_one_line(path)?;
    let cid = line.trim_end_matches('\n');
    if cid.len() != CID_HEX_LEN {
        tracing::debug!(
            path = %path.display(),
            len = cid.len(),
            "cid register has unexpected length, device id unavailable"
        );
        return None;
    }

    /* Additional source types get probed here. */

    Some(format_identifier(IdSource::Mmc0Cid, cid))
}

fn read_one_line(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text.lines().next().unwrap_or_default().to_owned()),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "cid register not readable");
            None
        }
    }
}

/// Fixed-width composite: 3-hex-digit source tag, 5 reserved zero digits,
/// then the value right-justified in 32 columns. The reserved field is
/// emitted literally for wire compatibility; no semantics are assumed.
fn format_identifier(source: IdSource, value: &str) -> String {
    format!("{:03x}00000{:>32}", source.type_tag(), value)
}
