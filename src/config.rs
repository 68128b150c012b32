//! Recognizer thresholds and logging level.
//!
//! Overrides are read as JSON from local storage; missing fields keep their
//! defaults, anything unreadable falls back to [`GestureConfig::default`].

use serde::Deserialize;

use crate::error::ConfigError;

pub const STORAGE_KEY: &str = "gr_gesture_config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Longest press still counted as a tap.
    pub tap_max_ms: f64,
    /// Movement allowed during a tap or long-press.
    pub tap_slop_px: f64,
    pub long_press_ms: f64,
    /// Movement before a single pointer becomes a pan.
    pub pan_slop_px: f64,
    pub swipe_min_distance_px: f64,
    pub swipe_max_ms: f64,
    /// Required ratio of vertical to horizontal travel for a swipe.
    pub swipe_axis_dominance: f64,
    /// Width of the band along the right edge that starts an edge pan.
    pub edge_band_px: f64,
    /// Wheel delta to pinch scale: `exp(-delta * factor)`.
    pub wheel_zoom_factor: f64,
    /// Wheel delta to rotation (radians per unit) when shift is held.
    pub wheel_rotation_factor: f64,
    pub log_level: String,
    /// Fixed seed for image selection; random per session when absent.
    pub seed: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_max_ms: 280.0,
            tap_slop_px: 10.0,
            long_press_ms: 700.0,
            pan_slop_px: 14.0,
            swipe_min_distance_px: 96.0,
            swipe_max_ms: 550.0,
            swipe_axis_dominance: 1.4,
            edge_band_px: 24.0,
            wheel_zoom_factor: 0.001,
            wheel_rotation_factor: 0.002,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl GestureConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GestureConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tap_max_ms", self.tap_max_ms),
            ("tap_slop_px", self.tap_slop_px),
            ("long_press_ms", self.long_press_ms),
            ("pan_slop_px", self.pan_slop_px),
            ("swipe_min_distance_px", self.swipe_min_distance_px),
            ("swipe_max_ms", self.swipe_max_ms),
            ("edge_band_px", self.edge_band_px),
            ("wheel_zoom_factor", self.wheel_zoom_factor),
            ("wheel_rotation_factor", self.wheel_rotation_factor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.swipe_axis_dominance >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "swipe_axis_dominance must be at least 1, got {}",
                self.swipe_axis_dominance
            )));
        }
        if self.tap_max_ms >= self.long_press_ms {
            return Err(ConfigError::Invalid(
                "tap_max_ms must be shorter than long_press_ms".to_string(),
            ));
        }
        if self.level().is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level {:?}",
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn level(&self) -> Option<tracing::Level> {
        self.log_level.parse().ok()
    }

    /// Reads overrides from browser local storage.
    pub fn from_storage() -> Result<Self, ConfigError> {
        let store = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(ConfigError::StorageUnavailable)?;
        match store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}
