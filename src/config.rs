//! Ruler configuration
//!
//! Every behavior that used to differ between builds of the ruler (fixed
//! caps, half-inch bands, single or four-band layout, DPI fallback) is a
//! field here rather than a separate type.

use crate::Result;
use crate::constants::*;
use crate::error::RulerError;

/// How the drawing surface is divided into bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// One band when the surface is much wider or taller than the monitor,
    /// four bands otherwise
    #[default]
    Auto,
    /// One band along the surface's longer axis
    Single,
    /// Top, bottom, left and right bands
    FourBands,
}

/// Calibration and layout settings for a [`crate::Ruler`]
#[derive(Debug, Clone, PartialEq)]
pub struct RulerConfig {
    /// Cap on the ruler's long dimension
    pub max_long_mm: f64,
    /// Cap on the ruler's short dimension (band thickness)
    pub max_short_mm: f64,
    /// Gap left between a band and the surface edge
    pub margin_mm: f64,
    pub layout: LayoutMode,
    /// Resolution to assume when the monitor reports no physical size.
    /// `None` surfaces the calibration error instead.
    pub fallback_dpi: Option<f64>,
    /// Divergence between surface and monitor aspect that selects one band
    pub band_aspect_threshold: f64,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            max_long_mm: DEFAULT_MAX_LONG_MM,
            max_short_mm: DEFAULT_MAX_SHORT_MM,
            margin_mm: DEFAULT_MARGIN_MM,
            layout: LayoutMode::Auto,
            fallback_dpi: None,
            band_aspect_threshold: BAND_ASPECT_THRESHOLD,
        }
    }
}

impl RulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the long dimension
    pub fn with_max_long_mm(mut self, mm: f64) -> Self {
        self.max_long_mm = mm;
        self
    }

    /// Cap the short dimension
    pub fn with_max_short_mm(mut self, mm: f64) -> Self {
        self.max_short_mm = mm;
        self
    }

    /// Narrow bands, capped at half an inch
    pub fn half_inch_band(self) -> Self {
        self.with_max_short_mm(HALF_INCH_MAX_SHORT_MM)
    }

    /// Remove the long-dimension cap so bands span the whole surface
    pub fn unbounded(self) -> Self {
        self.with_max_long_mm(f64::INFINITY)
    }

    pub fn with_margin_mm(mut self, mm: f64) -> Self {
        self.margin_mm = mm;
        self
    }

    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Assume `dpi` when the monitor reports no usable physical size
    pub fn with_fallback_dpi(mut self, dpi: f64) -> Self {
        self.fallback_dpi = Some(dpi);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // The long cap may be infinite; everything else must be finite.
        if self.max_long_mm.is_nan() || self.max_long_mm <= 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "long dimension cap must be positive, got {}",
                self.max_long_mm
            )));
        }
        if !self.max_short_mm.is_finite() || self.max_short_mm <= 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "short dimension cap must be positive, got {}",
                self.max_short_mm
            )));
        }
        if self.max_long_mm < self.max_short_mm {
            return Err(RulerError::InvalidConfig(format!(
                "long dimension cap {} is below short dimension cap {}",
                self.max_long_mm, self.max_short_mm
            )));
        }
        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin_mm
            )));
        }
        if !self.band_aspect_threshold.is_finite() || self.band_aspect_threshold <= 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "band aspect threshold must be positive, got {}",
                self.band_aspect_threshold
            )));
        }
        if let Some(dpi) = self.fallback_dpi {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(RulerError::InvalidConfig(format!(
                    "fallback dpi must be positive, got {dpi}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulerConfig::default();
        assert_eq!(config.max_long_mm, 127.0);
        assert_eq!(config.max_short_mm, 25.4);
        assert_eq!(config.margin_mm, 2.5);
        assert_eq!(config.layout, LayoutMode::Auto);
        assert!(config.fallback_dpi.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variants() {
        let narrow = RulerConfig::new().half_inch_band();
        assert_eq!(narrow.max_short_mm, 12.7);

        let open = RulerConfig::new().unbounded();
        assert!(open.max_long_mm.is_infinite());
        assert!(open.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(RulerConfig::new().with_max_long_mm(0.0).validate().is_err());
        assert!(RulerConfig::new().with_max_short_mm(f64::NAN).validate().is_err());
        assert!(RulerConfig::new().with_margin_mm(-1.0).validate().is_err());
        assert!(RulerConfig::new().with_fallback_dpi(0.0).validate().is_err());
        assert!(RulerConfig::new().with_fallback_dpi(96.0).validate().is_ok());
    }

    #[test]
    fn test_long_cap_below_short_cap_rejected() {
        let result = RulerConfig::new().with_max_long_mm(10.0).validate();
        assert!(matches!(result, Err(RulerError::InvalidConfig(_))));
        assert!(RulerConfig::new().with_max_long_mm(25.4).validate().is_ok());
    }
}
