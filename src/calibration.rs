//! Monitor calibration: px/mm scale factors and the clamped ruler extent

use crate::Result;
use crate::config::RulerConfig;
use crate::constants::MM_PER_INCH;
use crate::error::RulerError;
use tracing::{debug, instrument, warn};

/// Pixel resolution and physical size of a display, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl MonitorGeometry {
    pub fn new(width_px: u32, height_px: u32, width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_px,
            height_px,
            width_mm,
            height_mm,
        }
    }

    /// Check every dimension is strictly positive and finite
    pub fn validate(&self) -> Result<()> {
        self.validate_pixels()?;
        for (axis, mm) in [("width", self.width_mm), ("height", self.height_mm)] {
            if !mm.is_finite() || mm <= 0.0 {
                return Err(RulerError::InvalidGeometry(format!(
                    "physical {axis} of {mm} mm is not positive"
                )));
            }
        }
        Ok(())
    }

    /// Pixel dimensions alone; no DPI fallback can repair these
    pub fn validate_pixels(&self) -> Result<()> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(RulerError::InvalidGeometry(format!(
                "pixel size {}x{} has a zero dimension",
                self.width_px, self.height_px
            )));
        }
        Ok(())
    }

    /// Pixel width over pixel height
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width_px) / f64::from(self.height_px)
    }
}

/// Pixels per millimeter along each screen axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub px_per_mm_x: f64,
    pub px_per_mm_y: f64,
}

impl ScaleFactors {
    /// Uniform scale for a surface of known resolution (96 dpi screens, 72 dpi PDF)
    pub fn from_dpi(dpi: f64) -> Result<Self> {
        if !dpi.is_finite() || dpi <= 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "dpi must be positive, got {dpi}"
            )));
        }
        let px_per_mm = dpi / MM_PER_INCH;
        Ok(Self {
            px_per_mm_x: px_per_mm,
            px_per_mm_y: px_per_mm,
        })
    }
}

/// Which screen axis carries the ruler's long dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

/// Physical and pixel size of the ruler after clamping to the configured caps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerExtent {
    pub orientation: Orientation,
    pub long_dim_mm: f64,
    pub short_dim_mm: f64,
    pub long_dim_px: f64,
    pub short_dim_px: f64,
}

/// Derive px/mm along both axes
///
/// # Errors
/// [`RulerError::InvalidGeometry`] when any dimension is zero, negative or
/// not finite. Displays without EDID data commonly report 0 mm.
///
/// # Examples
///
/// ```
/// use screen_ruler::{MonitorGeometry, compute_scale};
///
/// let geometry = MonitorGeometry::new(1920, 1080, 520.0, 290.0);
/// let scale = compute_scale(&geometry).unwrap();
/// assert!((scale.px_per_mm_x - 3.6923).abs() < 1e-4);
/// ```
#[instrument(level = "debug")]
pub fn compute_scale(geometry: &MonitorGeometry) -> Result<ScaleFactors> {
    geometry.validate()?;

    let scale = ScaleFactors {
        px_per_mm_x: f64::from(geometry.width_px) / geometry.width_mm,
        px_per_mm_y: f64::from(geometry.height_px) / geometry.height_mm,
    };
    debug!(
        "Calibrated {:.4} px/mm horizontally, {:.4} px/mm vertically",
        scale.px_per_mm_x, scale.px_per_mm_y
    );
    Ok(scale)
}

/// Calibrate, substituting a uniform DPI when the geometry is unusable
///
/// Without a fallback the [`RulerError::InvalidGeometry`] is returned
/// unchanged so the host can decide how to present it.
pub fn calibrate_or_fallback(
    geometry: &MonitorGeometry,
    fallback_dpi: Option<f64>,
) -> Result<ScaleFactors> {
    geometry.validate_pixels()?;
    match (compute_scale(geometry), fallback_dpi) {
        (Ok(scale), _) => Ok(scale),
        (Err(RulerError::InvalidGeometry(reason)), Some(dpi)) => {
            warn!("Falling back to {} dpi: {}", dpi, reason);
            ScaleFactors::from_dpi(dpi)
        }
        (Err(e), _) => Err(e),
    }
}

/// Choose the ruler orientation and clamp its size to the given caps
///
/// The long dimension follows the monitor's physical long axis (landscape
/// when `width_mm >= height_mm`). Each dimension is capped independently,
/// then converted back to pixels with that axis' scale factor.
///
/// # Examples
///
/// ```
/// use screen_ruler::{MonitorGeometry, Orientation, compute_extent};
///
/// let geometry = MonitorGeometry::new(1920, 1080, 520.0, 290.0);
/// let extent = compute_extent(&geometry, 127.0, 25.4).unwrap();
/// assert_eq!(extent.orientation, Orientation::Landscape);
/// assert_eq!(extent.long_dim_mm, 127.0);
/// assert_eq!(extent.short_dim_mm, 25.4);
/// ```
#[instrument(level = "debug")]
pub fn compute_extent(
    geometry: &MonitorGeometry,
    max_long_mm: f64,
    max_short_mm: f64,
) -> Result<RulerExtent> {
    let scale = compute_scale(geometry)?;
    Ok(extent_from_scale(geometry, &scale, max_long_mm, max_short_mm))
}

/// Extent for an already computed scale (used after a DPI fallback too)
pub(crate) fn extent_from_scale(
    geometry: &MonitorGeometry,
    scale: &ScaleFactors,
    max_long_mm: f64,
    max_short_mm: f64,
) -> RulerExtent {
    // A fallback scale may accompany a geometry with no physical size.
    let width_mm = physical_or_derived(geometry.width_mm, geometry.width_px, scale.px_per_mm_x);
    let height_mm = physical_or_derived(geometry.height_mm, geometry.height_px, scale.px_per_mm_y);

    let (orientation, long_mm, short_mm, long_scale, short_scale) = if width_mm >= height_mm {
        (
            Orientation::Landscape,
            width_mm,
            height_mm,
            scale.px_per_mm_x,
            scale.px_per_mm_y,
        )
    } else {
        (
            Orientation::Portrait,
            height_mm,
            width_mm,
            scale.px_per_mm_y,
            scale.px_per_mm_x,
        )
    };

    let long_dim_mm = long_mm.min(max_long_mm);
    // The short side never outgrows the clamped long side.
    let short_dim_mm = short_mm.min(max_short_mm).min(long_dim_mm);

    let extent = RulerExtent {
        orientation,
        long_dim_mm,
        short_dim_mm,
        long_dim_px: long_dim_mm * long_scale,
        short_dim_px: short_dim_mm * short_scale,
    };
    debug!("Ruler extent: {:?}", extent);
    extent
}

/// Everything derived from one monitor query, replaced wholesale on change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub geometry: MonitorGeometry,
    pub scale: ScaleFactors,
    pub extent: RulerExtent,
}

impl Calibration {
    /// Calibrate against `geometry` with the caps and fallback in `config`
    pub fn new(geometry: MonitorGeometry, config: &RulerConfig) -> Result<Self> {
        config.validate()?;
        let scale = calibrate_or_fallback(&geometry, config.fallback_dpi)?;
        let extent = extent_from_scale(&geometry, &scale, config.max_long_mm, config.max_short_mm);
        Ok(Self {
            geometry,
            scale,
            extent,
        })
    }

    /// Monitor pixel aspect ratio, the reference for band selection
    pub fn monitor_aspect(&self) -> f64 {
        self.geometry.aspect_ratio()
    }
}

fn physical_or_derived(mm: f64, px: u32, px_per_mm: f64) -> f64 {
    if mm.is_finite() && mm > 0.0 {
        mm
    } else {
        f64::from(px) / px_per_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> MonitorGeometry {
        MonitorGeometry::new(1920, 1080, 520.0, 290.0)
    }

    fn assert_relative_eq(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} differs from {expected}"
        );
    }

    #[test]
    fn test_compute_scale_matches_ratio() {
        let scale = compute_scale(&full_hd()).unwrap();
        assert_relative_eq(scale.px_per_mm_x, 1920.0 / 520.0);
        assert_relative_eq(scale.px_per_mm_y, 1080.0 / 290.0);
        assert!((scale.px_per_mm_x - 3.6923).abs() < 1e-4);
    }

    #[test]
    fn test_compute_scale_various_monitors() {
        let monitors = [
            MonitorGeometry::new(2560, 1440, 597.0, 336.0),
            MonitorGeometry::new(3840, 2160, 344.0, 194.0),
            MonitorGeometry::new(1080, 1920, 300.0, 530.0),
        ];
        for geometry in monitors {
            let scale = compute_scale(&geometry).unwrap();
            assert_relative_eq(
                scale.px_per_mm_x,
                f64::from(geometry.width_px) / geometry.width_mm,
            );
            assert_relative_eq(
                scale.px_per_mm_y,
                f64::from(geometry.height_px) / geometry.height_mm,
            );
        }
    }

    #[test]
    fn test_zero_width_mm_is_invalid() {
        let geometry = MonitorGeometry::new(1920, 1080, 0.0, 290.0);
        assert!(matches!(
            compute_scale(&geometry),
            Err(RulerError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_negative_and_nan_mm_are_invalid() {
        for (w, h) in [(-1.0, 290.0), (520.0, f64::NAN), (f64::INFINITY, 290.0)] {
            let geometry = MonitorGeometry::new(1920, 1080, w, h);
            assert!(compute_scale(&geometry).is_err(), "{w}x{h} accepted");
        }
    }

    #[test]
    fn test_zero_pixels_are_invalid() {
        let geometry = MonitorGeometry::new(0, 1080, 520.0, 290.0);
        assert!(matches!(
            compute_extent(&geometry, 127.0, 25.4),
            Err(RulerError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_extent_landscape_clamped() {
        let extent = compute_extent(&full_hd(), 127.0, 25.4).unwrap();
        assert_eq!(extent.orientation, Orientation::Landscape);
        assert_eq!(extent.long_dim_mm, 127.0);
        assert_eq!(extent.short_dim_mm, 25.4);
        assert_relative_eq(extent.long_dim_px, 127.0 * 1920.0 / 520.0);
        assert_relative_eq(extent.short_dim_px, 25.4 * 1080.0 / 290.0);
    }

    #[test]
    fn test_extent_portrait_uses_vertical_scale_for_long_axis() {
        let geometry = MonitorGeometry::new(1080, 1920, 290.0, 520.0);
        let extent = compute_extent(&geometry, 127.0, 25.4).unwrap();
        assert_eq!(extent.orientation, Orientation::Portrait);
        assert_relative_eq(extent.long_dim_px, 127.0 * 1920.0 / 520.0);
        assert_relative_eq(extent.short_dim_px, 25.4 * 1080.0 / 290.0);
    }

    #[test]
    fn test_extent_small_display_not_clamped() {
        let geometry = MonitorGeometry::new(480, 320, 80.0, 20.0);
        let extent = compute_extent(&geometry, 127.0, 25.4).unwrap();
        assert_eq!(extent.long_dim_mm, 80.0);
        assert_eq!(extent.short_dim_mm, 20.0);
    }

    #[test]
    fn test_extent_respects_caps() {
        let caps = [(127.0, 25.4), (127.0, 12.7), (50.0, 5.0), (1000.0, 1000.0)];
        for (max_long, max_short) in caps {
            let extent = compute_extent(&full_hd(), max_long, max_short).unwrap();
            assert!(extent.long_dim_mm <= max_long);
            assert!(extent.short_dim_mm <= max_short);
        }
    }

    #[test]
    fn test_inverted_caps_keep_long_side_longest() {
        let extent = compute_extent(&full_hd(), 100.0, 1000.0).unwrap();
        assert_eq!(extent.orientation, Orientation::Landscape);
        assert_eq!(extent.long_dim_mm, 100.0);
        assert_eq!(extent.short_dim_mm, 100.0);
        assert!(extent.long_dim_mm >= extent.short_dim_mm);
    }

    #[test]
    fn test_square_display_is_landscape() {
        let geometry = MonitorGeometry::new(1000, 1000, 300.0, 300.0);
        let extent = compute_extent(&geometry, 127.0, 25.4).unwrap();
        assert_eq!(extent.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_fallback_dpi_substitutes_scale() {
        let geometry = MonitorGeometry::new(1920, 1080, 0.0, 0.0);
        let scale = calibrate_or_fallback(&geometry, Some(96.0)).unwrap();
        assert_relative_eq(scale.px_per_mm_x, 96.0 / 25.4);
        assert_eq!(scale.px_per_mm_x, scale.px_per_mm_y);

        let extent = extent_from_scale(&geometry, &scale, 127.0, 25.4);
        assert_eq!(extent.orientation, Orientation::Landscape);
        assert_eq!(extent.long_dim_mm, 127.0);
    }

    #[test]
    fn test_fallback_cannot_repair_zero_pixels() {
        let geometry = MonitorGeometry::new(1920, 0, 520.0, 290.0);
        assert!(calibrate_or_fallback(&geometry, Some(96.0)).is_err());
    }

    #[test]
    fn test_no_fallback_surfaces_error() {
        let geometry = MonitorGeometry::new(1920, 1080, 0.0, 290.0);
        assert!(matches!(
            calibrate_or_fallback(&geometry, None),
            Err(RulerError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_calibration_bundle() {
        let calibration = Calibration::new(full_hd(), &RulerConfig::default()).unwrap();
        assert_eq!(calibration.extent.long_dim_mm, 127.0);
        assert!((calibration.monitor_aspect() - 16.0 / 9.0).abs() < 1e-9);

        let blind = MonitorGeometry::new(1920, 1080, 0.0, 0.0);
        assert!(Calibration::new(blind, &RulerConfig::default()).is_err());
        let config = RulerConfig::default().with_fallback_dpi(96.0);
        assert!(Calibration::new(blind, &config).is_ok());
    }

    #[test]
    fn test_from_dpi_rejects_zero() {
        assert!(ScaleFactors::from_dpi(0.0).is_err());
        let scale = ScaleFactors::from_dpi(72.0).unwrap();
        assert_relative_eq(scale.px_per_mm_y, 72.0 / 25.4);
    }
}
