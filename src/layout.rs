//! Band layout: splitting a drawing surface into ruler bands

use crate::Result;
use crate::calibration::Calibration;
use crate::config::{LayoutMode, RulerConfig};
use crate::error::RulerError;
use crate::geometry::{Point, Rect, Rotation, SurfaceSize};
use tracing::{debug, trace};

/// Where a band sits on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    /// Single band along the whole surface
    Full,
    Top,
    Bottom,
    Left,
    Right,
}

/// Coordinate frame of one ruler band.
///
/// Band-local coordinates are `(along, across)`: `along` runs the length of
/// the band from its near end, `across` runs its thickness from the edge
/// the millimeter scale hangs from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandFrame {
    pub position: BandPosition,
    pub origin: Point,
    pub rotation: Rotation,
    pub length_px: f64,
    pub thickness_px: f64,
    /// Scale along the band's length
    pub px_per_mm_along: f64,
    /// Scale across the band's thickness
    pub px_per_mm_across: f64,
}

impl BandFrame {
    /// Map a band-local point onto the surface
    pub fn map(&self, along: f64, across: f64) -> Point {
        match self.rotation {
            Rotation::None => Point::new(self.origin.x + along, self.origin.y + across),
            Rotation::Quarter => Point::new(
                self.origin.x + self.thickness_px - across,
                self.origin.y + along,
            ),
        }
    }

    /// Surface area covered by the band
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(
            self.map(0.0, 0.0),
            self.map(self.length_px, self.thickness_px),
        )
    }

    pub fn length_mm(&self) -> f64 {
        self.length_px / self.px_per_mm_along
    }

    pub fn thickness_mm(&self) -> f64 {
        self.thickness_px / self.px_per_mm_across
    }
}

/// Lay out ruler bands on a surface
///
/// # Errors
/// [`RulerError::DegenerateSurface`] when the surface has a zero dimension.
pub fn plan_bands(
    surface: SurfaceSize,
    calibration: &Calibration,
    config: &RulerConfig,
) -> Result<Vec<BandFrame>> {
    if surface.is_degenerate() {
        return Err(RulerError::DegenerateSurface {
            width: surface.width,
            height: surface.height,
        });
    }

    let width = f64::from(surface.width);
    let height = f64::from(surface.height);
    let scale = calibration.scale;
    let thickness_mm = calibration.extent.short_dim_mm;

    // Horizontal bands are measured across with the vertical scale and
    // vice versa.
    let sizes = BandSizes {
        horizontal_thickness: height.min(thickness_mm * scale.px_per_mm_y),
        vertical_thickness: width.min(thickness_mm * scale.px_per_mm_x),
        margin: config.margin_mm * scale.px_per_mm_x,
        max_long_mm: calibration.extent.long_dim_mm,
    };

    let arrangement = choose_arrangement(surface, calibration.monitor_aspect(), config);
    debug!(
        "Laying out {:?} bands on {}x{} surface",
        arrangement, surface.width, surface.height
    );

    let horizontal = |position, origin: Point, length: f64| BandFrame {
        position,
        origin,
        rotation: Rotation::None,
        length_px: sizes.clamp_length(length, scale.px_per_mm_x),
        thickness_px: sizes.horizontal_thickness,
        px_per_mm_along: scale.px_per_mm_x,
        px_per_mm_across: scale.px_per_mm_y,
    };
    let vertical = |position, origin: Point, length: f64| BandFrame {
        position,
        origin,
        rotation: Rotation::Quarter,
        length_px: sizes.clamp_length(length, scale.px_per_mm_y),
        thickness_px: sizes.vertical_thickness,
        px_per_mm_along: scale.px_per_mm_y,
        px_per_mm_across: scale.px_per_mm_x,
    };

    let bands = match arrangement {
        Arrangement::Horizontal => vec![horizontal(BandPosition::Full, Point::new(0.0, 0.0), width)],
        Arrangement::Vertical => vec![vertical(BandPosition::Full, Point::new(0.0, 0.0), height)],
        Arrangement::FourBands => {
            let r_h = sizes.horizontal_thickness;
            let r_v = sizes.vertical_thickness;
            let m = sizes.margin;
            // Horizontal bands leave room for the vertical ones at each end.
            let inset = r_v + m;
            let horizontal_length = width - 2.0 * inset;
            let vertical_length = height - 2.0 * r_h;
            vec![
                horizontal(BandPosition::Top, Point::new(inset, 0.0), horizontal_length),
                horizontal(
                    BandPosition::Bottom,
                    Point::new(inset, height - r_h),
                    horizontal_length,
                ),
                vertical(BandPosition::Left, Point::new(m, r_h), vertical_length),
                vertical(
                    BandPosition::Right,
                    Point::new(width - r_v - m, r_h),
                    vertical_length,
                ),
            ]
        }
    };

    let bands: Vec<_> = bands
        .into_iter()
        .filter(|band| band.length_px > 0.0 && band.thickness_px > 0.0)
        .collect();
    trace!("Band frames: {:?}", bands);
    Ok(bands)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrangement {
    Horizontal,
    Vertical,
    FourBands,
}

struct BandSizes {
    horizontal_thickness: f64,
    vertical_thickness: f64,
    margin: f64,
    max_long_mm: f64,
}

impl BandSizes {
    fn clamp_length(&self, length_px: f64, px_per_mm: f64) -> f64 {
        length_px.min(self.max_long_mm * px_per_mm)
    }
}

fn choose_arrangement(surface: SurfaceSize, monitor_aspect: f64, config: &RulerConfig) -> Arrangement {
    let surface_aspect = surface.aspect_ratio();
    let threshold = config.band_aspect_threshold * monitor_aspect;
    match config.layout {
        LayoutMode::FourBands => Arrangement::FourBands,
        LayoutMode::Single if surface.width >= surface.height => Arrangement::Horizontal,
        LayoutMode::Single => Arrangement::Vertical,
        LayoutMode::Auto if surface_aspect >= threshold => Arrangement::Horizontal,
        LayoutMode::Auto if surface_aspect.recip() >= threshold => Arrangement::Vertical,
        LayoutMode::Auto => Arrangement::FourBands,
    }
}
