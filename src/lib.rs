//! A calibrated on-screen ruler built on physical monitor geometry
//!
//! The library turns a monitor's pixel and millimeter dimensions into px/mm
//! scale factors, plans millimeter and sixteenth-inch tick marks, lays ruler
//! bands out on a drawing surface and emits backend-neutral paint commands.
//! A PDF backend on top of lopdf prints the same ruler at true scale.

use lopdf::{Document, ObjectId, content::Operation};
use tracing::{debug, instrument, trace};

pub mod calibration;
pub mod config;
pub mod constants;
pub mod drawing;
pub mod drawing_utils;
pub mod error;
pub mod font;
pub mod geometry;
pub mod layout;
pub mod paint;
pub mod ruler;
pub mod style;
pub mod ticks;

pub use calibration::{
    Calibration, MonitorGeometry, Orientation, RulerExtent, ScaleFactors, calibrate_or_fallback,
    compute_extent, compute_scale,
};
pub use config::{LayoutMode, RulerConfig};
pub use error::{Result, RulerError};
pub use font::{EstimatedMetrics, FontMetrics};
#[cfg(feature = "ttf-parser")]
pub use font::TtfFontMetrics;
pub use geometry::{Point, Rect, Rotation, SurfaceSize};
pub use layout::{BandFrame, BandPosition, plan_bands};
pub use paint::PaintCommand;
pub use ruler::Ruler;
pub use style::{Color, RulerStyle};
pub use ticks::{Tier, TickMark, TickPlanner, UnitScale, plan_inch_ticks, plan_mm_ticks};

/// Extension trait for lopdf::Document to add ruler drawing capabilities
pub trait RulerDrawing {
    /// Draw a ruler at the specified position on a page
    ///
    /// # Arguments
    /// * `page_id` - The object ID of the page to draw on
    /// * `ruler` - The calibrated ruler to draw
    /// * `surface` - Size of the area the ruler bands are laid out in, in points
    /// * `position` - The (x, y) position of the area's top-left corner
    ///
    /// The page must carry an `F1` font resource for the labels.
    fn draw_ruler(
        &mut self,
        page_id: ObjectId,
        ruler: &Ruler,
        surface: SurfaceSize,
        position: (f32, f32),
    ) -> Result<()>;

    /// Create ruler content operations without adding to document
    ///
    /// Useful for custom positioning or combining with other content
    fn create_ruler_content(
        &self,
        ruler: &Ruler,
        surface: SurfaceSize,
        position: (f32, f32),
    ) -> Result<Vec<Operation>>;
}

impl RulerDrawing for Document {
    #[instrument(skip(self, ruler), fields(width = surface.width, height = surface.height))]
    fn draw_ruler(
        &mut self,
        page_id: ObjectId,
        ruler: &Ruler,
        surface: SurfaceSize,
        position: (f32, f32),
    ) -> Result<()> {
        debug!("Drawing ruler at position {:?}", position);

        let operations = self.create_ruler_content(ruler, surface, position)?;
        trace!("Ruler content has {} operations", operations.len());

        drawing::add_operations_to_page(self, page_id, operations)?;

        Ok(())
    }

    fn create_ruler_content(
        &self,
        ruler: &Ruler,
        surface: SurfaceSize,
        position: (f32, f32),
    ) -> Result<Vec<Operation>> {
        let commands = ruler.render(surface)?;
        Ok(drawing::generate_paint_operations(&commands, position))
    }
}
