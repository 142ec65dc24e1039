//! The ruler component the host calls into

use crate::Result;
use crate::calibration::{Calibration, MonitorGeometry, RulerExtent, ScaleFactors};
use crate::config::RulerConfig;
use crate::constants::INCH_LABEL_OFFSET_FONT_SIZES;
use crate::font::{EstimatedMetrics, FontMetrics};
use crate::geometry::SurfaceSize;
use crate::layout::{BandFrame, plan_bands};
use crate::paint::PaintCommand;
use crate::style::RulerStyle;
use crate::ticks::{TickMark, TickPlanner, UnitScale};
use tracing::{debug, instrument, trace};

/// A calibrated ruler that renders itself onto a surface on demand.
///
/// Calibration happens once, when the ruler is built or recalibrated;
/// [`Ruler::render`] is pure and may be called on every paint event.
///
/// # Examples
///
/// ```
/// use screen_ruler::{MonitorGeometry, PaintCommand, Ruler, RulerConfig, SurfaceSize};
///
/// let geometry = MonitorGeometry::new(1920, 1080, 520.0, 290.0);
/// let ruler = Ruler::new(geometry, RulerConfig::default()).unwrap();
///
/// let commands = ruler.render(SurfaceSize::new(1600, 120)).unwrap();
/// assert!(matches!(commands[0], PaintCommand::FillRect { .. }));
/// assert!(commands.iter().any(|c| c.text() == Some("1")));
/// ```
pub struct Ruler {
    config: RulerConfig,
    style: RulerStyle,
    calibration: Calibration,
    metrics: Box<dyn FontMetrics>,
}

impl Ruler {
    /// Calibrate a ruler against a monitor
    ///
    /// # Errors
    /// [`crate::RulerError::InvalidGeometry`] when the monitor reports an
    /// unusable size and no fallback DPI is configured, or
    /// [`crate::RulerError::InvalidConfig`] for a bad configuration.
    pub fn new(geometry: MonitorGeometry, config: RulerConfig) -> Result<Self> {
        let calibration = Calibration::new(geometry, &config)?;
        Ok(Self {
            config,
            style: RulerStyle::default(),
            calibration,
            metrics: Box::new(EstimatedMetrics::default()),
        })
    }

    /// Set the paint style
    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    /// Measure labels with the given metrics instead of the estimate
    pub fn with_font_metrics<M: FontMetrics + 'static>(mut self, metrics: M) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    /// Replace the calibration after the window moved to another monitor
    pub fn recalibrate(&mut self, geometry: MonitorGeometry) -> Result<()> {
        self.calibration = Calibration::new(geometry, &self.config)?;
        debug!("Recalibrated: {:?}", self.calibration.scale);
        Ok(())
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn scale(&self) -> ScaleFactors {
        self.calibration.scale
    }

    pub fn extent(&self) -> RulerExtent {
        self.calibration.extent
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    /// Band frames the surface would be split into
    pub fn bands(&self, surface: SurfaceSize) -> Result<Vec<BandFrame>> {
        plan_bands(surface, &self.calibration, &self.config)
    }

    /// Produce paint commands for a surface of the given size
    ///
    /// # Errors
    /// [`crate::RulerError::DegenerateSurface`] when the surface has a zero
    /// dimension, [`crate::RulerError::InvalidConfig`] for an invalid style.
    #[instrument(skip(self))]
    pub fn render(&self, surface: SurfaceSize) -> Result<Vec<PaintCommand>> {
        self.style.validate()?;
        let bands = self.bands(surface)?;

        let mut commands = Vec::new();
        for band in &bands {
            commands.extend(self.render_band(band));
        }
        debug!(
            "Rendered {} bands into {} commands",
            bands.len(),
            commands.len()
        );
        Ok(commands)
    }

    /// Paint commands for one band: body, millimeter scale, inch scale
    pub fn render_band(&self, band: &BandFrame) -> Vec<PaintCommand> {
        let planner = TickPlanner::new(band.px_per_mm_along);
        let length_mm = band.length_mm();
        let font_size = self.style.font_size_for(band.thickness_mm());

        let mut commands = vec![PaintCommand::FillRect {
            rect: band.bounds(),
            color: self.style.background_color,
        }];
        for tick in planner.mm_ticks(length_mm).chain(planner.inch_ticks(length_mm)) {
            self.push_tick(&mut commands, band, &tick, font_size);
        }
        trace!("Band {:?}: {} commands", band.position, commands.len());
        commands
    }

    fn push_tick(
        &self,
        commands: &mut Vec<PaintCommand>,
        band: &BandFrame,
        tick: &TickMark,
        font_size: f64,
    ) {
        let (start, end) = tick.span(band.thickness_px);
        commands.push(PaintCommand::Line {
            from: band.map(tick.position_px, start),
            to: band.map(tick.position_px, end),
            color: self.style.tick_color,
            width: self.style.line_width,
        });

        let Some(label) = &tick.label else {
            return;
        };
        let label_width = self.metrics.text_width(label, font_size);
        if tick.position_px + label_width > band.length_px {
            trace!("Label {} would overrun the band end, skipped", label);
            return;
        }
        // Millimeter labels hang below their mark; inch labels sit above theirs.
        let across = match tick.tier.scale() {
            UnitScale::Millimeter => end,
            UnitScale::Inch => start - INCH_LABEL_OFFSET_FONT_SIZES * font_size,
        };
        commands.push(PaintCommand::Text {
            position: band.map(tick.position_px, across),
            text: label.clone(),
            font_family: self.style.font_family.clone(),
            font_size,
            color: self.style.label_color,
            rotation: band.rotation,
        });
    }
}

impl std::fmt::Debug for Ruler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ruler")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("calibration", &self.calibration)
            .finish_non_exhaustive()
    }
}
