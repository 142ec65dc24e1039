//! Unit conversions and default ruler dimensions

/// Millimeters in one inch
pub const MM_PER_INCH: f64 = 25.4;

/// Typographic points in one inch (also PDF user units)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Typographic points in one millimeter
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / MM_PER_INCH;

/// Sixteenth-inch graduations per inch
pub const SIXTEENTHS_PER_INCH: u32 = 16;

/// Default cap on the ruler's long dimension (5 in)
pub const DEFAULT_MAX_LONG_MM: f64 = 5.0 * MM_PER_INCH;

/// Default cap on the ruler's short dimension (1 in)
pub const DEFAULT_MAX_SHORT_MM: f64 = MM_PER_INCH;

/// Narrow band variant: short dimension capped at 0.5 in
pub const HALF_INCH_MAX_SHORT_MM: f64 = 0.5 * MM_PER_INCH;

/// Default gap between a band and the surface edge it runs along
pub const DEFAULT_MARGIN_MM: f64 = 2.5;

/// Surface/monitor aspect divergence above which a single band is drawn
pub const BAND_ASPECT_THRESHOLD: f64 = 1.25;

/// Resolution substituted when a display reports no physical size
pub const FALLBACK_DPI: f64 = 96.0;

/// Inch labels sit this many font sizes above their mark
pub const INCH_LABEL_OFFSET_FONT_SIZES: f64 = 1.5;

/// Major marks span this fraction of the band thickness
pub const MAJOR_TICK_FRACTION: f64 = 0.25;

/// Length decay per tier on the millimeter scale
pub const MM_TIER_DECAY: f64 = 0.5;

/// Length decay per tier on the inch scale
pub const INCH_TIER_DECAY: f64 = 0.75;

/// Tolerance when counting whole units in a floating-point length
pub const WHOLE_UNIT_EPSILON: f64 = 1e-9;

/// Default character width ratio for label width estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.5;

/// Default tick line width in surface units
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Default label font family
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";
