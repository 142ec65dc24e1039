//! Styling for ruler bands, tick marks and labels

use crate::Result;
use crate::constants::*;
use crate::error::RulerError;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Warm gray used for the ruler body
    pub fn ruler_gray() -> Self {
        Self::rgb8(154, 153, 150)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Paint style for a ruler, passed explicitly to [`crate::Ruler`]
#[derive(Debug, Clone, PartialEq)]
pub struct RulerStyle {
    pub background_color: Color,
    pub tick_color: Color,
    pub label_color: Color,
    pub line_width: f64,
    pub font_family: String,
    /// Label size; derived from the band thickness when `None`
    pub font_size: Option<f64>,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::ruler_gray(),
            tick_color: Color::black(),
            label_color: Color::black(),
            line_width: DEFAULT_LINE_WIDTH,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: None,
        }
    }
}

impl RulerStyle {
    /// Set the label font family
    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = family.into();
        self
    }

    /// Fix the label size instead of deriving it from the band
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the tick stroke width
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Set the band fill
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Label size for a band `thickness_mm` thick
    ///
    /// Without an explicit size the label is a quarter of the band, in points.
    pub fn font_size_for(&self, thickness_mm: f64) -> f64 {
        self.font_size
            .unwrap_or((thickness_mm / 4.0) * POINTS_PER_MM)
    }

    /// Validate style values
    pub fn validate(&self) -> Result<()> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(RulerError::InvalidConfig(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        if let Some(size) = self.font_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(RulerError::InvalidConfig(format!(
                    "font size must be positive, got {size}"
                )));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(RulerError::InvalidConfig(
                "font family must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_clamps() {
        let c = Color::rgb(1.5, -0.2, 0.5);
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.5));
        assert_eq!(Color::rgb8(255, 0, 0), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_derived_font_size() {
        let style = RulerStyle::default();
        // A one inch band gets 18 pt labels
        assert!((style.font_size_for(25.4) - 18.0).abs() < 1e-9);

        let fixed = RulerStyle::default().with_font_size(9.0);
        assert_eq!(fixed.font_size_for(25.4), 9.0);
    }

    #[test]
    fn test_style_validation() {
        assert!(RulerStyle::default().validate().is_ok());
        assert!(RulerStyle::default().with_line_width(0.0).validate().is_err());
        assert!(RulerStyle::default().with_font_size(-1.0).validate().is_err());
        assert!(
            RulerStyle::default()
                .with_font_family("  ")
                .validate()
                .is_err()
        );
    }
}
