//! Font metrics for label measurement

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;

/// Trait for measuring label text.
///
/// Implement this trait to give the ruler accurate label widths; the
/// default [`EstimatedMetrics`] assumes every glyph is half an em wide.
pub trait FontMetrics {
    /// Width of a single character at the given font size
    fn char_width(&self, ch: char, font_size: f64) -> f64;

    /// Total width of a string at the given font size
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Fixed-ratio width estimate, good enough for digit labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMetrics {
    pub char_width_ratio: f64,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self {
            char_width_ratio: DEFAULT_CHAR_WIDTH_RATIO,
        }
    }
}

impl FontMetrics for EstimatedMetrics {
    fn char_width(&self, _ch: char, font_size: f64) -> f64 {
        font_size * self.char_width_ratio
    }
}

/// TrueType font metrics using ttf-parser for accurate glyph measurement.
///
/// This struct owns the font data and parses it on demand for measurements.
#[cfg(feature = "ttf-parser")]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f64,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    ///
    /// Validates the font by parsing it and extracting units_per_em.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0).map_err(|e| {
            crate::error::RulerError::FontError(format!("Failed to parse font: {e}"))
        })?;
        let units_per_em = f64::from(face.units_per_em());
        Ok(Self {
            font_data,
            units_per_em,
        })
    }

    fn advance(face: &ttf_parser::Face<'_>, ch: char) -> Option<u16> {
        face.glyph_index(ch)
            .and_then(|gid| face.glyph_hor_advance(gid))
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f64) -> f64 {
        self.text_width(ch.encode_utf8(&mut [0; 4]), font_size)
    }

    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let fallback = font_size * DEFAULT_CHAR_WIDTH_RATIO;
        // Parsed once in `new`, so this only fails on corrupted memory.
        let Ok(face) = ttf_parser::Face::parse(&self.font_data, 0) else {
            return text.chars().count() as f64 * fallback;
        };
        text.chars()
            .map(|ch| {
                Self::advance(&face, ch)
                    .map(|advance| f64::from(advance) / self.units_per_em * font_size)
                    .unwrap_or(fallback)
            })
            .sum()
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimated_metrics() {
        let metrics = EstimatedMetrics::default();
        assert_eq!(metrics.char_width('1', 10.0), 5.0);
        assert_eq!(metrics.text_width("12", 10.0), 10.0);
        assert_eq!(metrics.text_width("", 10.0), 0.0);
    }

    #[cfg(feature = "ttf-parser")]
    fn load_test_font() -> Option<Vec<u8>> {
        // Try common system font paths
        let paths = [
            "/System/Library/Fonts/Helvetica.ttc",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        for path in &paths {
            if let Ok(data) = std::fs::read(path) {
                return Some(data);
            }
        }
        None
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_ttf_font_metrics_invalid_data() {
        let result = TtfFontMetrics::new(vec![0, 1, 2, 3]);
        assert!(result.is_err());
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_digit_widths_positive_and_additive() {
        let Some(font_data) = load_test_font() else {
            eprintln!("Skipping test: no system font found");
            return;
        };
        let metrics = TtfFontMetrics::new(font_data).unwrap();
        let one = metrics.char_width('1', 12.0);
        assert!(one > 0.0, "char_width should be positive, got {one}");
        let label = metrics.text_width("111", 12.0);
        assert!((label - one * 3.0).abs() < 1e-6);
    }
}
