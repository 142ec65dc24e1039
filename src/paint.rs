//! Paint commands handed to a rendering surface

use crate::geometry::{Point, Rect, Rotation};
use crate::style::Color;

/// A single, stateless paint instruction in surface coordinates.
///
/// [`crate::Ruler::render`] returns these in paint order. Each command
/// carries everything a renderer needs, so they can be replayed on any
/// surface (a toolkit canvas, an SVG, or the PDF renderer in this crate).
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill a rectangle
    FillRect { rect: Rect, color: Color },

    /// Stroke a line segment
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },

    /// Draw text with its top-left corner at `position`, turned by `rotation`
    Text {
        position: Point,
        text: String,
        font_family: String,
        font_size: f64,
        color: Color,
        rotation: Rotation,
    },
}

impl PaintCommand {
    pub fn is_line(&self) -> bool {
        matches!(self, PaintCommand::Line { .. })
    }

    /// Text content, if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            PaintCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
