//! PDF rendering of ruler paint commands
//!
//! PDF user space is 72 units per inch with y growing upward. Paint commands
//! use a y-down surface, so every coordinate is flipped around the ruler's
//! top-left `position` on the page.

use crate::Result;
use crate::calibration::MonitorGeometry;
use crate::constants::POINTS_PER_MM;
use crate::drawing_utils::{fill_rectangle, set_stroke_style, show_text, stroke_line};
use crate::error::RulerError;
use crate::geometry::{Point, Rotation};
use crate::paint::PaintCommand;
use crate::style::Color;
use lopdf::{
    Document, ObjectId,
    content::{Content, Operation},
};
use tracing::{debug, trace};

/// Font resource name labels are drawn with; the page must define it
pub const LABEL_FONT_RESOURCE: &str = "F1";

/// Treat a PDF page as a 72 dpi monitor so rulers print at true size
///
/// # Examples
///
/// ```
/// use screen_ruler::{compute_scale, drawing::page_geometry};
///
/// let scale = compute_scale(&page_geometry(595.0, 842.0)).unwrap();
/// assert!((scale.px_per_mm_x - 72.0 / 25.4).abs() < 1e-9);
/// ```
pub fn page_geometry(width_pt: f32, height_pt: f32) -> MonitorGeometry {
    let width_px = width_pt.round().max(0.0) as u32;
    let height_px = height_pt.round().max(0.0) as u32;
    MonitorGeometry::new(
        width_px,
        height_px,
        f64::from(width_px) / POINTS_PER_MM,
        f64::from(height_px) / POINTS_PER_MM,
    )
}

/// Generate PDF operations for paint commands placed at `position`
pub fn generate_paint_operations(
    commands: &[PaintCommand],
    position: (f32, f32),
) -> Vec<Operation> {
    let mut operations = Vec::new();
    let mut stroke: Option<(Color, f32)> = None;

    debug!(
        "Generating operations for {} paint commands at ({}, {})",
        commands.len(),
        position.0,
        position.1
    );

    for command in commands {
        match command {
            PaintCommand::FillRect { rect, color } => {
                let (x, top) = to_page(Point::new(rect.x, rect.y), position);
                let height = rect.height as f32;
                operations.extend(fill_rectangle(
                    x,
                    top - height,
                    rect.width as f32,
                    height,
                    *color,
                ));
            }
            PaintCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let style = (*color, *width as f32);
                if stroke != Some(style) {
                    operations.extend(set_stroke_style(style.0, style.1));
                    stroke = Some(style);
                }
                operations.extend(stroke_line(to_page(*from, position), to_page(*to, position)));
            }
            PaintCommand::Text {
                position: anchor,
                text,
                font_size,
                color,
                rotation,
                ..
            } => {
                let size = *font_size as f32;
                let (x, y) = to_page(*anchor, position);
                // The anchor is the text's top-left corner; Tm wants the baseline.
                let (origin, direction) = match rotation {
                    Rotation::None => ((x, y - size), (1.0, 0.0)),
                    Rotation::Quarter => ((x - size, y), (0.0, -1.0)),
                };
                operations.extend(show_text(
                    text,
                    LABEL_FONT_RESOURCE,
                    size,
                    *color,
                    origin,
                    direction,
                ));
            }
        }
    }

    trace!("Generated {} operations", operations.len());
    operations
}

fn to_page(point: Point, position: (f32, f32)) -> (f32, f32) {
    (position.0 + point.x as f32, position.1 - point.y as f32)
}

/// Add operations to a page in the document
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    if doc.get_object(page_id).is_err() {
        return Err(RulerError::PageNotFound(page_id));
    }
    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use lopdf::Object;

    fn reals(op: &Operation) -> Vec<f32> {
        op.operands
            .iter()
            .filter_map(|o| match o {
                Object::Real(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_page_geometry_is_72_dpi() {
        let geometry = page_geometry(612.0, 792.0);
        assert_eq!(geometry.width_px, 612);
        assert!((geometry.width_mm - 215.9).abs() < 1e-9);
        assert!((geometry.height_mm - 279.4).abs() < 1e-9);
    }

    #[test]
    fn test_fill_rect_flipped_to_page_space() {
        let commands = [PaintCommand::FillRect {
            rect: Rect::new(10.0, 20.0, 100.0, 30.0),
            color: Color::white(),
        }];
        let ops = generate_paint_operations(&commands, (50.0, 700.0));
        let re = ops.iter().find(|op| op.operator == "re").unwrap();
        assert_eq!(reals(re), vec![60.0, 650.0, 100.0, 30.0]);
    }

    #[test]
    fn test_stroke_style_emitted_once_per_change() {
        let line = |x: f64, color: Color| PaintCommand::Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, 5.0),
            color,
            width: 1.0,
        };
        let commands = [
            line(1.0, Color::black()),
            line(2.0, Color::black()),
            line(3.0, Color::white()),
        ];
        let ops = generate_paint_operations(&commands, (0.0, 100.0));
        let stroke_colors = ops.iter().filter(|op| op.operator == "RG").count();
        let strokes = ops.iter().filter(|op| op.operator == "S").count();
        assert_eq!(stroke_colors, 2);
        assert_eq!(strokes, 3);
    }

    #[test]
    fn test_text_baseline_below_anchor() {
        let commands = [PaintCommand::Text {
            position: Point::new(0.0, 0.0),
            text: "1".to_string(),
            font_family: "Helvetica".to_string(),
            font_size: 10.0,
            color: Color::black(),
            rotation: Rotation::None,
        }];
        let ops = generate_paint_operations(&commands, (20.0, 200.0));
        let tm = ops.iter().find(|op| op.operator == "Tm").unwrap();
        assert_eq!(reals(tm), vec![1.0, 0.0, -0.0, 1.0, 20.0, 190.0]);
    }

    #[test]
    fn test_missing_page_reported() {
        let mut doc = Document::with_version("1.5");
        let result = add_operations_to_page(&mut doc, (999, 0), Vec::new());
        assert!(matches!(result, Err(RulerError::PageNotFound((999, 0)))));
    }
}
