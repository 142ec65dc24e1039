//! PDF operator helpers for paint primitives

use crate::style::Color;
use lopdf::{Object, content::Operation};

/// Fill a rectangle given in PDF user space (bottom-left origin)
pub fn fill_rectangle(x: f32, y: f32, width: f32, height: f32, color: Color) -> Vec<Operation> {
    vec![
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("re", vec![x.into(), y.into(), width.into(), height.into()]),
        Operation::new("f", vec![]),
    ]
}

/// Set stroke color and width for drawing operations
pub fn set_stroke_style(color: Color, width: f32) -> Vec<Operation> {
    vec![
        Operation::new("RG", vec![color.r.into(), color.g.into(), color.b.into()]),
        Operation::new("w", vec![width.into()]),
    ]
}

/// Stroke a straight line
pub fn stroke_line(from: (f32, f32), to: (f32, f32)) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![from.0.into(), from.1.into()]),
        Operation::new("l", vec![to.0.into(), to.1.into()]),
        Operation::new("S", vec![]),
    ]
}

/// Show a single line of text with its baseline origin at `origin`
///
/// `direction` is the unit vector of the text's reading direction.
pub fn show_text(
    text: &str,
    font_resource: &str,
    font_size: f32,
    color: Color,
    origin: (f32, f32),
    direction: (f32, f32),
) -> Vec<Operation> {
    let (dx, dy) = direction;
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(font_resource.as_bytes().to_vec()),
                font_size.into(),
            ],
        ),
        Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
        // Glyph "up" is the reading direction turned a quarter counterclockwise.
        Operation::new(
            "Tm",
            vec![
                dx.into(),
                dy.into(),
                (-dy).into(),
                dx.into(),
                origin.0.into(),
                origin.1.into(),
            ],
        ),
        Operation::new("Tj", vec![Object::string_literal(text.to_string())]),
        Operation::new("ET", vec![]),
    ]
}
