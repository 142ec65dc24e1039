//! Printable ruler example
//!
//! Prints a five inch ruler and a half-inch ruler on an A4 page at true scale.

use lopdf::{Document, Object, ObjectId, dictionary};
use screen_ruler::{
    Color, Ruler, RulerConfig, RulerDrawing, RulerStyle, SurfaceSize, drawing::page_geometry,
};
use tracing_subscriber::EnvFilter;

const A4: (f32, f32) = (595.0, 842.0);

/// A one-page document whose page carries the `F1` label font
fn ruler_document() -> (Document, ObjectId) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), A4.0.into(), A4.1.into()],
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    (doc, page_id)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let (mut doc, page_id) = ruler_document();
    // White bands print without toner
    let paper = RulerStyle::default().with_background(Color::white());
    let band = SurfaceSize::new(500, 80);

    let ruler = Ruler::new(page_geometry(A4.0, A4.1), RulerConfig::default())?
        .with_style(paper.clone());
    println!(
        "Ruler: {:.1} mm long, {:.1} mm wide",
        ruler.extent().long_dim_mm,
        ruler.extent().short_dim_mm
    );
    doc.draw_ruler(page_id, &ruler, band, (50.0, 780.0))?;

    let narrow = Ruler::new(
        page_geometry(A4.0, A4.1),
        RulerConfig::default().half_inch_band(),
    )?
    .with_style(paper);
    doc.draw_ruler(page_id, &narrow, band, (50.0, 660.0))?;

    doc.save("printable_ruler.pdf")?;
    println!("PDF saved as 'printable_ruler.pdf'");

    Ok(())
}
