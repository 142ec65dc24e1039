//! Screen band example
//!
//! Lays a ruler out on a few window shapes for a 24" 1920x1080 monitor and
//! prints the resulting bands and paint commands.

use screen_ruler::{MonitorGeometry, PaintCommand, Ruler, RulerConfig, SurfaceSize};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let geometry = MonitorGeometry::new(1920, 1080, 531.0, 299.0);
    let ruler = Ruler::new(geometry, RulerConfig::default().unbounded())?;
    let scale = ruler.scale();
    println!(
        "Scale: {:.3} px/mm horizontal, {:.3} px/mm vertical",
        scale.px_per_mm_x, scale.px_per_mm_y
    );

    for (width, height) in [(1600, 120), (120, 900), (800, 600)] {
        let surface = SurfaceSize::new(width, height);
        println!("\nWindow {width}x{height}");
        for band in ruler.bands(surface)? {
            println!(
                "  {:?} band at ({:.0}, {:.0}): {:.1} mm x {:.1} mm",
                band.position,
                band.origin.x,
                band.origin.y,
                band.length_mm(),
                band.thickness_mm()
            );
        }

        let commands = ruler.render(surface)?;
        let lines = commands.iter().filter(|c| c.is_line()).count();
        let labels: Vec<_> = commands.iter().filter_map(PaintCommand::text).collect();
        println!("  {} tick marks, labels: {}", lines, labels.join(" "));
    }

    Ok(())
}
