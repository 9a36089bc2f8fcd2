use circuit_layers::{BoardGeometry, PcbElement, render_document};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let design = include_str!("../assets/demo_design.json");
    let elements: Vec<PcbElement> = serde_json::from_str(design)?;

    let geometry = BoardGeometry::new(&elements);
    if let Some(bbox) = geometry.bounding_box() {
        info!(
            "Geometry bounds. min: ({}, {}), max: ({}, {})",
            bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
        );
    }

    let document = render_document(&geometry);
    circuit_layers::svg::save("demo.svg", &document)?;
    info!("Wrote demo.svg");

    Ok(())
}
