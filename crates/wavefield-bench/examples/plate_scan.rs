//! Simulated laser scan of a plate.
//!
//! Demonstrates: build a reflecting surface → evaluate → inspect the
//! response at a few grid nodes → save it for comparison with acquired
//! data. Run with `RUST_LOG=debug` to see evaluation logs.

use wavefield_bench::reference_surface;
use wavefield_record::{DataCollection, MeasuredData};
use wavefield_surface::BoundaryCondition;

fn main() {
    env_logger::init();
    println!("=== Wavefield Plate Scan Example ===\n");

    let mut runs = DataCollection::new();
    for boundary in [
        BoundaryCondition::Transparent,
        BoundaryCondition::Free,
        BoundaryCondition::ReflectionDepth(2),
    ] {
        let mut surface = reference_surface(42, 2, boundary).unwrap();
        let results = surface.eval().unwrap();
        let (ny, nx, nt) = results.dim();

        let rms = (results.iter().map(|v| v * v).sum::<f64>() / results.len() as f64).sqrt();
        let centre = results[[ny / 2, nx / 2, nt - 1]];
        println!(
            "{:>12}: {} images, rms {rms:.4}, centre at t_end {centre:+.4}",
            boundary.to_string(),
            surface.reflected_sources().len()
        );
        log::info!("evaluated {ny}x{nx}x{nt} for boundary {boundary}");

        runs.push(MeasuredData::from_surface(&surface));
    }

    let path = std::env::temp_dir().join("wavefield_plate_scan.json");
    runs.save(&path, true).unwrap();
    println!("\nSaved {} runs to {}", runs.len(), path.display());

    let back = DataCollection::load(&path).unwrap();
    assert_eq!(back.len(), runs.len());
    println!("Reloaded; last run header: {:?}", back.last().map(|m| &m.header));
}
