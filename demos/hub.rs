//! A line of stations with two spurs hanging off the hub:
//!
//! ```text
//!                     1203
//!                      |
//! 1200 - 1201 - 1202 - 1206 - 1205
//!                      |
//!                     1204
//! ```
//!
//! Builds the graph, dumps the cost and distance matrices and reports the
//! derived metrics. Run with `RUST_LOG=debug` to watch the pipeline work.

use centra::graph::Graph;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let vertices = vec![1200, 1201, 1202, 1203, 1204, 1205, 1206];
    let mut graph = Graph::new(vertices.clone(), Vec::new())?;

    // Every connection is bidirectional.
    for (a, b) in [
        (1200, 1201),
        (1201, 1202),
        (1202, 1206),
        (1206, 1205),
        (1202, 1203),
        (1202, 1204),
    ] {
        graph.insert_symmetric(a, b)?;
    }

    println!("Adjacency matrix:{}", graph.adjacency_matrix());
    println!("Distance matrix:{}", graph.distance_matrix());

    let eccentricities = graph.eccentricities();
    print!("Eccentricity:  ");
    for vertex in &vertices {
        print!("{vertex}: {}  ", eccentricities[vertex]);
    }
    println!();

    let (radius, diameter) = graph.radius_diameter();
    println!("Radius: {radius}  Diameter: {diameter}");
    println!("Center: {:?}", graph.center());

    Ok(())
}
