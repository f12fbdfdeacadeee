//! All-pairs shortest distances and the metrics derived from them.
//!
//! Everything in this module is a pure function over matrices and vectors;
//! [`Graph`](crate::graph::Graph) owns the inputs and surfaces the results.
//! Absent connections are represented by `f64::INFINITY`, which survives
//! addition (`INF + x == INF`) so relaxation never mistakes an unreachable
//! pair for a short path.

use nalgebra::DMatrix;

/// Relaxes the matrix in place until it holds the shortest distance for every
/// ordered vertex pair (Floyd-Warshall).
///
/// The `k` loop must stay outermost: after iteration `k`, `d[(i, j)]` holds
/// the shortest path using only vertices `0..=k` as intermediates.
pub(crate) fn floyd_warshall(d: &mut DMatrix<f64>) {
    let n = d.nrows();

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through_k = d[(i, k)] + d[(k, j)];
                if through_k < d[(i, j)] {
                    d[(i, j)] = through_k;
                }
            }
        }
    }
}

/// Returns the eccentricity of each vertex: its maximum distance to any
/// vertex, in index order.
///
/// The diagonal participates in each row maximum, so a vertex with no
/// outgoing edges in a single-vertex graph still reduces to `0.0` rather
/// than an arbitrary accumulator, and any unreachable destination propagates
/// `INF` into the eccentricity.
pub(crate) fn eccentricities(d: &DMatrix<f64>) -> Vec<f64> {
    d.row_iter().map(|row| row.max()).collect()
}

/// Reduces the eccentricity vector to the graph radius (minimum) and
/// diameter (maximum).
pub(crate) fn radius_diameter(eccentricities: &[f64]) -> (f64, f64) {
    let mut radius = f64::INFINITY;
    let mut diameter = 0.0f64;

    for &e in eccentricities {
        radius = radius.min(e);
        diameter = diameter.max(e);
    }

    (radius, diameter)
}

/// Returns the indices of the vertices whose eccentricity equals the radius.
///
/// Exact float comparison is sound here: the radius is one of the
/// eccentricity values, carried through unmodified.
pub(crate) fn center(eccentricities: &[f64], radius: f64) -> Vec<usize> {
    eccentricities
        .iter()
        .enumerate()
        .filter(|(_, &e)| e == radius)
        .map(|(i, _)| i)
        .collect()
}
