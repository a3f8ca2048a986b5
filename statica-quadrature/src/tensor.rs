//! Tensor-product rules for quadrilateral and hexahedral reference domains.

use crate::univariate::gauss;
use crate::Rule;

/// A Gauss rule for the reference quadrilateral, built as the tensor product of the
/// 1D rule with the given number of points per dimension.
pub fn quadrilateral_gauss(num_points_per_dim: usize) -> Rule<2> {
    let n = num_points_per_dim;
    let (weights1d, points1d) = gauss(n);
    let mut weights = Vec::with_capacity(n * n);
    let mut points = Vec::with_capacity(n * n);

    for i in 0..n {
        for j in 0..n {
            weights.push(weights1d[i] * weights1d[j]);
            points.push([points1d[i][0], points1d[j][0]]);
        }
    }

    (weights, points)
}

/// A Gauss rule for the reference hexahedron, built as the tensor product of the
/// 1D rule with the given number of points per dimension.
pub fn hexahedron_gauss(num_points_per_dim: usize) -> Rule<3> {
    let n = num_points_per_dim;
    let (weights1d, points1d) = gauss(n);
    let mut weights = Vec::with_capacity(n * n * n);
    let mut points = Vec::with_capacity(n * n * n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                weights.push(weights1d[i] * weights1d[j] * weights1d[k]);
                points.push([points1d[i][0], points1d[j][0], points1d[k][0]]);
            }
        }
    }

    (weights, points)
}
