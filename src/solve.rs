//! The boundary-reduction solver for the assembled linear system.

use log::debug;
use nalgebra::{DMatrix, DVector, RealField};

use crate::error::SolveError;

/// Solves `K u = f` under mixed displacement/force boundary conditions.
///
/// The computation partitions the DOFs into the constrained set `C` (constraint flag set)
/// and the free set `U`, forms the reduced load
/// `f_red = (external + inelastic - K u_p)[U]` (where `u_p` carries the prescribed values
/// at `C` and zeros elsewhere) and the reduced stiffness `K_red = K[U, U]`, and solves the
/// reduced system with a dense LU factorization. The full displacement vector holds the
/// prescribed values at `C` and the solved values at `U`; the returned force vector is
/// `f = K u`, which contains the reaction forces at constrained DOFs.
///
/// A singular reduced matrix (typically: rigid-body modes not suppressed by the boundary
/// conditions) is a fatal [`SolveError::SingularSystem`]; there is no fallback solver and
/// no partial result. When every DOF is prescribed the reduced system is empty and the
/// prescribed field is returned unchanged.
///
/// # Panics
///
/// Panics if the input shapes are inconsistent.
pub fn solve_linear_static<T>(
    stiffness: &DMatrix<T>,
    external_forces: &DVector<T>,
    inelastic_forces: &DVector<T>,
    prescribed: &DVector<T>,
    constrained: &[bool],
) -> Result<(DVector<T>, DVector<T>), SolveError>
where
    T: RealField,
{
    let num_dofs = stiffness.nrows();
    assert_eq!(stiffness.ncols(), num_dofs);
    assert_eq!(external_forces.len(), num_dofs);
    assert_eq!(inelastic_forces.len(), num_dofs);
    assert_eq!(prescribed.len(), num_dofs);
    assert_eq!(constrained.len(), num_dofs);

    let free: Vec<usize> = (0..num_dofs).filter(|&i| !constrained[i]).collect();
    debug!(
        "reducing system: {} free of {} total dofs",
        free.len(),
        num_dofs
    );

    // Load contribution of the prescribed displacements
    let mut prescribed_masked = DVector::zeros(num_dofs);
    for i in 0..num_dofs {
        if constrained[i] {
            prescribed_masked[i] = prescribed[i].clone();
        }
    }
    let prescribed_load = stiffness * &prescribed_masked;

    let reduced_load = DVector::from_iterator(
        free.len(),
        free.iter().map(|&i| {
            external_forces[i].clone() + inelastic_forces[i].clone() - prescribed_load[i].clone()
        }),
    );
    let reduced_stiffness = DMatrix::from_fn(free.len(), free.len(), |p, q| {
        stiffness[(free[p], free[q])].clone()
    });

    let free_displacements = reduced_stiffness
        .lu()
        .solve(&reduced_load)
        .ok_or(SolveError::SingularSystem)?;

    let mut displacements = prescribed_masked;
    for (p, &i) in free.iter().enumerate() {
        displacements[i] = free_displacements[p].clone();
    }
    let forces = stiffness * &displacements;

    Ok((displacements, forces))
}
