//! Adjoint design sensitivities of the static solve.
//!
//! The element stiffness and inelastic force are linear in the per-element section
//! property (area, thickness or unity), so their derivatives with respect to it are the
//! unit-section element matrices. For a scalar objective `L(u)` this module computes
//! `dL/ds_j` for every element `j` with a single adjoint solve against the same reduced
//! system as the forward problem.
//!
//! Gradients with respect to node coordinates and material parameters are not provided;
//! the solve is value-only in those inputs. (The entire pipeline is generic over
//! [`nalgebra::RealField`], so a forward-mode scalar type remains an option for them.)

use nalgebra::{DVector, DefaultAllocator, OVector, RealField};
use num::One;

use crate::allocators::FamilyAllocator;
use crate::assembly::global::gather_element_vector;
use crate::assembly::local::{assemble_element_inelastic_force, assemble_element_stiffness};
use crate::error::SolveError;
use crate::family::ElasticFamily;
use crate::material::ConstitutiveModel;
use crate::model::{BoundaryConditions, ElasticProblem, StaticSolution};
use crate::solve::solve_linear_static;

/// Gradients of a scalar objective with respect to the per-element section properties.
///
/// `objective_gradient` is `dL/du` as a flat DOF vector. The solution must come from
/// [`ElasticProblem::solve_static`] with the same material, sections, boundary conditions
/// and inelastic strains; consistent with the engine's no-caching contract, the stiffness
/// matrix is reassembled here rather than retained from the forward solve.
///
/// # Panics
///
/// Panics if the field slices or the objective gradient are not sized to this problem.
pub fn section_gradients<T, F, M>(
    problem: &ElasticProblem<T, F>,
    material: &M,
    sections: &[T],
    boundary_conditions: &BoundaryConditions<T, F::GeometryDim>,
    inelastic_strains: Option<&[OVector<T, F::StrainDim>]>,
    solution: &StaticSolution<T, F::GeometryDim>,
    objective_gradient: &DVector<T>,
) -> Result<Vec<T>, SolveError>
where
    T: RealField,
    F: ElasticFamily<T>,
    M: ConstitutiveModel<T, F::StrainDim>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    assert_eq!(objective_gradient.len(), problem.num_dofs());
    let displacements = solution.flat_displacements();
    assert_eq!(displacements.len(), problem.num_dofs());

    // Adjoint solve: K_red lambda_U = (dL/du)_U. The stiffness is symmetric, so the
    // forward solver doubles as the adjoint solver; constrained DOFs carry lambda = 0,
    // realized by prescribing zero displacements under the same constraint flags.
    let stiffness = problem.assemble_stiffness(material, sections)?;
    let zeros = DVector::zeros(problem.num_dofs());
    let (multipliers, _) = solve_linear_static(
        &stiffness,
        objective_gradient,
        &zeros,
        &zeros,
        boundary_conditions.constrained(),
    )?;

    let mut gradients = Vec::with_capacity(problem.num_elements());
    for j in 0..problem.num_elements() {
        let coords = problem.element_coordinates(j);
        let tangent = material.tangent(j);
        let indices = problem.global_dof_indices(j);
        let unit_stiffness =
            assemble_element_stiffness(problem.family(), &coords, &tangent, T::one(), j)?;
        let local_displacements = gather_element_vector(&displacements, indices);
        let local_multipliers = gather_element_vector(&multipliers, indices);
        let mut residual_derivative = -(&unit_stiffness * &local_displacements);
        if let Some(strains) = inelastic_strains {
            residual_derivative += assemble_element_inelastic_force(
                problem.family(),
                &coords,
                &tangent,
                T::one(),
                &strains[j],
                j,
            )?;
        }
        gradients.push(local_multipliers.dot(&residual_derivative));
    }
    Ok(gradients)
}
