//! Quadrature-based integration of per-element quantities.
//!
//! All routines take the element geometry and field values as explicit arguments and
//! return freshly allocated results, so that every call is a pure function of its inputs.
//! Degrees of freedom are ordered node-by-node with spatial components interleaved, in the
//! order given by the element's node tuple.

use itertools::izip;
use nalgebra::{DMatrix, DVector, DefaultAllocator, DimName, Dyn, OMatrix, OPoint, OVector, RealField};
use num::Zero;

use crate::allocators::FamilyAllocator;
use crate::error::GeometryError;
use crate::family::ElasticFamily;

/// Jacobian determinant and Cartesian shape-function gradients at one quadrature point.
///
/// Fails if the Jacobian determinant is not strictly positive (this also catches
/// non-finite determinants produced by degenerate geometry).
fn jacobian_data<T, F>(
    family: &F,
    reference_coords: &OMatrix<T, F::ReferenceDim, Dyn>,
    xi: &OPoint<T, F::ReferenceDim>,
    element_index: usize,
) -> Result<(T, OMatrix<T, F::ReferenceDim, Dyn>), GeometryError>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    let gradients = family.reference_gradients(xi);
    let jacobian = &gradients * reference_coords.transpose();
    let determinant = jacobian.determinant();
    if !(determinant > T::zero()) {
        return Err(GeometryError::NonPositiveJacobian {
            element: element_index,
        });
    }
    let inverse = jacobian
        .try_inverse()
        .ok_or(GeometryError::NonPositiveJacobian {
            element: element_index,
        })?;
    Ok((determinant, inverse * gradients))
}

/// Integrates the stiffness matrix of a single element.
///
/// Accumulates `w * section * det J * D^T C D` over the quadrature rule of the family,
/// where `D` is the strain-displacement operator and `C` the constitutive tangent. The
/// section property is the cross-section area for trusses, the thickness for planar
/// elements and unity for solids.
pub fn assemble_element_stiffness<T, F>(
    family: &F,
    coords: &OMatrix<T, F::GeometryDim, Dyn>,
    tangent: &OMatrix<T, F::StrainDim, F::StrainDim>,
    section: T,
    element_index: usize,
) -> Result<DMatrix<T>, GeometryError>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    let num_dofs = F::GeometryDim::dim() * family.num_nodes();
    let mut stiffness = DMatrix::zeros(num_dofs, num_dofs);
    let (weights, points) = family.quadrature();
    let reference_coords = family.reference_coordinates(coords);
    for (w, xi) in izip!(&weights, &points) {
        let (det_j, cartesian_gradients) =
            jacobian_data(family, &reference_coords, xi, element_index)?;
        let operator = family.strain_operator(&cartesian_gradients, coords);
        let scale = w.clone() * section.clone() * det_j;
        stiffness += (operator.transpose() * tangent * &operator) * scale;
    }
    Ok(stiffness)
}

/// Integrates the inelastic force vector of a single element.
///
/// Accumulates `w * section * det J * D^T C eps0` for the given inelastic (eigen) strain
/// `eps0`. Inelastic strains contribute nodal forces but no stiffness.
pub fn assemble_element_inelastic_force<T, F>(
    family: &F,
    coords: &OMatrix<T, F::GeometryDim, Dyn>,
    tangent: &OMatrix<T, F::StrainDim, F::StrainDim>,
    section: T,
    strain: &OVector<T, F::StrainDim>,
    element_index: usize,
) -> Result<DVector<T>, GeometryError>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    let num_dofs = F::GeometryDim::dim() * family.num_nodes();
    let mut force = DVector::zeros(num_dofs);
    let stress = tangent * strain;
    let (weights, points) = family.quadrature();
    let reference_coords = family.reference_coordinates(coords);
    for (w, xi) in izip!(&weights, &points) {
        let (det_j, cartesian_gradients) =
            jacobian_data(family, &reference_coords, xi, element_index)?;
        let operator = family.strain_operator(&cartesian_gradients, coords);
        let scale = w.clone() * section.clone() * det_j;
        force += (operator.transpose() * &stress) * scale;
    }
    Ok(force)
}

/// Integrates the measure (length, area or volume) of a single element.
///
/// Only the Jacobian determinant is integrated; no material or section data is involved.
pub fn compute_element_measure<T, F>(
    family: &F,
    coords: &OMatrix<T, F::GeometryDim, Dyn>,
    element_index: usize,
) -> Result<T, GeometryError>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    let mut measure = T::zero();
    let (weights, points) = family.quadrature();
    let reference_coords = family.reference_coordinates(coords);
    for (w, xi) in izip!(&weights, &points) {
        let gradients = family.reference_gradients(xi);
        let jacobian = &gradients * reference_coords.transpose();
        let determinant = jacobian.determinant();
        if !(determinant > T::zero()) {
            return Err(GeometryError::NonPositiveJacobian {
                element: element_index,
            });
        }
        measure += w.clone() * determinant;
    }
    Ok(measure)
}
