//! The material collaborator interface.

use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, OMatrix, RealField};

use crate::SmallDim;

/// A provider of constitutive tangents for the elements of a problem.
///
/// The tangent is the square matrix `C` relating the strain vector to the stress vector,
/// sized to the strain dimension of the structural family (1 for trusses, 3 for planar
/// continua, 6 for solids). It must follow the Voigt ordering documented in
/// [`crate::family`]. The engine queries the tangent per element, so implementations are
/// free to vary material properties (or, for anisotropic planar materials, a per-element
/// orientation) across the mesh; a homogeneous material simply ignores the element index.
///
/// The engine does not validate symmetry or positive semi-definiteness of the returned
/// matrix; that is the producer's responsibility.
pub trait ConstitutiveModel<T, S>
where
    T: RealField,
    S: SmallDim,
    DefaultAllocator: Allocator<T, S, S>,
{
    /// The constitutive tangent for the given element.
    fn tangent(&self, element_index: usize) -> OMatrix<T, S, S>;
}
