//! Structural families and their strain-displacement operators.
//!
//! A structural family couples an element topology to a strain measure: it knows how to
//! evaluate reference shape-function gradients, how to map physical node coordinates into
//! the reference space for the Jacobian, and how to build the strain-displacement operator
//! `D` relating nodal displacements to the strain vector at a point. The assembly routines
//! in [`crate::assembly`] are generic over this capability, so all three families share a
//! single integration and assembly pipeline.
//!
//! # Strain vector conventions
//!
//! Strain vectors use Voigt notation with *engineering* shear strains:
//!
//! - truss: `(eps_axial)`,
//! - planar: `(eps_xx, eps_yy, gamma_xy)`,
//! - solid: `(eps_xx, eps_yy, eps_zz, gamma_yz, gamma_zx, gamma_xy)`.
//!
//! Constitutive tangents passed to the assembly routines must use the same row/column
//! ordering; the models in `statica-materials` do.

use nalgebra::{DefaultAllocator, DimName, Dyn, OMatrix, OPoint, OVector, RealField, U1, U2, U3, U6};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::allocators::FamilyAllocator;
use crate::element::{LineElement, PlanarElement, SolidElement};
use crate::quadrature::QuadraturePair;
use crate::SmallDim;

/// The capability bundle shared by all structural families.
///
/// `GeometryDim` is the spatial dimension of the mesh, `ReferenceDim` the dimension of the
/// element reference domain and `StrainDim` the length of the strain vector. For continuum
/// families geometry and reference dimensions coincide; for trusses the reference domain is
/// one-dimensional while the geometry is 2D or 3D.
pub trait ElasticFamily<T>
where
    T: RealField,
    DefaultAllocator: FamilyAllocator<T, Self::GeometryDim, Self::ReferenceDim, Self::StrainDim>,
{
    type GeometryDim: SmallDim;
    type ReferenceDim: SmallDim;
    type StrainDim: SmallDim;

    /// Number of nodes per element.
    fn num_nodes(&self) -> usize;

    /// The fixed quadrature rule on the reference domain.
    fn quadrature(&self) -> QuadraturePair<T, Self::ReferenceDim>;

    /// Shape function gradients with respect to the reference coordinates, one column per
    /// node.
    fn reference_gradients(
        &self,
        xi: &OPoint<T, Self::ReferenceDim>,
    ) -> OMatrix<T, Self::ReferenceDim, Dyn>;

    /// Maps physical node coordinates (one column per node) to reference-space coordinates
    /// used for the Jacobian.
    ///
    /// This is the identity for continuum families. The truss family projects the node
    /// coordinates onto the element axis, which reduces the element to a one-dimensional
    /// problem along its axis.
    fn reference_coordinates(
        &self,
        coords: &OMatrix<T, Self::GeometryDim, Dyn>,
    ) -> OMatrix<T, Self::ReferenceDim, Dyn>;

    /// Builds the strain-displacement operator `D` from Cartesian shape-function gradients.
    ///
    /// The operator has `StrainDim` rows and `GeometryDim * num_nodes` columns; degrees of
    /// freedom are ordered node-by-node with the spatial components interleaved.
    fn strain_operator(
        &self,
        cartesian_gradients: &OMatrix<T, Self::ReferenceDim, Dyn>,
        coords: &OMatrix<T, Self::GeometryDim, Dyn>,
    ) -> OMatrix<T, Self::StrainDim, Dyn>;
}

/// The axial truss family over line elements, generic over the spatial dimension.
///
/// Elements carry axial stiffness only. The element axis is the direction from the first
/// to the second end node; node coordinates are projected onto it, so the family assumes
/// straight elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrussFamily<D> {
    element: LineElement,
    #[serde(skip)]
    marker: PhantomData<D>,
}

impl<D> TrussFamily<D> {
    pub fn new(element: LineElement) -> Self {
        Self {
            element,
            marker: PhantomData,
        }
    }

    pub fn element(&self) -> LineElement {
        self.element
    }
}

impl<D> TrussFamily<D>
where
    D: SmallDim,
{
    /// Unit vector along the element axis.
    fn axis<T>(&self, coords: &OMatrix<T, D, Dyn>) -> OVector<T, D>
    where
        T: RealField,
        DefaultAllocator: FamilyAllocator<T, D, U1, U1>,
    {
        let direction = coords.column(1) - coords.column(0);
        direction.normalize()
    }
}

impl<T, D> ElasticFamily<T> for TrussFamily<D>
where
    T: RealField,
    D: SmallDim,
    DefaultAllocator: FamilyAllocator<T, D, U1, U1>,
{
    type GeometryDim = D;
    type ReferenceDim = U1;
    type StrainDim = U1;

    fn num_nodes(&self) -> usize {
        self.element.num_nodes()
    }

    fn quadrature(&self) -> QuadraturePair<T, U1> {
        self.element.quadrature()
    }

    fn reference_gradients(&self, xi: &OPoint<T, U1>) -> OMatrix<T, U1, Dyn> {
        self.element.reference_gradients(xi)
    }

    fn reference_coordinates(&self, coords: &OMatrix<T, D, Dyn>) -> OMatrix<T, U1, Dyn> {
        // Axial coordinate of each node, measured from the first node. A degenerate
        // (zero-length) element produces a non-finite axis and is caught by the Jacobian
        // guard during integration.
        let axis = self.axis(coords);
        let origin = coords.column(0).clone_owned();
        OMatrix::<T, U1, Dyn>::from_fn_generic(U1::name(), Dyn(coords.ncols()), |_, k| {
            (coords.column(k) - &origin).dot(&axis)
        })
    }

    fn strain_operator(
        &self,
        cartesian_gradients: &OMatrix<T, U1, Dyn>,
        coords: &OMatrix<T, D, Dyn>,
    ) -> OMatrix<T, U1, Dyn> {
        let axis = self.axis(coords);
        let n = cartesian_gradients.ncols();
        let dim = D::dim();
        let mut operator = OMatrix::<T, U1, Dyn>::zeros_generic(U1::name(), Dyn(dim * n));
        for k in 0..n {
            for l in 0..dim {
                operator[(0, k * dim + l)] =
                    cartesian_gradients[(0, k)].clone() * axis[l].clone();
            }
        }
        operator
    }
}

/// The planar continuum family over triangles and quadrilaterals.
///
/// Produces the strain vector `(eps_xx, eps_yy, gamma_xy)`. Whether the problem is plane
/// stress or plane strain is decided entirely by the constitutive tangent; the operator is
/// the same for both.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanarFamily {
    element: PlanarElement,
}

impl PlanarFamily {
    pub fn new(element: PlanarElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> PlanarElement {
        self.element
    }
}

impl<T> ElasticFamily<T> for PlanarFamily
where
    T: RealField,
{
    type GeometryDim = U2;
    type ReferenceDim = U2;
    type StrainDim = U3;

    fn num_nodes(&self) -> usize {
        self.element.num_nodes()
    }

    fn quadrature(&self) -> QuadraturePair<T, U2> {
        self.element.quadrature()
    }

    fn reference_gradients(&self, xi: &OPoint<T, U2>) -> OMatrix<T, U2, Dyn> {
        self.element.reference_gradients(xi)
    }

    fn reference_coordinates(&self, coords: &OMatrix<T, U2, Dyn>) -> OMatrix<T, U2, Dyn> {
        coords.clone()
    }

    fn strain_operator(
        &self,
        cartesian_gradients: &OMatrix<T, U2, Dyn>,
        _coords: &OMatrix<T, U2, Dyn>,
    ) -> OMatrix<T, U3, Dyn> {
        let b = cartesian_gradients;
        let n = b.ncols();
        let mut operator = OMatrix::<T, U3, Dyn>::zeros_generic(U3::name(), Dyn(2 * n));
        for k in 0..n {
            let bx = b[(0, k)].clone();
            let by = b[(1, k)].clone();
            operator[(0, 2 * k)] = bx.clone();
            operator[(1, 2 * k + 1)] = by.clone();
            operator[(2, 2 * k)] = by;
            operator[(2, 2 * k + 1)] = bx;
        }
        operator
    }
}

/// The solid continuum family over tetrahedra and hexahedra.
///
/// Produces the strain vector `(eps_xx, eps_yy, eps_zz, gamma_yz, gamma_zx, gamma_xy)`
/// with engineering shear strains.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidFamily {
    element: SolidElement,
}

impl SolidFamily {
    pub fn new(element: SolidElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> SolidElement {
        self.element
    }
}

impl<T> ElasticFamily<T> for SolidFamily
where
    T: RealField,
{
    type GeometryDim = U3;
    type ReferenceDim = U3;
    type StrainDim = U6;

    fn num_nodes(&self) -> usize {
        self.element.num_nodes()
    }

    fn quadrature(&self) -> QuadraturePair<T, U3> {
        self.element.quadrature()
    }

    fn reference_gradients(&self, xi: &OPoint<T, U3>) -> OMatrix<T, U3, Dyn> {
        self.element.reference_gradients(xi)
    }

    fn reference_coordinates(&self, coords: &OMatrix<T, U3, Dyn>) -> OMatrix<T, U3, Dyn> {
        coords.clone()
    }

    fn strain_operator(
        &self,
        cartesian_gradients: &OMatrix<T, U3, Dyn>,
        _coords: &OMatrix<T, U3, Dyn>,
    ) -> OMatrix<T, U6, Dyn> {
        let b = cartesian_gradients;
        let n = b.ncols();
        let mut operator = OMatrix::<T, U6, Dyn>::zeros_generic(U6::name(), Dyn(3 * n));
        for k in 0..n {
            let bx = b[(0, k)].clone();
            let by = b[(1, k)].clone();
            let bz = b[(2, k)].clone();
            operator[(0, 3 * k)] = bx.clone();
            operator[(1, 3 * k + 1)] = by.clone();
            operator[(2, 3 * k + 2)] = bz.clone();
            operator[(3, 3 * k + 1)] = bz.clone();
            operator[(3, 3 * k + 2)] = by.clone();
            operator[(4, 3 * k)] = bz;
            operator[(4, 3 * k + 2)] = bx.clone();
            operator[(5, 3 * k)] = by;
            operator[(5, 3 * k + 1)] = bx;
        }
        operator
    }
}
