//! Reference elements for the supported structural families.
//!
//! Each element variant bundles its node count, the shape-function gradients on the
//! reference domain and a fixed quadrature rule chosen to integrate the element stiffness
//! polynomial exactly or near-exactly. The variants are grouped into one tagged enum per
//! structural family, so that family-level dispatch is a single `match` performed once per
//! call instead of identity checks scattered across the pipeline.
//!
//! Reference domain conventions match [`statica_quadrature`]: the interval `[-1, 1]` for
//! lines, `[-1, 1]^2` and `[-1, 1]^3` for quadrilaterals and hexahedra, and the unit
//! simplex for triangles and tetrahedra.

use nalgebra::{DimName, Dyn, OMatrix, Point1, Point2, Point3, RealField, Vector2, Vector3, U1, U2, U3};
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};
use statica_quadrature::{simplex, tensor, univariate};

use crate::quadrature::{convert_rule, QuadraturePair1d, QuadraturePair2d, QuadraturePair3d};

/// Line elements used by the truss family.
///
/// Node ordering for [`LineElement::Seg3`] is end, end, midside; the reference coordinates
/// of the nodes are -1, 1 and 0 in that order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineElement {
    /// 2-node line with linear shape functions.
    Seg2,
    /// 3-node line with quadratic shape functions.
    Seg3,
}

impl LineElement {
    /// Selects the element variant matching the given per-element node count.
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            2 => Some(Self::Seg2),
            3 => Some(Self::Seg3),
            _ => None,
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Self::Seg2 => 2,
            Self::Seg3 => 3,
        }
    }

    /// The fixed quadrature rule used for stiffness integration on this element.
    pub fn quadrature<T>(&self) -> QuadraturePair1d<T>
    where
        T: RealField,
    {
        match self {
            Self::Seg2 => convert_rule(univariate::gauss(1)),
            Self::Seg3 => convert_rule(univariate::gauss(2)),
        }
    }

    /// Shape function gradients with respect to the reference coordinate, one column per node.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn reference_gradients<T>(&self, xi: &Point1<T>) -> OMatrix<T, U1, Dyn>
    where
        T: RealField,
    {
        let x = xi.x.clone();
        match self {
            Self::Seg2 => {
                let mut gradients = OMatrix::<T, U1, Dyn>::zeros_generic(U1::name(), Dyn(2));
                gradients[(0, 0)] = -0.5;
                gradients[(0, 1)] = 0.5;
                gradients
            }
            Self::Seg3 => {
                let mut gradients = OMatrix::<T, U1, Dyn>::zeros_generic(U1::name(), Dyn(3));
                gradients[(0, 0)] = x.clone() - 0.5;
                gradients[(0, 1)] = x.clone() + 0.5;
                gradients[(0, 2)] = -2.0 * x;
                gradients
            }
        }
    }
}

/// Planar elements used by the planar continuum family.
///
/// Corner nodes are ordered counterclockwise. For the quadratic variants the corners come
/// first, followed by the midside nodes in edge order (bottom, right, top, left for
/// [`PlanarElement::Quad8`]; edges 1-2, 2-3, 3-1 for [`PlanarElement::Tri6`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanarElement {
    /// 3-node triangle with linear shape functions.
    Tri3,
    /// 4-node quadrilateral with bilinear shape functions.
    Quad4,
    /// 6-node triangle with quadratic shape functions.
    Tri6,
    /// 8-node serendipity quadrilateral.
    Quad8,
}

impl PlanarElement {
    /// Selects the element variant matching the given per-element node count.
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            3 => Some(Self::Tri3),
            4 => Some(Self::Quad4),
            6 => Some(Self::Tri6),
            8 => Some(Self::Quad8),
            _ => None,
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Self::Tri3 => 3,
            Self::Quad4 => 4,
            Self::Tri6 => 6,
            Self::Quad8 => 8,
        }
    }

    /// The fixed quadrature rule used for stiffness integration on this element.
    pub fn quadrature<T>(&self) -> QuadraturePair2d<T>
    where
        T: RealField,
    {
        match self {
            Self::Tri3 => convert_rule(simplex::triangle(1).expect("rule is tabulated")),
            Self::Quad4 => convert_rule(tensor::quadrilateral_gauss(2)),
            Self::Tri6 => convert_rule(simplex::triangle(2).expect("rule is tabulated")),
            Self::Quad8 => convert_rule(tensor::quadrilateral_gauss(3)),
        }
    }

    /// Shape function gradients with respect to the reference coordinates, one column per node.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn reference_gradients<T>(&self, xi: &Point2<T>) -> OMatrix<T, U2, Dyn>
    where
        T: RealField,
    {
        let x = xi.x.clone();
        let y = xi.y.clone();
        match self {
            Self::Tri3 => {
                let mut gradients = OMatrix::<T, U2, Dyn>::zeros_generic(U2::name(), Dyn(3));
                gradients.set_column(0, &Vector2::new(-1.0, -1.0));
                gradients.set_column(1, &Vector2::new(1.0, 0.0));
                gradients.set_column(2, &Vector2::new(0.0, 1.0));
                gradients
            }
            Self::Quad4 => {
                let mut gradients = OMatrix::<T, U2, Dyn>::zeros_generic(U2::name(), Dyn(4));
                let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
                for (k, (sx, sy)) in corners.into_iter().enumerate() {
                    gradients.set_column(
                        k,
                        &Vector2::new(
                            0.25 * sx.clone() * (1.0 + y.clone() * sy.clone()),
                            0.25 * sy * (1.0 + x.clone() * sx),
                        ),
                    );
                }
                gradients
            }
            Self::Tri6 => {
                // Barycentric coordinate of the first corner
                let l1 = 1.0 - x.clone() - y.clone();
                let mut gradients = OMatrix::<T, U2, Dyn>::zeros_generic(U2::name(), Dyn(6));
                gradients.set_column(
                    0,
                    &Vector2::new(1.0 - 4.0 * l1.clone(), 1.0 - 4.0 * l1.clone()),
                );
                gradients.set_column(1, &Vector2::new(4.0 * x.clone() - 1.0, 0.0));
                gradients.set_column(2, &Vector2::new(0.0, 4.0 * y.clone() - 1.0));
                gradients.set_column(
                    3,
                    &Vector2::new(4.0 * (l1.clone() - x.clone()), -4.0 * x.clone()),
                );
                gradients.set_column(4, &Vector2::new(4.0 * y.clone(), 4.0 * x));
                gradients.set_column(5, &Vector2::new(-4.0 * y.clone(), 4.0 * (l1 - y)));
                gradients
            }
            Self::Quad8 => {
                let mut gradients = OMatrix::<T, U2, Dyn>::zeros_generic(U2::name(), Dyn(8));
                let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
                for (k, (sx, sy)) in corners.into_iter().enumerate() {
                    gradients.set_column(
                        k,
                        &Vector2::new(
                            0.25
                                * sx.clone()
                                * (1.0 + y.clone() * sy.clone())
                                * (2.0 * x.clone() * sx.clone() + y.clone() * sy.clone()),
                            0.25
                                * sy.clone()
                                * (1.0 + x.clone() * sx.clone())
                                * (x.clone() * sx + 2.0 * y.clone() * sy),
                        ),
                    );
                }
                // Midside nodes at (0, -1), (1, 0), (0, 1) and (-1, 0)
                gradients.set_column(
                    4,
                    &Vector2::new(
                        -x.clone() * (1.0 - y.clone()),
                        -0.5 * (1.0 - x.clone() * x.clone()),
                    ),
                );
                gradients.set_column(
                    5,
                    &Vector2::new(
                        0.5 * (1.0 - y.clone() * y.clone()),
                        -y.clone() * (1.0 + x.clone()),
                    ),
                );
                gradients.set_column(
                    6,
                    &Vector2::new(
                        -x.clone() * (1.0 + y.clone()),
                        0.5 * (1.0 - x.clone() * x.clone()),
                    ),
                );
                gradients.set_column(
                    7,
                    &Vector2::new(
                        -0.5 * (1.0 - y.clone() * y.clone()),
                        -y * (1.0 - x),
                    ),
                );
                gradients
            }
        }
    }
}

/// Solid elements used by the solid continuum family.
///
/// For [`SolidElement::Hex8`] the first four nodes form the bottom face (counterclockwise
/// when viewed from the top), followed by the corresponding top-face nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidElement {
    /// 4-node tetrahedron with linear shape functions.
    Tet4,
    /// 8-node hexahedron with trilinear shape functions.
    Hex8,
}

impl SolidElement {
    /// Selects the element variant matching the given per-element node count.
    pub fn from_arity(arity: usize) -> Option<Self> {
        match arity {
            4 => Some(Self::Tet4),
            8 => Some(Self::Hex8),
            _ => None,
        }
    }

    pub fn num_nodes(&self) -> usize {
        match self {
            Self::Tet4 => 4,
            Self::Hex8 => 8,
        }
    }

    /// The fixed quadrature rule used for stiffness integration on this element.
    pub fn quadrature<T>(&self) -> QuadraturePair3d<T>
    where
        T: RealField,
    {
        match self {
            Self::Tet4 => convert_rule(simplex::tetrahedron(1).expect("rule is tabulated")),
            Self::Hex8 => convert_rule(tensor::hexahedron_gauss(2)),
        }
    }

    /// Shape function gradients with respect to the reference coordinates, one column per node.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn reference_gradients<T>(&self, xi: &Point3<T>) -> OMatrix<T, U3, Dyn>
    where
        T: RealField,
    {
        match self {
            Self::Tet4 => {
                let mut gradients = OMatrix::<T, U3, Dyn>::zeros_generic(U3::name(), Dyn(4));
                gradients.set_column(0, &Vector3::new(-1.0, -1.0, -1.0));
                gradients.set_column(1, &Vector3::new(1.0, 0.0, 0.0));
                gradients.set_column(2, &Vector3::new(0.0, 1.0, 0.0));
                gradients.set_column(3, &Vector3::new(0.0, 0.0, 1.0));
                gradients
            }
            Self::Hex8 => {
                let x = xi.x.clone();
                let y = xi.y.clone();
                let z = xi.z.clone();
                let mut gradients = OMatrix::<T, U3, Dyn>::zeros_generic(U3::name(), Dyn(8));
                let corners = [
                    (-1.0, -1.0, -1.0),
                    (1.0, -1.0, -1.0),
                    (1.0, 1.0, -1.0),
                    (-1.0, 1.0, -1.0),
                    (-1.0, -1.0, 1.0),
                    (1.0, -1.0, 1.0),
                    (1.0, 1.0, 1.0),
                    (-1.0, 1.0, 1.0),
                ];
                for (k, (sx, sy, sz)) in corners.into_iter().enumerate() {
                    gradients.set_column(
                        k,
                        &Vector3::new(
                            0.125
                                * sx.clone()
                                * (1.0 + y.clone() * sy.clone())
                                * (1.0 + z.clone() * sz.clone()),
                            0.125
                                * sy.clone()
                                * (1.0 + x.clone() * sx.clone())
                                * (1.0 + z.clone() * sz.clone()),
                            0.125 * sz * (1.0 + x.clone() * sx) * (1.0 + y.clone() * sy),
                        ),
                    );
                }
                gradients
            }
        }
    }
}
