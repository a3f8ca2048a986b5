//! Error types for problem construction, integration and solves.
//!
//! All errors are fatal for the operation that produced them: there is no retry, no
//! fallback and no partial result. A failed solve yields no displacement or force field.

use std::fmt;
use std::fmt::{Display, Formatter};

/// Errors raised when constructing a problem from mesh input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// The mesh contains no elements, so no element family can be inferred.
    EmptyConnectivity,
    /// The node count of the first element does not correspond to any element variant
    /// of the requested family.
    UnsupportedArity { arity: usize },
    /// An element has a different node count than the first element. All elements of a
    /// problem must belong to a single element variant.
    MixedArity {
        element: usize,
        expected: usize,
        found: usize,
    },
    /// An element references a node that does not exist in the mesh.
    NodeIndexOutOfBounds { element: usize, index: usize },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyConnectivity => {
                write!(f, "mesh has no elements to infer an element type from")
            }
            Self::UnsupportedArity { arity } => {
                write!(f, "no element variant with {arity} nodes is supported")
            }
            Self::MixedArity {
                element,
                expected,
                found,
            } => {
                write!(
                    f,
                    "element {element} has {found} nodes, but the first element has {expected}"
                )
            }
            Self::NodeIndexOutOfBounds { element, index } => {
                write!(f, "element {element} references out-of-bounds node {index}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Errors raised while integrating over an element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometryError {
    /// The Jacobian determinant is not strictly positive at some quadrature point,
    /// which signals inverted or degenerate element connectivity.
    NonPositiveJacobian { element: usize },
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveJacobian { element } => {
                write!(
                    f,
                    "non-positive Jacobian determinant in element {element}; check the node ordering"
                )
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Errors raised by the boundary-reduction solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolveError {
    /// Element integration failed while assembling the global system.
    Geometry(GeometryError),
    /// The reduced stiffness matrix is singular. This typically means that the boundary
    /// conditions do not suppress all rigid-body modes of the structure.
    SingularSystem,
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(err) => write!(f, "{err}"),
            Self::SingularSystem => {
                write!(f, "the reduced stiffness matrix is singular")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::SingularSystem => None,
        }
    }
}

impl From<GeometryError> for SolveError {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}
