//! Index-based mesh data structure.

use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, DimName, OPoint, Scalar, U2, U3};
use serde::{Deserialize, Serialize};

/// A conforming mesh stored as a vertex list and index-based connectivity.
///
/// The vertex set and the connectivity are fixed after construction. Connectivity entries
/// are ordered tuples of vertex indices; all elements of a problem are expected to share
/// the node count of the first element, which problem constructors validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
// serde is not able to correctly determine the necessary trait bounds in this case,
// so write our own
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Mesh<T: Scalar, D>
where
    D: DimName,
    DefaultAllocator: Allocator<T, D>,
{
    #[serde(bound(
        serialize = "<DefaultAllocator as Allocator<T, D>>::Buffer: Serialize",
        deserialize = "<DefaultAllocator as Allocator<T, D>>::Buffer: Deserialize<'de>"
    ))]
    vertices: Vec<OPoint<T, D>>,
    connectivity: Vec<Vec<usize>>,
}

pub type Mesh2d<T> = Mesh<T, U2>;
pub type Mesh3d<T> = Mesh<T, U3>;

impl<T, D> Mesh<T, D>
where
    T: Scalar,
    D: DimName,
    DefaultAllocator: Allocator<T, D>,
{
    /// Constructs a mesh from vertices and connectivity.
    ///
    /// The connectivity should reference only in-bounds vertex indices. The mesh itself
    /// does not validate this; the problem constructors in [`crate::model`] do, and other
    /// consumers are permitted to panic on invalid indices.
    pub fn from_vertices_and_connectivity(
        vertices: Vec<OPoint<T, D>>,
        connectivity: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            vertices,
            connectivity,
        }
    }

    pub fn vertices(&self) -> &[OPoint<T, D>] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [OPoint<T, D>] {
        &mut self.vertices
    }

    pub fn connectivity(&self) -> &[Vec<usize>] {
        &self.connectivity
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_elements(&self) -> usize {
        self.connectivity.len()
    }
}
