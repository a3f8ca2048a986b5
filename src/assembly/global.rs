//! Scatter and gather between element-local and global degrees of freedom.
//!
//! The scatter operations are additive and operate on storage freshly allocated by the
//! caller for each assembly pass; elements sharing nodes accumulate into overlapping
//! rows and columns. Nothing is cached across passes.

use nalgebra::{DMatrix, DVector, RealField};

/// Adds a local element matrix into the global matrix at the row/column pairs given by
/// the element's global DOF indices.
///
/// # Panics
///
/// Panics if the local matrix is not square with one row per DOF index.
pub fn scatter_element_matrix<T>(global: &mut DMatrix<T>, local: &DMatrix<T>, dof_indices: &[usize])
where
    T: RealField,
{
    assert_eq!(local.nrows(), dof_indices.len());
    assert_eq!(local.ncols(), dof_indices.len());
    for (p, &i) in dof_indices.iter().enumerate() {
        for (q, &j) in dof_indices.iter().enumerate() {
            global[(i, j)] += local[(p, q)].clone();
        }
    }
}

/// Adds a local element vector into the global vector at the element's global DOF indices.
///
/// # Panics
///
/// Panics if the local vector does not have one entry per DOF index.
pub fn scatter_element_vector<T>(global: &mut DVector<T>, local: &DVector<T>, dof_indices: &[usize])
where
    T: RealField,
{
    assert_eq!(local.len(), dof_indices.len());
    for (p, &i) in dof_indices.iter().enumerate() {
        global[i] += local[p].clone();
    }
}

/// Extracts the element-local entries of a global vector.
pub fn gather_element_vector<T>(global: &DVector<T>, dof_indices: &[usize]) -> DVector<T>
where
    T: RealField,
{
    DVector::from_iterator(
        dof_indices.len(),
        dof_indices.iter().map(|&i| global[i].clone()),
    )
}
