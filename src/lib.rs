//! `statica`: linear elastostatic finite element computations.
//!
//! The library builds and solves linear static equilibrium problems over three structural
//! families: axial trusses (line elements in 2D or 3D space), planar continua (triangles and
//! quadrilaterals) and solid continua (tetrahedra and hexahedra). For each family it derives
//! per-element strain operators from shape-function gradients, integrates element stiffness
//! matrices and inelastic force vectors by Gauss quadrature, assembles the global linear
//! system, applies mixed displacement/force boundary conditions and solves for the
//! equilibrium displacement and force fields.
//!
//! # Recompute-on-solve contract
//!
//! The engine caches nothing between calls: every assembly or solve is a pure function of
//! the problem topology and the field values passed in (section properties, constitutive
//! tangents, boundary data, inelastic strains). Callers embedding the solver in an
//! optimization loop may therefore mutate those inputs freely between calls without any
//! invalidation step. All numeric code is generic over [`nalgebra::RealField`], so a
//! forward-mode scalar type satisfying that trait composes through the entire pipeline;
//! adjoint gradients with respect to section properties are additionally available in
//! [`sensitivity`].

use nalgebra::{DimMin, DimName};

pub mod allocators;
pub mod assembly;
pub mod element;
pub mod error;
pub mod family;
pub mod material;
pub mod mesh;
pub mod model;
pub mod quadrature;
pub mod sensitivity;
pub mod solve;

pub extern crate nalgebra;

/// A small, fixed-size dimension.
///
/// Used as a trait alias for various traits frequently needed by generic `statica` routines.
pub trait SmallDim: DimName + DimMin<Self, Output = Self> {}

impl<D> SmallDim for D where D: DimName + DimMin<Self, Output = Self> {}
