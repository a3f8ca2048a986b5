//! Constitutive models for `statica`.
//!
//! The models in this crate implement [`statica::material::ConstitutiveModel`] for the
//! three structural families of the engine. All tangents follow the Voigt conventions
//! documented in [`statica::family`]: `(eps_axial)` for trusses, `(eps_xx, eps_yy,
//! gamma_xy)` for planar continua and `(eps_xx, eps_yy, eps_zz, gamma_yz, gamma_zx,
//! gamma_xy)` for solids, with engineering shear strains throughout.

mod materials;

pub use materials::{
    rotate_plane_tangent, Isotropic3d, LameParameters, Orthotropic2d, PlaneStrain, PlaneStress,
    Uniaxial, YoungPoisson,
};
