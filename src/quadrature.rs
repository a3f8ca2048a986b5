//! Quadrature pairs on finite element reference domains.
//!
//! The numeric rule data lives in the dependency-free [`statica_quadrature`] crate; this
//! module defines the `(weights, points)` pair representation used throughout `statica`
//! and the conversion from the `f64` rule data to an arbitrary real scalar type.

use nalgebra::{Const, OPoint, RealField, SVector, U1, U2, U3};

/// Errors returned by quadrature rule constructors.
pub use statica_quadrature::Error as QuadratureError;

/// A quadrature rule represented as a pair of weights and points.
pub type QuadraturePair<T, D> = (Vec<T>, Vec<OPoint<T, D>>);
pub type QuadraturePair1d<T> = QuadraturePair<T, U1>;
pub type QuadraturePair2d<T> = QuadraturePair<T, U2>;
pub type QuadraturePair3d<T> = QuadraturePair<T, U3>;

/// Converts an `f64` rule into a quadrature pair over the scalar type `T`.
pub fn convert_rule<T, const D: usize>(rule: statica_quadrature::Rule<D>) -> QuadraturePair<T, Const<D>>
where
    T: RealField,
{
    let (weights, points) = rule;
    let weights = weights
        .into_iter()
        .map(|w| T::from_f64(w).expect("weight must fit in T"))
        .collect();
    let points = points
        .into_iter()
        .map(|p| {
            OPoint::from(SVector::<T, D>::from_fn(|i, _| {
                T::from_f64(p[i]).expect("coordinate must fit in T")
            }))
        })
        .collect();
    (weights, points)
}
