//! Quadrature rules for the unit triangle and unit tetrahedron.
//!
//! The rules are indexed by *strength*: a rule of strength `p` integrates polynomials of
//! total order up to `p` exactly on the reference simplex. The tabulated rules are the
//! standard symmetric Gauss rules for simplices.

use crate::{Error, Rule};

/// A quadrature rule for the unit triangle with vertices (0, 0), (1, 0) and (0, 1).
///
/// Returns [`Error::NoRuleAvailable`] if no rule of the requested strength is tabulated.
pub fn triangle(strength: usize) -> Result<Rule<2>, Error> {
    match strength {
        0 | 1 => Ok((vec![1.0 / 2.0], vec![[1.0 / 3.0, 1.0 / 3.0]])),
        2 => Ok((
            vec![1.0 / 6.0; 3],
            vec![
                [1.0 / 6.0, 1.0 / 6.0],
                [2.0 / 3.0, 1.0 / 6.0],
                [1.0 / 6.0, 2.0 / 3.0],
            ],
        )),
        3 => Ok((
            vec![-27.0 / 96.0, 25.0 / 96.0, 25.0 / 96.0, 25.0 / 96.0],
            vec![
                [1.0 / 3.0, 1.0 / 3.0],
                [1.0 / 5.0, 1.0 / 5.0],
                [3.0 / 5.0, 1.0 / 5.0],
                [1.0 / 5.0, 3.0 / 5.0],
            ],
        )),
        _ => Err(Error::NoRuleAvailable),
    }
}

/// A quadrature rule for the unit tetrahedron with vertices at the origin and the unit
/// points along each coordinate axis.
///
/// Returns [`Error::NoRuleAvailable`] if no rule of the requested strength is tabulated.
pub fn tetrahedron(strength: usize) -> Result<Rule<3>, Error> {
    match strength {
        0 | 1 => Ok((vec![1.0 / 6.0], vec![[0.25, 0.25, 0.25]])),
        2 => {
            // Barycentric coordinates (a, b, b, b) and permutations
            let a = (5.0 + 3.0 * 5.0_f64.sqrt()) / 20.0;
            let b = (5.0 - 5.0_f64.sqrt()) / 20.0;
            Ok((
                vec![1.0 / 24.0; 4],
                vec![[b, b, b], [a, b, b], [b, a, b], [b, b, a]],
            ))
        }
        _ => Err(Error::NoRuleAvailable),
    }
}
