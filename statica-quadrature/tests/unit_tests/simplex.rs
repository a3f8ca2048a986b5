use statica_quadrature::integrate;
use statica_quadrature::simplex::{tetrahedron, triangle};
use statica_quadrature::Error;

use matrixcompare::assert_scalar_eq;

fn factorial(n: i32) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Exact integral of x^a y^b over the unit triangle.
fn triangle_monomial_integral(a: i32, b: i32) -> f64 {
    factorial(a) * factorial(b) / factorial(a + b + 2)
}

/// Exact integral of x^a y^b z^c over the unit tetrahedron.
fn tetrahedron_monomial_integral(a: i32, b: i32, c: i32) -> f64 {
    factorial(a) * factorial(b) * factorial(c) / factorial(a + b + c + 3)
}

#[test]
fn triangle_rules_satisfy_expected_accuracy() {
    for strength in 1..=3 {
        let rule = triangle(strength).unwrap();

        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                let expected = triangle_monomial_integral(alpha, beta);
                let estimated = integrate(&rule, |&[x, y]| x.powi(alpha) * y.powi(beta));

                assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
            }
        }
    }
}

#[test]
fn tetrahedron_rules_satisfy_expected_accuracy() {
    for strength in 1..=2 {
        let rule = tetrahedron(strength).unwrap();

        for alpha in 0..=strength as i32 {
            for beta in 0..=(strength as i32 - alpha) {
                for gamma in 0..=(strength as i32 - alpha - beta) {
                    let expected = tetrahedron_monomial_integral(alpha, beta, gamma);
                    let estimated =
                        integrate(&rule, |&[x, y, z]| x.powi(alpha) * y.powi(beta) * z.powi(gamma));

                    assert_scalar_eq!(estimated, expected, comp = abs, tol = 1e-14);
                }
            }
        }
    }
}

#[test]
fn unavailable_strengths_are_reported() {
    assert_eq!(triangle(4).unwrap_err(), Error::NoRuleAvailable);
    assert_eq!(tetrahedron(3).unwrap_err(), Error::NoRuleAvailable);
}
