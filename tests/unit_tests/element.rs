use matrixcompare::assert_scalar_eq;
use nalgebra::{Point1, Point2, Point3};
use statica::element::{LineElement, PlanarElement, SolidElement};

#[test]
fn arity_dispatch_selects_the_expected_variants() {
    assert_eq!(LineElement::from_arity(2), Some(LineElement::Seg2));
    assert_eq!(LineElement::from_arity(3), Some(LineElement::Seg3));
    assert_eq!(LineElement::from_arity(4), None);

    assert_eq!(PlanarElement::from_arity(3), Some(PlanarElement::Tri3));
    assert_eq!(PlanarElement::from_arity(4), Some(PlanarElement::Quad4));
    assert_eq!(PlanarElement::from_arity(6), Some(PlanarElement::Tri6));
    assert_eq!(PlanarElement::from_arity(8), Some(PlanarElement::Quad8));
    assert_eq!(PlanarElement::from_arity(5), None);

    assert_eq!(SolidElement::from_arity(4), Some(SolidElement::Tet4));
    assert_eq!(SolidElement::from_arity(8), Some(SolidElement::Hex8));
    assert_eq!(SolidElement::from_arity(5), None);
}

#[test]
fn quadrature_weights_sum_to_the_reference_measure() {
    for element in [LineElement::Seg2, LineElement::Seg3] {
        let (weights, points) = element.quadrature::<f64>();
        assert_eq!(weights.len(), points.len());
        let total: f64 = weights.iter().sum();
        assert_scalar_eq!(total, 2.0, comp = abs, tol = 1e-14);
    }

    for (element, measure) in [
        (PlanarElement::Tri3, 0.5),
        (PlanarElement::Tri6, 0.5),
        (PlanarElement::Quad4, 4.0),
        (PlanarElement::Quad8, 4.0),
    ] {
        let (weights, points) = element.quadrature::<f64>();
        assert_eq!(weights.len(), points.len());
        let total: f64 = weights.iter().sum();
        assert_scalar_eq!(total, measure, comp = abs, tol = 1e-14);
    }

    for (element, measure) in [(SolidElement::Tet4, 1.0 / 6.0), (SolidElement::Hex8, 8.0)] {
        let (weights, points) = element.quadrature::<f64>();
        assert_eq!(weights.len(), points.len());
        let total: f64 = weights.iter().sum();
        assert_scalar_eq!(total, measure, comp = abs, tol = 1e-14);
    }
}

/// The shape functions of every element sum to one, so their gradients must sum to zero
/// in every reference direction.
#[test]
fn reference_gradients_satisfy_partition_of_unity() {
    let line_points = [Point1::new(-0.3), Point1::new(0.0), Point1::new(0.8)];
    for element in [LineElement::Seg2, LineElement::Seg3] {
        for xi in &line_points {
            let gradients = element.reference_gradients(xi);
            assert_eq!(gradients.ncols(), element.num_nodes());
            for i in 0..gradients.nrows() {
                let row_sum: f64 = gradients.row(i).iter().sum();
                assert_scalar_eq!(row_sum, 0.0, comp = abs, tol = 1e-14);
            }
        }
    }

    let simplex_points = [Point2::new(0.2, 0.3), Point2::new(1.0 / 3.0, 1.0 / 3.0)];
    let square_points = [Point2::new(-0.4, 0.7), Point2::new(0.0, 0.0)];
    for (element, points) in [
        (PlanarElement::Tri3, &simplex_points),
        (PlanarElement::Tri6, &simplex_points),
        (PlanarElement::Quad4, &square_points),
        (PlanarElement::Quad8, &square_points),
    ] {
        for xi in points {
            let gradients = element.reference_gradients(xi);
            assert_eq!(gradients.ncols(), element.num_nodes());
            for i in 0..gradients.nrows() {
                let row_sum: f64 = gradients.row(i).iter().sum();
                assert_scalar_eq!(row_sum, 0.0, comp = abs, tol = 1e-14);
            }
        }
    }

    let solid_points = [
        Point3::new(0.1, 0.2, 0.3),
        Point3::new(0.25, 0.25, 0.25),
        Point3::new(-0.5, 0.4, 0.9),
    ];
    for element in [SolidElement::Tet4, SolidElement::Hex8] {
        for xi in &solid_points {
            let gradients = element.reference_gradients(xi);
            assert_eq!(gradients.ncols(), element.num_nodes());
            for i in 0..gradients.nrows() {
                let row_sum: f64 = gradients.row(i).iter().sum();
                assert_scalar_eq!(row_sum, 0.0, comp = abs, tol = 1e-14);
            }
        }
    }
}
