use matrixcompare::assert_scalar_eq;
use nalgebra::{Point2, Vector2, U2};
use statica::mesh::Mesh2d;
use statica::model::{BoundaryConditions, PlanarProblem};
use statica_materials::{PlaneStress, YoungPoisson};

/// Checks a uniaxial plane stress patch state: `u_x = sigma x / E`, `u_y = -nu sigma y / E`.
fn assert_uniaxial_state(
    problem: &PlanarProblem<f64>,
    solution: &statica::model::StaticSolution<f64, U2>,
    sigma: f64,
    young: f64,
    poisson: f64,
    tol: f64,
) {
    for (node, vertex) in problem.mesh().vertices().iter().enumerate() {
        let expected_x = sigma * vertex.x / young;
        let expected_y = -poisson * sigma * vertex.y / young;
        assert_scalar_eq!(solution.displacement(node).x, expected_x, comp = abs, tol = tol);
        assert_scalar_eq!(solution.displacement(node).y, expected_y, comp = abs, tol = tol);
    }
}

/// Single bilinear quadrilateral under uniform uniaxial tension. The displacement field
/// is linear, so the element reproduces it exactly.
#[test]
fn quad4_passes_the_uniaxial_patch_test() {
    let (young, poisson, thickness, sigma) = (200.0, 0.3, 0.1, 5.0);
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        vec![vec![0, 1, 2, 3]],
    );
    let problem = PlanarProblem::planar(mesh).unwrap();
    let material = PlaneStress::new(YoungPoisson::new(young, poisson));

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    // Roller supports on the left and bottom edges
    bcs.constrain_dof(0, 0, 0.0);
    bcs.constrain_dof(3, 0, 0.0);
    bcs.constrain_dof(0, 1, 0.0);
    bcs.constrain_dof(1, 1, 0.0);
    // Consistent nodal loads for a uniform traction on the right edge
    let edge_force = sigma * thickness;
    bcs.set_force(1, &Vector2::new(0.5 * edge_force, 0.0));
    bcs.set_force(2, &Vector2::new(0.5 * edge_force, 0.0));

    let solution = problem
        .solve_static(&material, &[thickness], &bcs, None)
        .unwrap();
    assert_uniaxial_state(&problem, &solution, sigma, young, poisson, 1e-12);

    // Round-trip consistency: f = K u reproduces the applied loads at free DOFs and
    // balances them at the supports
    assert_scalar_eq!(solution.force(1).x, 0.5 * edge_force, comp = abs, tol = 1e-12);
    assert_scalar_eq!(solution.force(2).x, 0.5 * edge_force, comp = abs, tol = 1e-12);
    let reaction: f64 = solution.force(0).x + solution.force(3).x;
    assert_scalar_eq!(reaction, -edge_force, comp = abs, tol = 1e-12);
}

/// The same patch state on a pair of linear triangles.
#[test]
fn tri3_passes_the_uniaxial_patch_test() {
    let (young, poisson, thickness, sigma) = (70.0, 0.25, 1.0, 3.0);
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        vec![vec![0, 1, 2], vec![0, 2, 3]],
    );
    let problem = PlanarProblem::planar(mesh).unwrap();
    let material = PlaneStress::new(YoungPoisson::new(young, poisson));

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    bcs.constrain_dof(0, 0, 0.0);
    bcs.constrain_dof(3, 0, 0.0);
    bcs.constrain_dof(0, 1, 0.0);
    bcs.constrain_dof(1, 1, 0.0);
    let edge_force = sigma * thickness;
    bcs.set_force(1, &Vector2::new(0.5 * edge_force, 0.0));
    bcs.set_force(2, &Vector2::new(0.5 * edge_force, 0.0));

    let solution = problem
        .solve_static(&material, &[thickness, thickness], &bcs, None)
        .unwrap();
    assert_uniaxial_state(&problem, &solution, sigma, young, poisson, 1e-12);
}

/// The serendipity quadrilateral reproduces the linear patch state as well; the midside
/// nodes carry the consistent 2/3 share of the edge load.
#[test]
fn quad8_passes_the_uniaxial_patch_test() {
    let (young, poisson, thickness, sigma) = (210.0, 0.3, 1.0, 6.0);
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(0.5, 1.0),
            Point2::new(0.0, 0.5),
        ],
        vec![vec![0, 1, 2, 3, 4, 5, 6, 7]],
    );
    let problem = PlanarProblem::planar(mesh).unwrap();
    let material = PlaneStress::new(YoungPoisson::new(young, poisson));

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    // Left edge: corners 0, 3 and midside 7; bottom edge: corners 0, 1 and midside 4
    bcs.constrain_dof(0, 0, 0.0);
    bcs.constrain_dof(3, 0, 0.0);
    bcs.constrain_dof(7, 0, 0.0);
    bcs.constrain_dof(0, 1, 0.0);
    bcs.constrain_dof(1, 1, 0.0);
    bcs.constrain_dof(4, 1, 0.0);
    // Consistent loads for a uniform traction on a quadratic edge: 1/6, 1/6 and 2/3
    let edge_force = sigma * thickness;
    bcs.set_force(1, &Vector2::new(edge_force / 6.0, 0.0));
    bcs.set_force(2, &Vector2::new(edge_force / 6.0, 0.0));
    bcs.set_force(5, &Vector2::new(2.0 * edge_force / 3.0, 0.0));

    let solution = problem
        .solve_static(&material, &[thickness], &bcs, None)
        .unwrap();
    assert_uniaxial_state(&problem, &solution, sigma, young, poisson, 1e-10);
}

/// The quadratic triangle pair reproduces the linear patch state.
#[test]
fn tri6_passes_the_uniaxial_patch_test() {
    let (young, poisson, thickness, sigma) = (210.0, 0.3, 1.0, 6.0);
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(0.5, 0.5),
            Point2::new(0.5, 1.0),
            Point2::new(0.0, 0.5),
        ],
        vec![vec![0, 1, 2, 4, 5, 6], vec![0, 2, 3, 6, 7, 8]],
    );
    let problem = PlanarProblem::planar(mesh).unwrap();
    let material = PlaneStress::new(YoungPoisson::new(young, poisson));

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    bcs.constrain_dof(0, 0, 0.0);
    bcs.constrain_dof(3, 0, 0.0);
    bcs.constrain_dof(8, 0, 0.0);
    bcs.constrain_dof(0, 1, 0.0);
    bcs.constrain_dof(1, 1, 0.0);
    bcs.constrain_dof(4, 1, 0.0);
    let edge_force = sigma * thickness;
    bcs.set_force(1, &Vector2::new(edge_force / 6.0, 0.0));
    bcs.set_force(2, &Vector2::new(edge_force / 6.0, 0.0));
    bcs.set_force(5, &Vector2::new(2.0 * edge_force / 3.0, 0.0));

    let solution = problem
        .solve_static(&material, &[thickness, thickness], &bcs, None)
        .unwrap();
    assert_uniaxial_state(&problem, &solution, sigma, young, poisson, 1e-10);
}

/// Prescribing a uniform displacement on the loaded edge instead of forces exercises the
/// inhomogeneous displacement path of the boundary reduction.
#[test]
fn prescribed_edge_displacement_produces_the_expected_reactions() {
    let (young, poisson, thickness) = (100.0, 0.0, 1.0);
    let stretch = 0.01;
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ],
        vec![vec![0, 1, 2, 3]],
    );
    let problem = PlanarProblem::planar(mesh).unwrap();
    let material = PlaneStress::new(YoungPoisson::new(young, poisson));

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    bcs.constrain_dof(0, 0, 0.0);
    bcs.constrain_dof(3, 0, 0.0);
    bcs.constrain_dof(0, 1, 0.0);
    bcs.constrain_dof(1, 1, 0.0);
    bcs.constrain_dof(1, 0, stretch);
    bcs.constrain_dof(2, 0, stretch);

    let solution = problem
        .solve_static(&material, &[thickness], &bcs, None)
        .unwrap();

    // With nu = 0 the state is uniaxial with sigma = E * stretch; the edge reactions
    // carry sigma * t in total on each loaded edge
    let total: f64 = solution.force(1).x + solution.force(2).x;
    assert_scalar_eq!(total, young * stretch * thickness, comp = abs, tol = 1e-10);
    assert_scalar_eq!(
        solution.displacement(2).y,
        0.0,
        comp = abs,
        tol = 1e-12
    );
}
