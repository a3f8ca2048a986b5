use matrixcompare::assert_scalar_eq;
use nalgebra::{DVector, Point2, Vector1, Vector2, U2};
use statica::mesh::Mesh2d;
use statica::model::{BoundaryConditions, TrussProblem2d};
use statica::sensitivity::section_gradients;
use statica_materials::Uniaxial;

fn two_bar_chain() -> TrussProblem2d<f64> {
    let mesh = Mesh2d::from_vertices_and_connectivity(
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ],
        vec![vec![0, 1], vec![1, 2]],
    );
    TrussProblem2d::truss_2d(mesh).unwrap()
}

fn chain_boundary_conditions(force: f64) -> BoundaryConditions<f64, U2> {
    let mut bcs = BoundaryConditions::<f64, U2>::new(3);
    bcs.constrain_node(0, &Vector2::zeros());
    bcs.constrain_dof(1, 1, 0.0);
    bcs.constrain_dof(2, 1, 0.0);
    bcs.set_force(2, &Vector2::new(force, 0.0));
    bcs
}

/// For two bars in series, the tip displacement is `F L1 / (E A1) + F L2 / (E A2)`, so
/// the gradient with respect to each area has the closed form `-F L_j / (E A_j^2)`.
#[test]
fn chain_section_gradients_match_the_closed_form() {
    let (young, force) = (100.0, 10.0);
    let problem = two_bar_chain();
    let material = Uniaxial::new(young);
    let sections = [1.0, 2.0];
    let bcs = chain_boundary_conditions(force);

    let solution = problem
        .solve_static(&material, &sections, &bcs, None)
        .unwrap();
    // Objective: tip displacement, i.e. dL/du = e_{node 2, x}
    let mut objective_gradient = DVector::zeros(problem.num_dofs());
    objective_gradient[4] = 1.0;

    let gradients = section_gradients(
        &problem,
        &material,
        &sections,
        &bcs,
        None,
        &solution,
        &objective_gradient,
    )
    .unwrap();

    assert_eq!(gradients.len(), 2);
    assert_scalar_eq!(
        gradients[0],
        -force / (young * sections[0] * sections[0]),
        comp = abs,
        tol = 1e-10
    );
    assert_scalar_eq!(
        gradients[1],
        -force / (young * sections[1] * sections[1]),
        comp = abs,
        tol = 1e-10
    );
}

/// Central finite differences over full solves validate the adjoint gradients, including
/// the inelastic force contribution.
#[test]
fn section_gradients_match_finite_differences() {
    let (young, force) = (100.0, 10.0);
    let problem = two_bar_chain();
    let material = Uniaxial::new(young);
    let sections = [1.0, 2.0];
    let bcs = chain_boundary_conditions(force);
    let strains = vec![Vector1::new(1e-3), Vector1::new(-2e-3)];

    let solution = problem
        .solve_static(&material, &sections, &bcs, Some(&strains))
        .unwrap();
    let mut objective_gradient = DVector::zeros(problem.num_dofs());
    objective_gradient[4] = 1.0;

    let gradients = section_gradients(
        &problem,
        &material,
        &sections,
        &bcs,
        Some(&strains),
        &solution,
        &objective_gradient,
    )
    .unwrap();

    let tip_displacement = |sections: &[f64]| {
        problem
            .solve_static(&material, sections, &bcs, Some(&strains))
            .unwrap()
            .displacement(2)
            .x
    };

    let step = 1e-6;
    for j in 0..2 {
        let mut plus = sections.to_vec();
        plus[j] += step;
        let mut minus = sections.to_vec();
        minus[j] -= step;
        let finite_difference = (tip_displacement(&plus) - tip_displacement(&minus)) / (2.0 * step);
        assert_scalar_eq!(gradients[j], finite_difference, comp = abs, tol = 1e-6);
    }
}
