//! Solves a clamped rectangular plate (plane stress) under an end shear load on a
//! regular quadrilateral mesh and prints the tip deflection.

use nalgebra::{Point2, Vector2, U2};
use statica::mesh::Mesh2d;
use statica::model::{BoundaryConditions, PlanarProblem};
use statica_materials::{PlaneStress, YoungPoisson};

fn main() -> eyre::Result<()> {
    // Cantilever plate: length 4, height 1, meshed with nx * ny bilinear quads
    let (nx, ny) = (16, 4);
    let (length, height) = (4.0, 1.0);

    let mut vertices = Vec::new();
    for j in 0..=ny {
        for i in 0..=nx {
            vertices.push(Point2::new(
                length * i as f64 / nx as f64,
                height * j as f64 / ny as f64,
            ));
        }
    }
    let node = |i: usize, j: usize| j * (nx + 1) + i;

    let mut connectivity = Vec::new();
    for j in 0..ny {
        for i in 0..nx {
            connectivity.push(vec![
                node(i, j),
                node(i + 1, j),
                node(i + 1, j + 1),
                node(i, j + 1),
            ]);
        }
    }

    let mesh = Mesh2d::from_vertices_and_connectivity(vertices, connectivity);
    let problem = PlanarProblem::planar(mesh)?;

    let material = PlaneStress::new(YoungPoisson::new(70e9, 0.33));
    let thickness = vec![0.01; problem.num_elements()];

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    // Clamp the left edge, shear the right edge downwards
    for j in 0..=ny {
        bcs.constrain_node(node(0, j), &Vector2::zeros());
    }
    let shear_total = -1e4;
    for j in 0..=ny {
        let weight = if j == 0 || j == ny { 0.5 } else { 1.0 };
        bcs.set_force(
            node(nx, j),
            &Vector2::new(0.0, weight * shear_total / ny as f64),
        );
    }

    let solution = problem.solve_static(&material, &thickness, &bcs, None)?;

    let areas = problem.element_measures()?;
    println!(
        "plate with {} elements, total area {:.3} m^2",
        problem.num_elements(),
        areas.sum()
    );
    let tip = node(nx, ny / 2);
    println!(
        "tip deflection: {:.4e} m (x-drift {:.4e} m)",
        solution.displacement(tip).y,
        solution.displacement(tip).x
    );
    Ok(())
}
