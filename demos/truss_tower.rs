//! Solves a small 2D truss tower under a lateral tip load and prints the displacement
//! and reaction fields.

use eyre::eyre;
use nalgebra::{Point2, Vector2, U2};
use statica::mesh::Mesh2d;
use statica::model::{BoundaryConditions, TrussProblem2d};
use statica_materials::Uniaxial;

fn main() -> eyre::Result<()> {
    // A stack of X-braced panels, one unit wide
    let story_height = 1.2;
    let num_stories = 4;

    let mut vertices = Vec::new();
    for story in 0..=num_stories {
        let y = story as f64 * story_height;
        vertices.push(Point2::new(0.0, y));
        vertices.push(Point2::new(1.0, y));
    }

    let mut connectivity = Vec::new();
    for story in 0..num_stories {
        let (a, b) = (2 * story, 2 * story + 1);
        let (c, d) = (a + 2, b + 2);
        // Columns, a brace pair and the top chord of the panel
        connectivity.push(vec![a, c]);
        connectivity.push(vec![b, d]);
        connectivity.push(vec![a, d]);
        connectivity.push(vec![b, c]);
        connectivity.push(vec![c, d]);
    }

    let mesh = Mesh2d::from_vertices_and_connectivity(vertices, connectivity);
    let problem = TrussProblem2d::truss_2d(mesh)?;

    let material = Uniaxial::new(210e9);
    let sections = vec![1e-4; problem.num_elements()];

    let mut bcs = BoundaryConditions::<f64, U2>::new(problem.num_nodes());
    bcs.constrain_node(0, &Vector2::zeros());
    bcs.constrain_node(1, &Vector2::zeros());
    let tip = problem.num_nodes() - 2;
    bcs.set_force(tip, &Vector2::new(10e3, 0.0));

    let solution = problem.solve_static(&material, &sections, &bcs, None)?;

    let lengths = problem.element_measures()?;
    println!(
        "tower with {} bars, total length {:.2} m",
        problem.num_elements(),
        lengths.sum()
    );
    println!(
        "tip displacement: ({:.4e}, {:.4e}) m",
        solution.displacement(tip).x,
        solution.displacement(tip).y
    );
    for support in [0usize, 1] {
        println!(
            "reaction at support {}: ({:.2}, {:.2}) N",
            support,
            solution.force(support).x,
            solution.force(support).y
        );
    }

    let total_reaction: f64 = (0..2).map(|n| solution.force(n).x).sum();
    if (total_reaction + 10e3).abs() > 1e-6 {
        return Err(eyre!("reactions do not balance the applied load"));
    }
    Ok(())
}
