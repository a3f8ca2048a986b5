//! Problem definition: topology, boundary data and the solve entry points.

use log::debug;
use nalgebra::allocator::Allocator;
use nalgebra::{DMatrix, DVector, DefaultAllocator, DimName, Dyn, OMatrix, OVector, RealField, U1, U2, U3};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::allocators::FamilyAllocator;
use crate::assembly::global::{scatter_element_matrix, scatter_element_vector};
use crate::assembly::local::{
    assemble_element_inelastic_force, assemble_element_stiffness, compute_element_measure,
};
use crate::element::{LineElement, PlanarElement, SolidElement};
use crate::error::{GeometryError, ModelError, SolveError};
use crate::family::{ElasticFamily, PlanarFamily, SolidFamily, TrussFamily};
use crate::material::ConstitutiveModel;
use crate::mesh::{Mesh, Mesh2d, Mesh3d};
use crate::solve::solve_linear_static;

/// Per-DOF boundary data: external forces, prescribed displacements and constraint flags.
///
/// All three arrays are laid out node-by-node with spatial components interleaved, i.e.
/// the DOF of node `i` along axis `k` has index `i * dim + k`. A constraint flag of `true`
/// means the displacement at that DOF is prescribed rather than solved for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct BoundaryConditions<T: RealField, D: DimName> {
    forces: DVector<T>,
    prescribed: DVector<T>,
    constrained: Vec<bool>,
    #[serde(skip)]
    marker: PhantomData<D>,
}

impl<T, D> BoundaryConditions<T, D>
where
    T: RealField,
    D: DimName,
    DefaultAllocator: Allocator<T, D>,
{
    /// Creates boundary data for the given number of nodes: zero forces, zero prescribed
    /// displacements and no constraints.
    pub fn new(num_nodes: usize) -> Self {
        let num_dofs = num_nodes * D::dim();
        Self {
            forces: DVector::zeros(num_dofs),
            prescribed: DVector::zeros(num_dofs),
            constrained: vec![false; num_dofs],
            marker: PhantomData,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.constrained.len() / D::dim()
    }

    /// Sets the external force vector applied at a node.
    pub fn set_force(&mut self, node: usize, force: &OVector<T, D>) {
        for k in 0..D::dim() {
            self.forces[node * D::dim() + k] = force[k].clone();
        }
    }

    /// Prescribes the displacement of a single DOF.
    pub fn constrain_dof(&mut self, node: usize, axis: usize, value: T) {
        assert!(axis < D::dim(), "axis out of bounds");
        let dof = node * D::dim() + axis;
        self.constrained[dof] = true;
        self.prescribed[dof] = value;
    }

    /// Prescribes the displacement of all DOFs of a node.
    pub fn constrain_node(&mut self, node: usize, value: &OVector<T, D>) {
        for k in 0..D::dim() {
            self.constrain_dof(node, k, value[k].clone());
        }
    }

    pub fn forces(&self) -> &DVector<T> {
        &self.forces
    }

    pub fn prescribed(&self) -> &DVector<T> {
        &self.prescribed
    }

    pub fn constrained(&self) -> &[bool] {
        &self.constrained
    }
}

/// The equilibrium displacement and force fields of a solved problem, in node-by-dimension
/// layout.
///
/// The force field is `f = K u`: at constrained DOFs it contains the reaction forces, at
/// free DOFs it reproduces the applied external force (plus the inelastic force, when an
/// inelastic strain field was given) and thereby serves as a consistency check.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSolution<T: RealField, D: DimName>
where
    DefaultAllocator: Allocator<T, D>,
{
    displacements: Vec<OVector<T, D>>,
    forces: Vec<OVector<T, D>>,
}

impl<T, D> StaticSolution<T, D>
where
    T: RealField,
    D: DimName,
    DefaultAllocator: Allocator<T, D>,
{
    fn from_flat(displacements: DVector<T>, forces: DVector<T>) -> Self {
        let reshape = |flat: &DVector<T>| {
            (0..flat.len() / D::dim())
                .map(|i| {
                    OVector::<T, D>::from_fn_generic(D::name(), U1::name(), |k, _| {
                        flat[i * D::dim() + k].clone()
                    })
                })
                .collect()
        };
        Self {
            displacements: reshape(&displacements),
            forces: reshape(&forces),
        }
    }

    pub fn displacements(&self) -> &[OVector<T, D>] {
        &self.displacements
    }

    pub fn forces(&self) -> &[OVector<T, D>] {
        &self.forces
    }

    pub fn displacement(&self, node: usize) -> &OVector<T, D> {
        &self.displacements[node]
    }

    pub fn force(&self, node: usize) -> &OVector<T, D> {
        &self.forces[node]
    }

    /// The displacement field as a flat DOF vector.
    pub fn flat_displacements(&self) -> DVector<T> {
        flatten(&self.displacements)
    }

    /// The force field as a flat DOF vector.
    pub fn flat_forces(&self) -> DVector<T> {
        flatten(&self.forces)
    }
}

fn flatten<T, D>(field: &[OVector<T, D>]) -> DVector<T>
where
    T: RealField,
    D: DimName,
    DefaultAllocator: Allocator<T, D>,
{
    DVector::from_iterator(
        field.len() * D::dim(),
        field.iter().flat_map(|v| v.iter().cloned()),
    )
}

/// A linear elastostatic problem over a fixed mesh topology.
///
/// The node set, connectivity and derived DOF index maps are fixed at construction.
/// Everything else (section properties, constitutive tangents, boundary data, inelastic
/// strains) is passed explicitly into the assembly and solve methods, which recompute
/// their results from scratch on every call.
#[derive(Debug, Clone)]
pub struct ElasticProblem<T, F>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    mesh: Mesh<T, F::GeometryDim>,
    family: F,
    dof_indices: Vec<Vec<usize>>,
}

/// A truss problem in 2D space.
pub type TrussProblem2d<T> = ElasticProblem<T, TrussFamily<U2>>;
/// A truss problem in 3D space.
pub type TrussProblem3d<T> = ElasticProblem<T, TrussFamily<U3>>;
/// A planar continuum problem.
pub type PlanarProblem<T> = ElasticProblem<T, PlanarFamily>;
/// A solid continuum problem.
pub type SolidProblem<T> = ElasticProblem<T, SolidFamily>;

fn first_arity(connectivity: &[Vec<usize>]) -> Result<usize, ModelError> {
    connectivity
        .first()
        .map(|element| element.len())
        .ok_or(ModelError::EmptyConnectivity)
}

impl<T> TrussProblem2d<T>
where
    T: RealField,
{
    /// Constructs a 2D truss problem, selecting the line element variant from the node
    /// count of the first element.
    pub fn truss_2d(mesh: Mesh2d<T>) -> Result<Self, ModelError> {
        let arity = first_arity(mesh.connectivity())?;
        let element =
            LineElement::from_arity(arity).ok_or(ModelError::UnsupportedArity { arity })?;
        Self::with_family(mesh, TrussFamily::new(element))
    }
}

impl<T> TrussProblem3d<T>
where
    T: RealField,
{
    /// Constructs a 3D truss problem, selecting the line element variant from the node
    /// count of the first element.
    pub fn truss_3d(mesh: Mesh3d<T>) -> Result<Self, ModelError> {
        let arity = first_arity(mesh.connectivity())?;
        let element =
            LineElement::from_arity(arity).ok_or(ModelError::UnsupportedArity { arity })?;
        Self::with_family(mesh, TrussFamily::new(element))
    }
}

impl<T> PlanarProblem<T>
where
    T: RealField,
{
    /// Constructs a planar continuum problem, selecting the element variant from the node
    /// count of the first element.
    pub fn planar(mesh: Mesh2d<T>) -> Result<Self, ModelError> {
        let arity = first_arity(mesh.connectivity())?;
        let element =
            PlanarElement::from_arity(arity).ok_or(ModelError::UnsupportedArity { arity })?;
        Self::with_family(mesh, PlanarFamily::new(element))
    }
}

impl<T> SolidProblem<T>
where
    T: RealField,
{
    /// Constructs a solid continuum problem, selecting the element variant from the node
    /// count of the first element.
    pub fn solid(mesh: Mesh3d<T>) -> Result<Self, ModelError> {
        let arity = first_arity(mesh.connectivity())?;
        let element =
            SolidElement::from_arity(arity).ok_or(ModelError::UnsupportedArity { arity })?;
        Self::with_family(mesh, SolidFamily::new(element))
    }
}

impl<T, F> ElasticProblem<T, F>
where
    T: RealField,
    F: ElasticFamily<T>,
    DefaultAllocator: FamilyAllocator<T, F::GeometryDim, F::ReferenceDim, F::StrainDim>,
{
    /// Constructs a problem from a mesh and an already selected family.
    ///
    /// Validates that every element has the family's node count and references only
    /// existing vertices, and precomputes the per-element global DOF index maps used by
    /// every assembly pass.
    pub fn with_family(mesh: Mesh<T, F::GeometryDim>, family: F) -> Result<Self, ModelError> {
        let arity = family.num_nodes();
        let dim = F::GeometryDim::dim();
        for (j, element) in mesh.connectivity().iter().enumerate() {
            if element.len() != arity {
                return Err(ModelError::MixedArity {
                    element: j,
                    expected: arity,
                    found: element.len(),
                });
            }
            for &index in element {
                if index >= mesh.num_vertices() {
                    return Err(ModelError::NodeIndexOutOfBounds { element: j, index });
                }
            }
        }
        let dof_indices = mesh
            .connectivity()
            .iter()
            .map(|element| {
                element
                    .iter()
                    .flat_map(|&node| (0..dim).map(move |k| node * dim + k))
                    .collect()
            })
            .collect();
        Ok(Self {
            mesh,
            family,
            dof_indices,
        })
    }

    pub fn mesh(&self) -> &Mesh<T, F::GeometryDim> {
        &self.mesh
    }

    pub fn family(&self) -> &F {
        &self.family
    }

    pub fn num_nodes(&self) -> usize {
        self.mesh.num_vertices()
    }

    pub fn num_elements(&self) -> usize {
        self.mesh.num_elements()
    }

    pub fn num_dofs(&self) -> usize {
        self.num_nodes() * F::GeometryDim::dim()
    }

    /// The global DOF indices of the given element, in local DOF order.
    pub fn global_dof_indices(&self, element_index: usize) -> &[usize] {
        &self.dof_indices[element_index]
    }

    /// The node coordinates of the given element, one column per node.
    pub fn element_coordinates(&self, element_index: usize) -> OMatrix<T, F::GeometryDim, Dyn> {
        let element = &self.mesh.connectivity()[element_index];
        let mut coords = OMatrix::<T, F::GeometryDim, Dyn>::zeros_generic(
            F::GeometryDim::name(),
            Dyn(element.len()),
        );
        for (k, &node) in element.iter().enumerate() {
            coords.set_column(k, &self.mesh.vertices()[node].coords);
        }
        coords
    }

    /// Assembles the global stiffness matrix from the given material and section
    /// properties.
    ///
    /// # Panics
    ///
    /// Panics if `sections` does not have one entry per element.
    pub fn assemble_stiffness<M>(
        &self,
        material: &M,
        sections: &[T],
    ) -> Result<DMatrix<T>, GeometryError>
    where
        M: ConstitutiveModel<T, F::StrainDim>,
    {
        assert_eq!(
            sections.len(),
            self.num_elements(),
            "one section property per element is required"
        );
        debug!(
            "assembling stiffness: {} elements, {} dofs",
            self.num_elements(),
            self.num_dofs()
        );
        let mut stiffness = DMatrix::zeros(self.num_dofs(), self.num_dofs());
        for j in 0..self.num_elements() {
            let coords = self.element_coordinates(j);
            let tangent = material.tangent(j);
            let element_stiffness = assemble_element_stiffness(
                &self.family,
                &coords,
                &tangent,
                sections[j].clone(),
                j,
            )?;
            scatter_element_matrix(&mut stiffness, &element_stiffness, &self.dof_indices[j]);
        }
        Ok(stiffness)
    }

    /// Assembles the global inelastic force vector from the given per-element inelastic
    /// (eigen) strains.
    ///
    /// # Panics
    ///
    /// Panics if `sections` or `strains` do not have one entry per element.
    pub fn assemble_inelastic_forces<M>(
        &self,
        material: &M,
        sections: &[T],
        strains: &[OVector<T, F::StrainDim>],
    ) -> Result<DVector<T>, GeometryError>
    where
        M: ConstitutiveModel<T, F::StrainDim>,
    {
        assert_eq!(
            sections.len(),
            self.num_elements(),
            "one section property per element is required"
        );
        assert_eq!(
            strains.len(),
            self.num_elements(),
            "one inelastic strain per element is required"
        );
        let mut forces = DVector::zeros(self.num_dofs());
        for j in 0..self.num_elements() {
            let coords = self.element_coordinates(j);
            let tangent = material.tangent(j);
            let element_force = assemble_element_inelastic_force(
                &self.family,
                &coords,
                &tangent,
                sections[j].clone(),
                &strains[j],
                j,
            )?;
            scatter_element_vector(&mut forces, &element_force, &self.dof_indices[j]);
        }
        Ok(forces)
    }

    /// The measure (length, area or volume) of every element.
    pub fn element_measures(&self) -> Result<DVector<T>, GeometryError> {
        let mut measures = DVector::zeros(self.num_elements());
        for j in 0..self.num_elements() {
            let coords = self.element_coordinates(j);
            measures[j] = compute_element_measure(&self.family, &coords, j)?;
        }
        Ok(measures)
    }

    /// Assembles and solves the linear static equilibrium problem.
    ///
    /// Stiffness and force are recomputed from scratch from the current inputs; nothing
    /// is cached between calls.
    ///
    /// # Panics
    ///
    /// Panics if the boundary data or the field slices are not sized to this problem.
    pub fn solve_static<M>(
        &self,
        material: &M,
        sections: &[T],
        boundary_conditions: &BoundaryConditions<T, F::GeometryDim>,
        inelastic_strains: Option<&[OVector<T, F::StrainDim>]>,
    ) -> Result<StaticSolution<T, F::GeometryDim>, SolveError>
    where
        M: ConstitutiveModel<T, F::StrainDim>,
    {
        assert_eq!(
            boundary_conditions.num_nodes(),
            self.num_nodes(),
            "boundary conditions must cover every node"
        );
        let stiffness = self.assemble_stiffness(material, sections)?;
        let inelastic_forces = match inelastic_strains {
            Some(strains) => self.assemble_inelastic_forces(material, sections, strains)?,
            None => DVector::zeros(self.num_dofs()),
        };
        let (displacements, forces) = solve_linear_static(
            &stiffness,
            boundary_conditions.forces(),
            &inelastic_forces,
            boundary_conditions.prescribed(),
            boundary_conditions.constrained(),
        )?;
        Ok(StaticSolution::from_flat(displacements, forces))
    }
}
