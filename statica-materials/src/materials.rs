use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};
use statica::material::ConstitutiveModel;
use statica::nalgebra::{Matrix1, Matrix3, OMatrix, RealField, U1, U3, U6};

/// Isotropic elastic parameters given as Young's modulus and Poisson's ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoungPoisson<T> {
    pub young: T,
    pub poisson: T,
}

impl<T> YoungPoisson<T> {
    pub fn new(young: T, poisson: T) -> Self {
        Self { young, poisson }
    }
}

/// Isotropic elastic parameters given as the Lamé constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LameParameters<T> {
    pub mu: T,
    pub lambda: T,
}

impl<T> From<YoungPoisson<T>> for LameParameters<T>
where
    T: RealField,
{
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn from(params: YoungPoisson<T>) -> Self {
        let YoungPoisson { young, poisson } = params;
        let mu = 0.5 * young / (1.0 + poisson.clone());
        let lambda = 2.0 * mu.clone() * poisson.clone() / (1.0 - 2.0 * poisson);
        Self { mu, lambda }
    }
}

/// Uniaxial elasticity for the truss family.
///
/// The tangent is the scalar Young's modulus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uniaxial<T> {
    pub young: T,
}

impl<T> Uniaxial<T> {
    pub fn new(young: T) -> Self {
        Self { young }
    }
}

impl<T> ConstitutiveModel<T, U1> for Uniaxial<T>
where
    T: RealField,
{
    fn tangent(&self, _element_index: usize) -> Matrix1<T> {
        Matrix1::new(self.young.clone())
    }
}

/// Isotropic plane stress elasticity for the planar family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneStress<T> {
    pub parameters: YoungPoisson<T>,
}

impl<T> PlaneStress<T> {
    pub fn new(parameters: YoungPoisson<T>) -> Self {
        Self { parameters }
    }
}

impl<T> ConstitutiveModel<T, U3> for PlaneStress<T>
where
    T: RealField,
{
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn tangent(&self, _element_index: usize) -> Matrix3<T> {
        let YoungPoisson { young, poisson } = self.parameters.clone();
        let factor = young / (1.0 - poisson.clone() * poisson.clone());
        #[rustfmt::skip]
        let tangent = Matrix3::new(
            factor.clone(),                   factor.clone() * poisson.clone(), 0.0,
            factor.clone() * poisson.clone(), factor.clone(),                   0.0,
            0.0, 0.0,                         factor * 0.5 * (1.0 - poisson),
        );
        tangent
    }
}

/// Isotropic plane strain elasticity for the planar family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneStrain<T> {
    pub parameters: YoungPoisson<T>,
}

impl<T> PlaneStrain<T> {
    pub fn new(parameters: YoungPoisson<T>) -> Self {
        Self { parameters }
    }
}

impl<T> ConstitutiveModel<T, U3> for PlaneStrain<T>
where
    T: RealField,
{
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn tangent(&self, _element_index: usize) -> Matrix3<T> {
        let YoungPoisson { young, poisson } = self.parameters.clone();
        let factor = young / ((1.0 + poisson.clone()) * (1.0 - 2.0 * poisson.clone()));
        #[rustfmt::skip]
        let tangent = Matrix3::new(
            factor.clone() * (1.0 - poisson.clone()), factor.clone() * poisson.clone(), 0.0,
            factor.clone() * poisson.clone(), factor.clone() * (1.0 - poisson.clone()), 0.0,
            0.0, 0.0,                         factor * (0.5 - poisson),
        );
        tangent
    }
}

/// Isotropic elasticity for the solid family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Isotropic3d<T> {
    pub parameters: YoungPoisson<T>,
}

impl<T> Isotropic3d<T> {
    pub fn new(parameters: YoungPoisson<T>) -> Self {
        Self { parameters }
    }
}

impl<T> ConstitutiveModel<T, U6> for Isotropic3d<T>
where
    T: RealField,
{
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn tangent(&self, _element_index: usize) -> OMatrix<T, U6, U6> {
        let LameParameters { mu, lambda } = LameParameters::from(self.parameters.clone());
        let mut tangent = OMatrix::<T, U6, U6>::zeros();
        for i in 0..3 {
            for j in 0..3 {
                tangent[(i, j)] = lambda.clone();
            }
            tangent[(i, i)] = lambda.clone() + 2.0 * mu.clone();
            tangent[(i + 3, i + 3)] = mu.clone();
        }
        tangent
    }
}

/// Orthotropic plane stress elasticity with optional per-element material orientation.
///
/// The material 1-axis makes the angle `orientations[j]` (radians, counterclockwise) with
/// the global x-axis in element `j`; without orientations the material axes coincide with
/// the global axes everywhere. The orientation field may be mutated between solves, e.g.
/// as a design variable in fiber-orientation optimization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orthotropic2d<T> {
    pub young_1: T,
    pub young_2: T,
    pub poisson_12: T,
    pub shear_12: T,
    pub orientations: Option<Vec<T>>,
}

impl<T> Orthotropic2d<T>
where
    T: RealField,
{
    pub fn new(young_1: T, young_2: T, poisson_12: T, shear_12: T) -> Self {
        Self {
            young_1,
            young_2,
            poisson_12,
            shear_12,
            orientations: None,
        }
    }

    pub fn with_orientations(mut self, orientations: Vec<T>) -> Self {
        self.orientations = Some(orientations);
        self
    }

    /// The tangent in the material coordinate frame.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn material_frame_tangent(&self) -> Matrix3<T> {
        let poisson_21 = self.poisson_12.clone() * self.young_2.clone() / self.young_1.clone();
        let denominator = 1.0 - self.poisson_12.clone() * poisson_21.clone();
        #[rustfmt::skip]
        let tangent = Matrix3::new(
            self.young_1.clone() / denominator.clone(),
            self.poisson_12.clone() * self.young_2.clone() / denominator.clone(),
            0.0,
            self.poisson_12.clone() * self.young_2.clone() / denominator.clone(),
            self.young_2.clone() / denominator,
            0.0,
            0.0, 0.0, self.shear_12.clone(),
        );
        tangent
    }
}

impl<T> ConstitutiveModel<T, U3> for Orthotropic2d<T>
where
    T: RealField,
{
    fn tangent(&self, element_index: usize) -> Matrix3<T> {
        let tangent = self.material_frame_tangent();
        match &self.orientations {
            Some(orientations) => {
                rotate_plane_tangent(&tangent, orientations[element_index].clone())
            }
            None => tangent,
        }
    }
}

/// Rotates a planar constitutive tangent by the given angle (radians, counterclockwise,
/// from the global x-axis to the material 1-axis).
///
/// Uses the strain transformation in Voigt notation with engineering shear,
/// `C' = T_eps^T C T_eps`, which keeps the result symmetric by construction.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn rotate_plane_tangent<T>(tangent: &Matrix3<T>, angle: T) -> Matrix3<T>
where
    T: RealField,
{
    let c = angle.clone().cos();
    let s = angle.sin();
    let cc = c.clone() * c.clone();
    let ss = s.clone() * s.clone();
    let cs = c * s;
    #[rustfmt::skip]
    let transform = Matrix3::new(
        cc.clone(),        ss.clone(),       cs.clone(),
        ss.clone(),        cc.clone(),       -cs.clone(),
        -2.0 * cs.clone(), 2.0 * cs,         cc - ss,
    );
    transform.transpose() * tangent * transform
}
