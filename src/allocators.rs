//! Trait aliases for common allocator bound combinations.
use nalgebra::allocator::Allocator;
use nalgebra::{DimName, Dyn, Scalar};

/// Allocator capability for owned matrices and vectors tied to a single small dimension `D`.
pub trait SmallDimAllocator<T: Scalar, D: DimName>:
    Allocator<T, D>
    + Allocator<T, D, D>
    + Allocator<T, D, Dyn>
    + Allocator<T, Dyn, D>
    + Allocator<(usize, usize), D>
{
}

impl<T: Scalar, D: DimName, A> SmallDimAllocator<T, D> for A where
    A: Allocator<T, D>
        + Allocator<T, D, D>
        + Allocator<T, D, Dyn>
        + Allocator<T, Dyn, D>
        + Allocator<(usize, usize), D>
{
}

/// Allocator capability covering all dimensions associated with a structural family:
/// the geometry dimension `D`, the reference dimension `R` and the strain dimension `S`.
pub trait FamilyAllocator<T: Scalar, D: DimName, R: DimName, S: DimName>:
    SmallDimAllocator<T, D> + SmallDimAllocator<T, R> + SmallDimAllocator<T, S>
{
}

impl<T: Scalar, D: DimName, R: DimName, S: DimName, A> FamilyAllocator<T, D, R, S> for A where
    A: SmallDimAllocator<T, D> + SmallDimAllocator<T, R> + SmallDimAllocator<T, S>
{
}
