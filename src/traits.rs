use crate::{error::Error, point::FunctionPoint};

pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

/// A function known only through a finite set of samples `(x, y)`
///
/// The samples are kept strictly ordered by their x coordinates, no two
/// x coordinates agree within [TOLERANCE](crate::TOLERANCE), and there
/// are always at least two samples. Every operation preserves these
/// invariants; writes that would break them fail and leave the table
/// unchanged.
///
/// Points are exchanged by value: getters return copies and setters
/// store copies.
pub trait TabulatedFunction {
    /// x coordinate of the first point
    fn left_domain_border(&self) -> f64;

    /// x coordinate of the last point
    fn right_domain_border(&self) -> f64;

    /// Value at `x` from linear interpolation between the enclosing points
    ///
    /// Returns NaN for `x` outside the domain.
    fn value(&self, x: f64) -> f64;

    fn points_count(&self) -> usize;

    fn point(&self, index: usize) -> Result<FunctionPoint, Error>;

    /// Replace the point at `index`
    ///
    /// The new x coordinate has to lie strictly between the x
    /// coordinates of the neighbouring points.
    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), Error>;

    fn point_x(&self, index: usize) -> Result<f64, Error> {
        self.point(index).map(|pt| pt.x())
    }

    fn point_y(&self, index: usize) -> Result<f64, Error> {
        self.point(index).map(|pt| pt.y())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), Error>;

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), Error>;

    /// Remove the point at `index`
    ///
    /// Fails with [Error::State] if fewer than three points are left.
    fn delete_point(&mut self, index: usize) -> Result<(), Error>;

    /// Insert a point at the position given by its x coordinate
    ///
    /// Points outside the current domain extend it. Fails if the table
    /// already has a point with the same x coordinate.
    fn add_point(&mut self, point: FunctionPoint) -> Result<(), Error>;

    /// Copies of all points in ascending order
    fn points(&self) -> Vec<FunctionPoint>;
}

impl<F: TabulatedFunction + ?Sized> Eval<f64> for F {
    type Output = f64;

    fn eval(&self, x: &f64) -> Self::Output {
        self.value(*x)
    }
}
