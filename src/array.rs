use std::fmt::{self, Display};

use log::{debug, trace};

use crate::{
    error::{ConstructionError, Error, OrderViolation},
    point::{same_x, FunctionPoint},
    traits::TabulatedFunction,
    util::{check_order, check_sorted, fmt_points, interpolate, uniform_grid},
};

// free slots reserved on construction
const HEADROOM: usize = 5;

/// Tabulated function with points in contiguous storage
///
/// Random access is O(1), insertion and deletion shift the following
/// points. Storage grows by doubling once the reserved slots are used up.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayTabulatedFunction {
    points: Vec<FunctionPoint>,
}

impl ArrayTabulatedFunction {
    /// `points_count` equidistant points on `[left_x, right_x]` with y = 0
    pub fn new(
        left_x: f64,
        right_x: f64,
        points_count: usize,
    ) -> Result<Self, ConstructionError> {
        let xs = uniform_grid(left_x, right_x, points_count)?;
        debug!("Array table with {points_count} points on [{left_x}, {right_x}]");
        let mut points = Vec::with_capacity(points_count + HEADROOM);
        points.extend(xs.into_iter().map(|x| FunctionPoint::new(x, 0.)));
        Ok(Self { points })
    }

    /// Equidistant points on `[left_x, right_x]` with the given y values
    pub fn with_values(
        left_x: f64,
        right_x: f64,
        values: &[f64],
    ) -> Result<Self, ConstructionError> {
        let xs = uniform_grid(left_x, right_x, values.len())?;
        debug!(
            "Array table with {} points on [{left_x}, {right_x}]",
            values.len()
        );
        let mut points = Vec::with_capacity(values.len() + HEADROOM);
        points.extend(xs.into_iter().zip(values).map(|(x, &y)| FunctionPoint::new(x, y)));
        Ok(Self { points })
    }

    /// Table from explicit points, which have to be strictly ordered by x
    pub fn from_points(
        mut points: Vec<FunctionPoint>,
    ) -> Result<Self, ConstructionError> {
        check_sorted(&points)?;
        debug!("Array table from {} points", points.len());
        points.reserve_exact(HEADROOM);
        Ok(Self { points })
    }

    /// Iterator over copies of the points
    pub fn iter(&self) -> impl Iterator<Item = FunctionPoint> + '_ {
        self.points.iter().copied()
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(Error::Index {
                index,
                count: self.points.len(),
            })
        }
    }

    fn check_order(&self, index: usize, x: f64) -> Result<(), Error> {
        let previous = index.checked_sub(1).map(|i| self.points[i].x());
        let next = self.points.get(index + 1).map(|pt| pt.x());
        check_order(x, previous, next).map_err(|err| {
            trace!("Rejecting x = {x} at index {index}: {err}");
            err.into()
        })
    }

    fn first(&self) -> &FunctionPoint {
        // a table never has fewer than two points
        &self.points[0]
    }

    fn last(&self) -> &FunctionPoint {
        &self.points[self.points.len() - 1]
    }
}

impl TabulatedFunction for ArrayTabulatedFunction {
    fn left_domain_border(&self) -> f64 {
        self.first().x()
    }

    fn right_domain_border(&self) -> f64 {
        self.last().x()
    }

    fn value(&self, x: f64) -> f64 {
        if !(self.left_domain_border() <= x && x <= self.right_domain_border()) {
            return f64::NAN;
        }
        // first point with x coordinate not below `x`
        let idx = self.points.partition_point(|pt| pt.x() < x);
        let rhs = &self.points[idx];
        if idx == 0 {
            return rhs.y();
        }
        interpolate(&self.points[idx - 1], rhs, x)
    }

    fn points_count(&self) -> usize {
        self.points.len()
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, Error> {
        self.check_index(index)?;
        Ok(self.points[index])
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), Error> {
        self.check_index(index)?;
        self.check_order(index, point.x())?;
        trace!("Replacing point {index} by {point}");
        self.points[index] = point;
        Ok(())
    }

    fn point_x(&self, index: usize) -> Result<f64, Error> {
        self.check_index(index)?;
        Ok(self.points[index].x())
    }

    fn point_y(&self, index: usize) -> Result<f64, Error> {
        self.check_index(index)?;
        Ok(self.points[index].y())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), Error> {
        self.check_index(index)?;
        self.check_order(index, x)?;
        trace!("Setting x of point {index} to {x}");
        self.points[index].set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), Error> {
        self.check_index(index)?;
        trace!("Setting y of point {index} to {y}");
        self.points[index].set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), Error> {
        self.check_index(index)?;
        let count = self.points.len();
        if count < 3 {
            trace!("Refusing to delete from table with {count} points");
            return Err(Error::State { count });
        }
        let removed = self.points.remove(index);
        debug!("Deleted point {index}: {removed}");
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), Error> {
        let x = point.x();
        if x.is_nan() {
            return Err(OrderViolation::NotANumber.into());
        }
        let idx = self.points.partition_point(|pt| pt.x() < x);
        let lhs = idx.checked_sub(1).map(|i| &self.points[i]);
        let rhs = self.points.get(idx);
        if lhs.into_iter().chain(rhs).any(|pt| same_x(pt.x(), x)) {
            trace!("Rejecting duplicate point {point}");
            return Err(OrderViolation::Duplicate { x }.into());
        }
        if self.points.len() == self.points.capacity() {
            let additional = self.points.capacity();
            trace!("Growing storage by {additional}");
            self.points.reserve_exact(additional);
        }
        self.points.insert(idx, point);
        debug!("Inserted point {point} at index {idx}");
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.points.clone()
    }
}

impl TryFrom<Vec<FunctionPoint>> for ArrayTabulatedFunction {
    type Error = ConstructionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl Display for ArrayTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}
