use std::fmt::{self, Display};

/// Absolute threshold below which two x coordinates are considered equal
pub const TOLERANCE: f64 = 1e-10;

pub(crate) fn same_x(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// A single sample `(x, y)` of a tabulated function
///
/// Points are plain values. Tables hand out copies and store copies,
/// so changing a point obtained from a table never affects the table.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct FunctionPoint {
    x: f64,
    y: f64,
}

impl FunctionPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Set the x coordinate
    ///
    /// No checks happen here, ordering is the business of the table
    /// the point is eventually stored in.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Whether both points share the same x coordinate up to [TOLERANCE]
    pub fn same_x(&self, other: &Self) -> bool {
        same_x(self.x, other.x)
    }
}

impl From<(f64, f64)> for FunctionPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<FunctionPoint> for (f64, f64) {
    fn from(pt: FunctionPoint) -> Self {
        (pt.x, pt.y)
    }
}

impl Display for FunctionPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        Display::fmt(&self.x, f)?;
        write!(f, ", ")?;
        Display::fmt(&self.y, f)?;
        write!(f, ")")
    }
}
