use thiserror::Error;

/// Errors raised by tabulated functions
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Cannot construct tabulated function: {0}")]
    Construction(#[from] ConstructionError),
    #[error("Index {index} out of bounds [0, {}]", .count.saturating_sub(1))]
    Index { index: usize, count: usize },
    #[error("Inappropriate point: {0}")]
    Order(#[from] OrderViolation),
    #[error("Cannot delete a point: only {count} points left, at least 3 are required")]
    State { count: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Construction(_) => ErrorKind::Construction,
            Error::Index { .. } => ErrorKind::Index,
            Error::Order(_) => ErrorKind::Order,
            Error::State { .. } => ErrorKind::State,
        }
    }
}

/// Coarse classification of an [Error]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ErrorKind {
    /// Invalid constructor arguments
    Construction,
    /// Index outside `[0, count - 1]`
    Index,
    /// Write would break the strict ordering of x coordinates
    Order,
    /// Deletion would leave fewer than 2 points
    State,
}

#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ConstructionError {
    #[error("left border {left} is not smaller than right border {right}")]
    InvalidDomain { left: f64, right: f64 },
    #[error("{0} points given, at least 2 are required")]
    TooFewPoints(usize),
    #[error("{count} equidistant points on [{left}, {right}] are closer than the tolerance")]
    TooDense { left: f64, right: f64, count: usize },
    #[error("point {index} does not lie strictly right of its predecessor")]
    Unordered { index: usize },
}

#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum OrderViolation {
    #[error("x = {x} has to be larger than x = {previous} of the previous point")]
    NotAfterPrevious { x: f64, previous: f64 },
    #[error("x = {x} has to be smaller than x = {next} of the next point")]
    NotBeforeNext { x: f64, next: f64 },
    #[error("a point with x = {x} already exists")]
    Duplicate { x: f64 },
    #[error("x is not a number")]
    NotANumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let err: Error = ConstructionError::TooFewPoints(1).into();
        assert_eq!(err.kind(), ErrorKind::Construction);
        let err: Error = OrderViolation::Duplicate { x: 1. }.into();
        assert_eq!(err.kind(), ErrorKind::Order);
        assert_eq!(Error::Index { index: 3, count: 2 }.kind(), ErrorKind::Index);
        assert_eq!(Error::State { count: 2 }.kind(), ErrorKind::State);
    }

    #[test]
    fn messages() {
        let err = Error::Index { index: 10, count: 3 };
        assert_eq!(err.to_string(), "Index 10 out of bounds [0, 2]");
        let err = Error::Index { index: 0, count: 0 };
        assert_eq!(err.to_string(), "Index 0 out of bounds [0, 0]");
        let err: Error = OrderViolation::Duplicate { x: 5. }.into();
        assert_eq!(
            err.to_string(),
            "Inappropriate point: a point with x = 5 already exists"
        );
    }
}
