use std::fmt;

use crate::{
    error::{ConstructionError, OrderViolation},
    point::{same_x, FunctionPoint},
};

/// x coordinates of `n` equidistant points spanning `[left, right]`
///
/// The first and last coordinate are exactly `left` and `right`.
/// Fails if neighbouring points would not be separated by [TOLERANCE].
///
/// [TOLERANCE]: crate::TOLERANCE
pub(crate) fn uniform_grid(
    left: f64,
    right: f64,
    n: usize,
) -> Result<Vec<f64>, ConstructionError> {
    if !(left.is_finite() && right.is_finite() && left < right) {
        return Err(ConstructionError::InvalidDomain { left, right });
    }
    if n < 2 {
        return Err(ConstructionError::TooFewPoints(n));
    }
    let last = n - 1;
    // `right - left` can overflow
    let step = right / last as f64 - left / last as f64;
    // step from the nearer border so that `i * step` stays below the span
    let xs: Vec<f64> = (0..n)
        .map(|i| {
            if i <= last / 2 {
                left + i as f64 * step
            } else {
                right - (last - i) as f64 * step
            }
        })
        .collect();
    let too_dense = xs
        .windows(2)
        .any(|pair| !(pair[0] < pair[1]) || same_x(pair[0], pair[1]));
    if too_dense {
        return Err(ConstructionError::TooDense { left, right, count: n });
    }
    Ok(xs)
}

pub(crate) fn check_sorted(pts: &[FunctionPoint]) -> Result<(), ConstructionError> {
    if pts.len() < 2 {
        return Err(ConstructionError::TooFewPoints(pts.len()));
    }
    for (index, pair) in pts.windows(2).enumerate() {
        let [lhs, rhs] = [pair[0], pair[1]];
        if !(lhs.x() < rhs.x()) || lhs.same_x(&rhs) {
            return Err(ConstructionError::Unordered { index: index + 1 });
        }
    }
    Ok(())
}

/// Check that `x` fits strictly between the neighbouring x coordinates
pub(crate) fn check_order(
    x: f64,
    previous: Option<f64>,
    next: Option<f64>,
) -> Result<(), OrderViolation> {
    if x.is_nan() {
        return Err(OrderViolation::NotANumber);
    }
    if let Some(previous) = previous {
        if x <= previous || same_x(x, previous) {
            return Err(OrderViolation::NotAfterPrevious { x, previous });
        }
    }
    if let Some(next) = next {
        if x >= next || same_x(x, next) {
            return Err(OrderViolation::NotBeforeNext { x, next });
        }
    }
    Ok(())
}

/// Linear interpolation between `lhs` and `rhs` with `lhs.x() <= x <= rhs.x()`
pub(crate) fn interpolate(lhs: &FunctionPoint, rhs: &FunctionPoint, x: f64) -> f64 {
    debug_assert!(lhs.x() <= x && x <= rhs.x());
    // hit the stored values exactly at the interval borders
    if x == rhs.x() {
        return rhs.y();
    }
    if x == lhs.x() {
        return lhs.y();
    }
    lhs.y() + (rhs.y() - lhs.y()) * (x - lhs.x()) / (rhs.x() - lhs.x())
}

pub(crate) fn fmt_points(
    pts: impl IntoIterator<Item = FunctionPoint>,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    for pt in pts {
        fmt::Display::fmt(&pt, f)?;
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid() {
        assert_eq!(uniform_grid(0., 4., 5).unwrap(), [0., 1., 2., 3., 4.]);
        assert_eq!(uniform_grid(-1., 1., 2).unwrap(), [-1., 1.]);
        let expected: Vec<_> = (0..10).map(f64::from).collect();
        assert_eq!(uniform_grid(0., 9., 10).unwrap(), expected);
    }

    #[test]
    fn grid_extreme_borders() {
        assert_eq!(uniform_grid(-1e308, 1e308, 3).unwrap(), [-1e308, 0., 1e308]);
        let max = f64::MAX;
        assert_eq!(
            uniform_grid(-max, max, 5).unwrap(),
            [-max, -max / 2., 0., max / 2., max]
        );
        let xs = uniform_grid(-max, max, 1000).unwrap();
        assert_eq!(xs[0], -max);
        assert_eq!(xs[999], max);
        assert!(xs.iter().all(|x| x.is_finite()));
        assert!(xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn grid_last_point_exact() {
        let xs = uniform_grid(0.1, 0.7, 7).unwrap();
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[6], 0.7);
    }

    #[test]
    fn bad_grid() {
        use ConstructionError::*;
        assert_eq!(
            uniform_grid(10., 0., 5).err(),
            Some(InvalidDomain { left: 10., right: 0. })
        );
        assert_eq!(
            uniform_grid(1., 1., 5).err(),
            Some(InvalidDomain { left: 1., right: 1. })
        );
        assert!(uniform_grid(f64::NAN, 1., 5).is_err());
        assert!(uniform_grid(0., f64::INFINITY, 5).is_err());
        assert_eq!(uniform_grid(0., 10., 1).err(), Some(TooFewPoints(1)));
        assert_eq!(uniform_grid(0., 10., 0).err(), Some(TooFewPoints(0)));
    }

    #[test]
    fn grid_below_tolerance() {
        use ConstructionError::*;
        assert_eq!(
            uniform_grid(0., 1e-9, 101).err(),
            Some(TooDense { left: 0., right: 1e-9, count: 101 })
        );
        assert_eq!(
            uniform_grid(0., 5e-11, 2).err(),
            Some(TooDense { left: 0., right: 5e-11, count: 2 })
        );
        assert_eq!(uniform_grid(0., 1e-8, 11).unwrap().len(), 11);
        // neighbours collapse in floating point
        assert!(uniform_grid(1e20, 1e20 + 1e5, 1_000_000).is_err());
    }

    #[test]
    fn sorted() {
        let pts = |xs: &[f64]| -> Vec<_> {
            xs.iter().map(|&x| FunctionPoint::new(x, 0.)).collect()
        };
        assert!(check_sorted(&pts(&[0., 1., 3.])).is_ok());
        assert_eq!(
            check_sorted(&pts(&[0.])),
            Err(ConstructionError::TooFewPoints(1))
        );
        assert_eq!(
            check_sorted(&pts(&[0., 2., 1.])),
            Err(ConstructionError::Unordered { index: 2 })
        );
        assert_eq!(
            check_sorted(&pts(&[0., 1e-12])),
            Err(ConstructionError::Unordered { index: 1 })
        );
        assert_eq!(
            check_sorted(&pts(&[0., f64::NAN])),
            Err(ConstructionError::Unordered { index: 1 })
        );
    }

    #[test]
    fn order() {
        assert!(check_order(1., Some(0.), Some(2.)).is_ok());
        assert!(check_order(1., None, None).is_ok());
        assert_eq!(
            check_order(0., Some(0.), None),
            Err(OrderViolation::NotAfterPrevious { x: 0., previous: 0. })
        );
        assert_eq!(
            check_order(2. - 1e-11, None, Some(2.)),
            Err(OrderViolation::NotBeforeNext { x: 2. - 1e-11, next: 2. })
        );
        assert_eq!(
            check_order(f64::NAN, Some(0.), Some(1.)),
            Err(OrderViolation::NotANumber)
        );
    }

    #[test]
    fn interpolation() {
        let lhs = FunctionPoint::new(1., 0.1);
        let rhs = FunctionPoint::new(3., 0.7);
        assert_eq!(interpolate(&lhs, &rhs, 1.), 0.1);
        assert_eq!(interpolate(&lhs, &rhs, 3.), 0.7);
        assert!((interpolate(&lhs, &rhs, 2.) - 0.4).abs() < 1e-14);
    }
}
