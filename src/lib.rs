//! Tabulated functions
//!
//! A tabulated function is a finite set of samples `(x, y)` of an
//! otherwise unknown function, strictly ordered by x. Values between
//! samples are obtained by linear interpolation. Samples can be added,
//! removed and modified as long as the ordering is preserved.
//!
//! Two storage strategies implement the common [TabulatedFunction]
//! trait: [ArrayTabulatedFunction] with contiguous storage and
//! [LinkedListTabulatedFunction] (feature `linked`) with a linked list.
//!
//! ```
//! use tabulated::{ArrayTabulatedFunction, FunctionPoint, TabulatedFunction};
//!
//! let mut f = ArrayTabulatedFunction::with_values(0., 4., &[0., 1., 4., 9., 16.])?;
//! assert_eq!(f.value(0.5), 0.5);
//! assert!(f.value(5.).is_nan());
//!
//! f.add_point(FunctionPoint::new(1.5, 2.25))?;
//! assert_eq!(f.point(2)?, FunctionPoint::new(1.5, 2.25));
//! assert!(f.add_point(FunctionPoint::new(1.5, 0.)).is_err());
//! # Ok::<(), tabulated::Error>(())
//! ```

/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
mod array;
mod error;
#[cfg(feature = "linked")]
mod linked;
mod point;
pub mod traits;
mod util;

pub use array::ArrayTabulatedFunction;
pub use error::{ConstructionError, Error, ErrorKind, OrderViolation};
#[cfg(feature = "linked")]
pub use linked::{Iter as LinkedListIter, LinkedListTabulatedFunction};
pub use point::{FunctionPoint, TOLERANCE};
pub use traits::{Eval, TabulatedFunction};
