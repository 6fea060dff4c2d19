use std::fmt::{self, Debug, Display};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::{ConstructionError, Error, OrderViolation},
    point::{same_x, FunctionPoint},
    traits::TabulatedFunction,
    util::{check_order, check_sorted, fmt_points, interpolate, uniform_grid},
};

// sentinel node, `nodes[HEAD].next` is the first and `nodes[HEAD].prev`
// the last point
const HEAD: usize = 0;

#[derive(Copy, Clone, Debug, Default)]
struct Node {
    pt: FunctionPoint,
    prev: usize,
    next: usize,
}

/// Tabulated function with points in a circular doubly linked list
///
/// Nodes live in an arena and refer to each other by index. Access by
/// index walks the list from the nearer end, so it is O(n). Insertion
/// and deletion only relink neighbours; deleted nodes are recycled.
#[derive(Clone)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    free: Vec<usize>,
    count: usize,
}

impl LinkedListTabulatedFunction {
    /// `points_count` equidistant points on `[left_x, right_x]` with y = 0
    pub fn new(
        left_x: f64,
        right_x: f64,
        points_count: usize,
    ) -> Result<Self, ConstructionError> {
        let xs = uniform_grid(left_x, right_x, points_count)?;
        debug!("List table with {points_count} points on [{left_x}, {right_x}]");
        Ok(Self::from_sorted(xs.into_iter().map(|x| FunctionPoint::new(x, 0.))))
    }

    /// Equidistant points on `[left_x, right_x]` with the given y values
    pub fn with_values(
        left_x: f64,
        right_x: f64,
        values: &[f64],
    ) -> Result<Self, ConstructionError> {
        let xs = uniform_grid(left_x, right_x, values.len())?;
        debug!(
            "List table with {} points on [{left_x}, {right_x}]",
            values.len()
        );
        Ok(Self::from_sorted(
            xs.into_iter().zip(values).map(|(x, &y)| FunctionPoint::new(x, y)),
        ))
    }

    /// Table from explicit points, which have to be strictly ordered by x
    pub fn from_points(points: Vec<FunctionPoint>) -> Result<Self, ConstructionError> {
        check_sorted(&points)?;
        debug!("List table from {} points", points.len());
        Ok(Self::from_sorted(points))
    }

    fn from_sorted(pts: impl IntoIterator<Item = FunctionPoint>) -> Self {
        let mut res = Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
            count: 0,
        };
        for pt in pts {
            res.insert_before(HEAD, pt);
        }
        res
    }

    /// Iterator over copies of the points
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            node: self.nodes[HEAD].next,
        }
    }

    fn node_ids(&self) -> impl Iterator<Item = usize> + '_ {
        let first = Some(self.nodes[HEAD].next).filter(|&n| n != HEAD);
        std::iter::successors(first, move |&n| {
            Some(self.nodes[n].next).filter(|&n| n != HEAD)
        })
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.count {
            Ok(())
        } else {
            Err(Error::Index {
                index,
                count: self.count,
            })
        }
    }

    fn node_at(&self, index: usize) -> Result<usize, Error> {
        self.check_index(index)?;
        let mut node;
        if index < self.count / 2 {
            node = self.nodes[HEAD].next;
            for _ in 0..index {
                node = self.nodes[node].next;
            }
        } else {
            node = self.nodes[HEAD].prev;
            for _ in index..(self.count - 1) {
                node = self.nodes[node].prev;
            }
        }
        Ok(node)
    }

    fn check_order(&self, node: usize, x: f64) -> Result<(), Error> {
        let Node { prev, next, .. } = self.nodes[node];
        let previous = (prev != HEAD).then(|| self.nodes[prev].pt.x());
        let next = (next != HEAD).then(|| self.nodes[next].pt.x());
        check_order(x, previous, next).map_err(|err| {
            trace!("Rejecting x = {x}: {err}");
            err.into()
        })
    }

    fn insert_before(&mut self, next: usize, pt: FunctionPoint) -> usize {
        let prev = self.nodes[next].prev;
        let node = Node { pt, prev, next };
        let id = if let Some(id) = self.free.pop() {
            self.nodes[id] = node;
            id
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };
        self.nodes[prev].next = id;
        self.nodes[next].prev = id;
        self.count += 1;
        id
    }

    fn unlink(&mut self, node: usize) -> FunctionPoint {
        debug_assert_ne!(node, HEAD);
        let Node { pt, prev, next } = self.nodes[node];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.free.push(node);
        self.count -= 1;
        pt
    }

    fn first(&self) -> &FunctionPoint {
        &self.nodes[self.nodes[HEAD].next].pt
    }

    fn last(&self) -> &FunctionPoint {
        &self.nodes[self.nodes[HEAD].prev].pt
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
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
        self.iter()
            .tuple_windows()
            .find(|(_, rhs)| x <= rhs.x())
            .map(|(lhs, rhs)| interpolate(&lhs, &rhs, x))
            .unwrap_or(f64::NAN)
    }

    fn points_count(&self) -> usize {
        self.count
    }

    fn point(&self, index: usize) -> Result<FunctionPoint, Error> {
        let node = self.node_at(index)?;
        Ok(self.nodes[node].pt)
    }

    fn set_point(&mut self, index: usize, point: FunctionPoint) -> Result<(), Error> {
        let node = self.node_at(index)?;
        self.check_order(node, point.x())?;
        trace!("Replacing point {index} by {point}");
        self.nodes[node].pt = point;
        Ok(())
    }

    fn set_point_x(&mut self, index: usize, x: f64) -> Result<(), Error> {
        let node = self.node_at(index)?;
        self.check_order(node, x)?;
        trace!("Setting x of point {index} to {x}");
        self.nodes[node].pt.set_x(x);
        Ok(())
    }

    fn set_point_y(&mut self, index: usize, y: f64) -> Result<(), Error> {
        let node = self.node_at(index)?;
        trace!("Setting y of point {index} to {y}");
        self.nodes[node].pt.set_y(y);
        Ok(())
    }

    fn delete_point(&mut self, index: usize) -> Result<(), Error> {
        let node = self.node_at(index)?;
        if self.count < 3 {
            trace!("Refusing to delete from table with {} points", self.count);
            return Err(Error::State { count: self.count });
        }
        let removed = self.unlink(node);
        debug!("Deleted point {index}: {removed}");
        Ok(())
    }

    fn add_point(&mut self, point: FunctionPoint) -> Result<(), Error> {
        let x = point.x();
        if x.is_nan() {
            return Err(OrderViolation::NotANumber.into());
        }
        let next = self
            .node_ids()
            .find(|&n| self.nodes[n].pt.x() >= x)
            .unwrap_or(HEAD);
        let prev = self.nodes[next].prev;
        let duplicate = [prev, next]
            .into_iter()
            .filter(|&n| n != HEAD)
            .any(|n| same_x(self.nodes[n].pt.x(), x));
        if duplicate {
            trace!("Rejecting duplicate point {point}");
            return Err(OrderViolation::Duplicate { x }.into());
        }
        self.insert_before(next, point);
        debug!("Inserted point {point}");
        Ok(())
    }

    fn points(&self) -> Vec<FunctionPoint> {
        self.iter().collect()
    }
}

impl TryFrom<Vec<FunctionPoint>> for LinkedListTabulatedFunction {
    type Error = ConstructionError;

    fn try_from(points: Vec<FunctionPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl PartialEq for LinkedListTabulatedFunction {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Debug for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Display for LinkedListTabulatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_points(self.iter(), f)
    }
}

impl<'a> IntoIterator for &'a LinkedListTabulatedFunction {
    type Item = FunctionPoint;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [LinkedListTabulatedFunction]
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    node: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = FunctionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.node == HEAD {
            return None;
        }
        let Node { pt, next, .. } = self.nodes[self.node];
        self.node = next;
        Some(pt)
    }
}
