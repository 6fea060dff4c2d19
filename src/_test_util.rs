use std::iter::repeat_with;

use rand::Rng;

use crate::{point::FunctionPoint, TOLERANCE};

// generate `n` points with strictly increasing x coordinates
// the first x is sampled from [-10, -5), the distance between neighbours
// from [0.01, 2)
pub fn gen_points(n: usize, mut rng: impl Rng) -> Vec<FunctionPoint> {
    let mut x = rng.gen_range(-10.0..-5.0);
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        res.push(FunctionPoint::new(x, rng.gen_range(-100.0..100.0)));
        x += rng.gen_range(0.01..2.0);
    }
    res
}

// generate `n` y values from [-100, 100)
pub fn gen_values(n: usize, mut rng: impl Rng) -> Vec<f64> {
    repeat_with(|| rng.gen_range(-100.0..100.0)).take(n).collect()
}

pub fn is_strictly_ordered(pts: &[FunctionPoint]) -> bool {
    pts.windows(2)
        .all(|pair| pair[1].x() - pair[0].x() >= TOLERANCE)
}
