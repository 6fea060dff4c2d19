use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use tabulated::{
    _test_util::gen_points, ArrayTabulatedFunction, FunctionPoint,
    LinkedListTabulatedFunction, TabulatedFunction,
};

const NPTS: usize = 256;
const NQUERIES: usize = 1024;

fn eval_all(f: &dyn TabulatedFunction, xs: &[f64]) -> f64 {
    xs.iter().map(|&x| f.value(x)).filter(|y| !y.is_nan()).sum()
}

fn add_all(mut f: Box<dyn TabulatedFunction>, pts: &[FunctionPoint]) -> usize {
    for &pt in pts {
        let _ = f.add_point(pt);
    }
    f.points_count()
}

fn delete_front(mut f: Box<dyn TabulatedFunction>) -> usize {
    while f.delete_point(0).is_ok() {}
    f.points_count()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);

    let pts = gen_points(NPTS, &mut rng);
    let array = ArrayTabulatedFunction::from_points(pts.clone()).unwrap();
    let list = LinkedListTabulatedFunction::from_points(pts).unwrap();
    let (left, right) = (array.left_domain_border(), array.right_domain_border());
    let xs: Vec<f64> = (0..NQUERIES).map(|_| rng.gen_range(left..right)).collect();

    c.bench_function("array value", |b| b.iter(|| eval_all(&array, &xs)));
    c.bench_function("list value", |b| b.iter(|| eval_all(&list, &xs)));

    let new_pts: Vec<_> = (0..NPTS)
        .map(|_| FunctionPoint::new(rng.gen_range(left..right), rng.gen()))
        .collect();
    c.bench_function("array add", |b| {
        b.iter(|| add_all(Box::new(array.clone()), &new_pts))
    });
    c.bench_function("list add", |b| {
        b.iter(|| add_all(Box::new(list.clone()), &new_pts))
    });

    c.bench_function("array delete", |b| {
        b.iter(|| delete_front(Box::new(array.clone())))
    });
    c.bench_function("list delete", |b| {
        b.iter(|| delete_front(Box::new(list.clone())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
