use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use env_logger::Env;
use floyd_warshall::{relax, solve, DistanceMatrix, FloydWarshall, Sentinel};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: &[usize] = &[16, 64, 128, 256];

/// Generates a dense random graph where roughly half of the edges exist.
fn random_rows(size: usize) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(size as _);
    let sentinel = Sentinel::default().value();
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| match (i == j, rng.gen_bool(0.5)) {
                    (true, _) => 0,
                    (false, true) => rng.gen_range(1, 1000),
                    (false, false) => sentinel,
                })
                .collect()
        })
        .collect()
}

fn random_graph(size: usize) -> DistanceMatrix {
    DistanceMatrix::from_rows(&random_rows(size), Sentinel::default())
        .expect("error reading random graph")
}

pub fn from_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("DistanceMatrix::from_rows");
    for &size in SIZES {
        let rows = random_rows(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| DistanceMatrix::from_rows(black_box(rows), Sentinel::default()))
        });
    }
    group.finish();
}

pub fn calculate_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloydWarshall::calculate_distance");
    for &size in SIZES {
        let graph = random_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter_batched(
                || FloydWarshall::new(graph),
                |mut solver| {
                    solver.calculate_distance();
                    solver.into_distances()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
pub fn calculate_distance_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("FloydWarshall::calculate_distance_parallel");
    for &size in SIZES {
        let graph = random_graph(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter_batched(
                || FloydWarshall::new(graph),
                |mut solver| {
                    solver.calculate_distance_parallel();
                    solver.into_distances()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

#[cfg(not(feature = "parallel"))]
pub fn calculate_distance_parallel(_: &mut Criterion) {}

pub fn relax_solved(c: &mut Criterion) {
    let mut group = c.benchmark_group("relax(solved)");
    for &size in SIZES {
        let solved = solve(&random_graph(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &solved, |b, solved| {
            b.iter_batched(
                || solved.clone(),
                |mut matrix| relax(&mut matrix),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
}

criterion_group!(
    benches,
    from_rows,
    calculate_distance,
    calculate_distance_parallel,
    relax_solved,
);

fn main() {
    init_logging();
    benches();
    Criterion::default().configure_from_args().final_summary();
}
