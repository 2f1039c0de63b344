use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use topfreq::tracker::TopNTracker;

const OPS_PER_ITER: u64 = 4096;

fn uniform_workload(distinct: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    (0..OPS_PER_ITER).map(|_| rng.gen_range(0..distinct)).collect()
}

// Heavily skewed stream: a handful of keys soak up most of the hits, which
// is the regime the local reposition walk is built for.
fn skewed_workload(distinct: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    (0..OPS_PER_ITER)
        .map(|_| {
            let u: f64 = rng.gen();
            (u.powi(4) * distinct as f64) as u64
        })
        .collect()
}

fn bench_record_hit_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_hit_uniform");
    group.throughput(Throughput::Elements(OPS_PER_ITER));
    group.bench_function("cap_100_distinct_10k", |b| {
        let workload = uniform_workload(10_000);
        b.iter_batched(
            || TopNTracker::new(100),
            |mut tracker| {
                for key in &workload {
                    tracker.record_hit(std::hint::black_box(*key));
                }
                tracker
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_record_hit_skewed(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_hit_skewed");
    group.throughput(Throughput::Elements(OPS_PER_ITER));
    group.bench_function("cap_100_distinct_10k", |b| {
        let workload = skewed_workload(10_000);
        b.iter_batched(
            || TopNTracker::new(100),
            |mut tracker| {
                for key in &workload {
                    tracker.record_hit(std::hint::black_box(*key));
                }
                tracker
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_top_n_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n_snapshot");
    for capacity in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("cap_{}", capacity), |b| {
            let mut tracker = TopNTracker::new(capacity);
            for key in skewed_workload(capacity as u64 * 10) {
                tracker.record_hit(key);
            }
            b.iter(|| std::hint::black_box(tracker.top_n()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_record_hit_uniform,
    bench_record_hit_skewed,
    bench_top_n_snapshot
);
criterion_main!(benches);
