use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ctk_coset::{BoundConfig, bound, defining_cosets};

fn bench_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("bch_bound");
    group.sample_size(10);

    for (q, n, delta) in [(2u64, 63usize, 11usize), (2, 255, 21), (3, 242, 15)] {
        let seeds: Vec<usize> = (1..delta).collect();
        let cosets = defining_cosets(&seeds, q, n).unwrap();

        // The refinement search is far slower, so only run it on the short code.
        let modes: &[bool] = if n < 100 { &[false, true] } else { &[false] };
        for &hartmann_tzeng in modes {
            let config = BoundConfig { hartmann_tzeng };
            let label = if hartmann_tzeng { "ht" } else { "bch" };
            group.bench_with_input(
                BenchmarkId::new(label, format!("q={q} n={n}")),
                &cosets,
                |b, cosets| b.iter(|| bound(n, cosets, config)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_bound);
criterion_main!(benches);
