use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use seqsort::unstable::{median_sort, partition_sort};
use sort_test_tools::{patterns, Sort};

#[inline(never)]
fn bench_sort<T: Ord>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(&mut [T]),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |mut test_data| sort_func(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn measure_comp_count(name: &str, test_size: usize, mut instrumented_sort_func: impl FnMut() -> u64) {
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 10_000 {
        3000
    } else {
        100
    };

    let total = (0..run_count).map(|_| instrumented_sort_func()).sum::<u64>();

    // Below one comparison per run this rounds down to zero, only sizes 0 and 1 get there.
    println!("{name}: mean comparisons: {}", total / (run_count as u64));
}

#[inline(never)]
fn bench_impl<T: Ord, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    _sort_impl: S,
) {
    if test_size > S::max_len() {
        return;
    }

    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        if transform_name == "i32" {
            let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_size}");

            // Instrument via sort_by so the element type behaves exactly as in the timed runs.
            let instrumented_sort_func = || {
                let mut comp_count = 0u64;
                let mut test_data = transform(pattern_provider(test_size));
                S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
                    comp_count += 1;
                    a.cmp(b)
                });
                comp_count
            };
            measure_comp_count(&name, test_size, instrumented_sort_func);
        }
    } else {
        bench_sort(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    v.shuffle(&mut thread_rng());
    v
}

fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

fn bench_patterns<T: Ord>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
    ];

    // Inputs that push the pivot choices of both algorithms to their worst.
    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("all_equal", patterns::all_equal),
        ("pipe_organ", patterns::pipe_organ),
        ("median_three_middle_max", patterns::median_three_middle_max),
        ("90p_zero_10p_random", |size| {
            let (len_90p, len_10p) = split_len(size, 90.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_90p)
                .chain(patterns::random(len_10p))
                .collect();

            shuffle_vec(v)
        }),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            partition_sort::SortImpl,
        );

        bench_impl(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
            median_sort::SortImpl,
        );
    }
}

fn ensure_true_random() {
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // A fixed seed leaking in here would make every random input identical.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 5, 8, 11, 16, 20, 36, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
    ];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_size in test_sizes {
        bench_patterns(c, test_size, "i32", |values| values);

        bench_patterns(c, test_size, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Extends the value into the 64 bit range, while preserving input order.
                    ((*val as i64) + (i32::MAX as i64) + 1) as u64 * (i32::MAX as u64)
                })
                .collect()
        });

        // Not Copy, every comparison goes through the heap.
        bench_patterns(c, test_size, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
