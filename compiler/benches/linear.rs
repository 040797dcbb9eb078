use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nfa_compiler::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Joins `len` symbols cycled from `alphabet` with the provided operator.
fn pattern_of_length(alphabet: &str, operator: char, len: usize) -> String {
    alphabet
        .chars()
        .cycle()
        .take(len)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(&operator.to_string())
}

pub fn exponential_pattern_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern length construction comparison");

    (1..10)
        .map(|exponent| 2usize.pow(exponent))
        .map(|len| (pattern_of_length("ab", '.', len), len))
        .for_each(|(pattern, sample_size)| {
            group.throughput(Throughput::Elements(sample_size as u64));
            group.bench_with_input(
                BenchmarkId::new("pattern symbol count of size", sample_size),
                &pattern,
                |b, pattern| {
                    b.iter(|| {
                        let res = compile_str(pattern);
                        assert!(res.is_ok())
                    })
                },
            );
        })
}

pub fn exponential_layout_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern length layout comparison");

    (1..7)
        .map(|exponent| 2usize.pow(exponent))
        .map(|len| (pattern_of_length("abc", '+', len), len))
        .for_each(|(pattern, sample_size)| {
            let automaton = compile_str(&pattern).expect("benchmark pattern is invalid");

            group.throughput(Throughput::Elements(automaton.states().len() as u64));
            group.bench_with_input(
                BenchmarkId::new("union symbol count of size", sample_size),
                &automaton,
                |b, automaton| {
                    b.iter(|| {
                        let mut states = automaton.states().to_vec();
                        let mut rng = StdRng::seed_from_u64(0);

                        layout(
                            &mut states,
                            Canvas::default(),
                            &LayoutConfig::default(),
                            &mut rng,
                        );
                        criterion::black_box(states)
                    })
                },
            );
        })
}

criterion_group!(
    benches,
    exponential_pattern_size_comparison,
    exponential_layout_size_comparison
);
criterion_main!(benches);
