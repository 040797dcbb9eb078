use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nfa_runtime::*;

fn pad_input_to_length_with(suffix: &str, pad_str: &str, len: usize) -> String {
    let suffix_len = suffix.chars().count();

    if suffix_len > len {
        "".to_string()
    } else {
        let req_padding = len - suffix_len;

        pad_str
            .chars()
            .cycle()
            .take(req_padding)
            .chain(suffix.chars())
            .collect()
    }
}

/// Approximates the thompson construction of `(a+b)*.c`.
fn union_star_then_c() -> Automaton {
    let id = |idx: usize| StateId::from(idx);
    let states = (0..10usize)
        .map(|idx| match idx {
            8 => State::new(id(idx)).as_initial(),
            9 => State::new(id(idx)).as_final(),
            _ => State::new(id(idx)),
        })
        .collect();

    let transitions = vec![
        Transition::new(id(0), id(1), Symbol::Char('a')),
        Transition::new(id(2), id(3), Symbol::Char('b')),
        Transition::epsilon(id(4), id(0)),
        Transition::epsilon(id(4), id(2)),
        Transition::epsilon(id(1), id(5)),
        Transition::epsilon(id(3), id(5)),
        Transition::epsilon(id(6), id(4)),
        Transition::epsilon(id(6), id(7)),
        Transition::epsilon(id(5), id(4)),
        Transition::epsilon(id(5), id(7)),
        Transition::new(id(7), id(9), Symbol::Char('c')),
        Transition::epsilon(id(8), id(6)),
    ];

    Automaton::try_new(states, transitions).expect("benchmark automaton is invalid")
}

pub fn linear_input_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential input length comparison");
    let suffix = "c";
    let pad = "ab";
    let automaton = union_star_then_c();

    (1..10)
        .map(|exponent| 2usize.pow(exponent))
        .map(|input_len| (pad_input_to_length_with(suffix, pad, input_len), input_len))
        .for_each(|(input, sample_size)| {
            group.throughput(Throughput::Elements(sample_size as u64));
            group.bench_with_input(
                BenchmarkId::new("input length of size", sample_size),
                &input,
                |b, input| b.iter(|| assert!(automaton.accepts(input))),
            );
        })
}

criterion_group!(benches, linear_input_size_comparison);
criterion_main!(benches);
