use nfa_compiler::{Canvas, ConvertError, Converter, LayoutConfig, SyntaxError};
use nfa_runtime::{Automaton, StateId};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PATTERNS: [&str; 8] = [
    "",
    "a",
    "a.b",
    "a+b",
    "a*",
    "(a+b).c",
    "(a.b)*.(c+d)",
    "((a+b)*.c)+(d.e*)",
];

/// Returns every state reachable from the initial state over any transition.
fn reachable_from_initial(automaton: &Automaton) -> Vec<bool> {
    let mut seen = vec![false; automaton.states().len()];
    let mut stack = automaton
        .initial_state()
        .map(|state| vec![state.id()])
        .unwrap_or_default();

    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut seen[id.as_usize()], true) {
            continue;
        }

        stack.extend(automaton.outgoing(id).map(|transition| transition.to));
    }

    seen
}

#[test]
fn should_uphold_structural_invariants_for_valid_patterns() {
    for (test_case, pattern) in PATTERNS.iter().enumerate() {
        let automaton = nfa_compiler::compile_str(pattern).expect("pattern failed to compile");
        let states = automaton.states();

        let initial_cnt = states.iter().filter(|state| state.is_initial()).count();
        let final_cnt = automaton.final_states().count();
        assert_eq!((test_case, 1, 1), (test_case, initial_cnt, final_cnt));

        // ids are contiguous in creation order.
        for (idx, state) in states.iter().enumerate() {
            assert_eq!((test_case, StateId::from(idx)), (test_case, state.id()));
        }

        for transition in automaton.transitions() {
            assert!(automaton.get(transition.from).is_some());
            assert!(automaton.get(transition.to).is_some());
        }

        assert!(reachable_from_initial(&automaton).into_iter().all(|seen| seen));
    }
}

#[test]
fn should_reject_without_constructing_states() {
    let input_output = [
        ("(a+b", SyntaxError::UnbalancedParentheses { position: 4 }),
        (".a", SyntaxError::OperatorAtStart { operator: '.' }),
        (
            "a+",
            SyntaxError::OperatorAtEnd {
                operator: '+',
                position: 1,
            },
        ),
        ("a++b", SyntaxError::ConsecutiveOperators { position: 2 }),
        (
            "*a",
            SyntaxError::MissingOperand {
                operator: '*',
                position: 0,
            },
        ),
        (
            "a**",
            SyntaxError::MissingOperand {
                operator: '*',
                position: 2,
            },
        ),
    ];

    let mut converter = Converter::with_rng(Canvas::default(), StdRng::seed_from_u64(0));
    for (test_case, (input, expected_err)) in input_output.into_iter().enumerate() {
        assert_eq!(
            (test_case, Err(ConvertError::Syntax(expected_err))),
            (test_case, converter.convert(input))
        );
        assert!(converter.snapshot().is_empty());
    }
}

#[test]
fn should_be_deterministic_for_a_seeded_random_source() {
    for (test_case, pattern) in PATTERNS.iter().enumerate() {
        let mut first = Converter::with_rng(Canvas::default(), StdRng::seed_from_u64(42));
        let mut second = Converter::with_rng(Canvas::default(), StdRng::seed_from_u64(42));

        assert_eq!(
            (test_case, first.convert(pattern)),
            (test_case, second.convert(pattern))
        );
    }
}

#[test]
fn should_keep_previous_automaton_across_failed_conversions() {
    let mut converter = Converter::with_rng(Canvas::default(), StdRng::seed_from_u64(1));

    let published = converter.convert("(a+b).c").unwrap();
    assert!(converter.convert("a)").is_err());
    assert!(converter.convert("ab").is_err());
    assert_eq!(published, converter.snapshot());

    assert!(converter.reset().is_empty());
}

#[test]
fn should_terminate_layout_on_cramped_canvas() {
    let canvas = Canvas::new(100.0, 100.0);
    let config = LayoutConfig::default().with_iterations(500);
    let mut converter =
        Converter::with_rng(canvas, StdRng::seed_from_u64(5)).with_layout_config(config.clone());

    let snapshot = converter.convert("((a+b)*.c)+(d.e*)").unwrap();

    let (min, max_x, max_y) = (
        config.padding,
        canvas.width - config.padding,
        canvas.height - config.padding,
    );
    assert!(snapshot.states().iter().all(|state| {
        state.x >= min && state.x <= max_x && state.y >= min && state.y <= max_y
    }));
}
