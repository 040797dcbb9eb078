use nfa_compiler::compile_str;

/// Compiles each pattern and simulates it against accepted and rejected
/// candidates.
fn assert_language(cases: Vec<(&str, Vec<&str>, Vec<&str>)>) {
    for (test_case, (pattern, accepted, rejected)) in cases.into_iter().enumerate() {
        let automaton = compile_str(pattern).expect("pattern failed to compile");

        for input in accepted {
            assert_eq!(
                (test_case, pattern, input, true),
                (test_case, pattern, input, automaton.accepts(input))
            );
        }

        for input in rejected {
            assert_eq!(
                (test_case, pattern, input, false),
                (test_case, pattern, input, automaton.accepts(input))
            );
        }
    }
}

#[test]
fn should_accept_languages_of_basic_operators() {
    assert_language(vec![
        ("a.b", vec!["ab"], vec!["", "a", "b", "ba", "abb"]),
        ("a+b", vec!["a", "b"], vec!["", "ab", "c", "aa"]),
        ("a*", vec!["", "a", "aa", "aaa", "aaaaaaaa"], vec!["b", "ab", "ba"]),
        ("(a+b).c", vec!["ac", "bc"], vec!["", "c", "abc", "ab", "cc"]),
        ("", vec![""], vec!["a", "b"]),
    ])
}

#[test]
fn should_accept_languages_of_nested_expressions() {
    assert_language(vec![
        (
            "(a+b)*",
            vec!["", "a", "b", "abba", "bbbb"],
            vec!["c", "abc"],
        ),
        (
            "(a.b)*.c",
            vec!["c", "abc", "ababc"],
            vec!["", "ab", "aabc", "abac"],
        ),
        ("a+b+c", vec!["a", "b", "c"], vec!["", "ab", "d"]),
        ("((a))", vec!["a"], vec!["", "aa"]),
        ("a*.b*", vec!["", "a", "b", "aab", "abbb"], vec!["ba", "aba"]),
    ])
}

#[test]
fn should_treat_empty_operands_as_empty_string() {
    assert_language(vec![
        ("()", vec![""], vec!["a"]),
        ("(a+)", vec!["", "a"], vec!["aa", "b"]),
        ("(a+).b", vec!["b", "ab"], vec!["", "a", "aab"]),
        ("()*", vec![""], vec!["a"]),
    ])
}
