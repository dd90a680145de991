//! End-to-end properties of parsing, evaluation and truth tables.

use proptable::{parse, parse_with, CompileError, Config, EvaluationError, Statement};

fn table_of(text: &str) -> proptable::TruthTable {
    parse(text).unwrap().truth_table()
}

// ─── Algebraic laws ────────────────────────────────────────────────────────────

#[test]
fn associativity_of_or() {
    assert_eq!(table_of("q or (v or s)"), table_of("(q or v) or s"));
    assert_ne!(table_of("q or (v or s)"), table_of("q and (v or s)"));
}

#[test]
fn implies_binds_looser_than_or() {
    assert_ne!(table_of("p or q implies v"), table_of("p or (q implies v)"));
    assert_eq!(table_of("p or q implies v"), table_of("(p or q) implies v"));
}

#[test]
fn iff_binds_looser_than_implies() {
    assert_eq!(table_of("p iff q implies r"), table_of("p iff (q implies r)"));
    assert_ne!(table_of("p iff q implies r"), table_of("(p iff q) implies r"));
}

#[test]
fn alias_equivalence() {
    assert_eq!(table_of("2 and 3"), table_of("2&&3"));
    assert_eq!(table_of("p ∧ q"), table_of("p land q"));
    assert_eq!(table_of("p | q"), table_of("not (p and q)"));
    assert_eq!(table_of("p ⊕ q"), table_of("p oplus q"));
    assert_eq!(table_of("p ⇔ q"), table_of("(p => q) & (q -> p)"));
    assert_eq!(table_of("\\neg p \\lor q"), table_of("p implies q"));
}

#[test]
fn numeric_words_are_variables_except_one_and_zero() {
    let s = parse("2 and 3").unwrap();
    let names: Vec<&str> = s.variables().iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["2", "3"]);

    let s = parse("1 and 0").unwrap();
    assert!(s.variables().is_empty());
    assert!(!s.evaluate_default());
}

// ─── Truth table shape ─────────────────────────────────────────────────────────

#[test]
fn row_count_law() {
    for text in ["true", "p", "p ⇒ q", "a and b or c", "a xor b xor c xor d xor e"] {
        let s = parse(text).unwrap();
        assert_eq!(s.truth_table().len(), 1 << s.variables().len(), "{}", text);
    }
}

#[test]
fn bit_order_law() {
    let table = table_of("a and b");
    let expected = [(true, true), (true, false), (false, true), (false, false)];
    for (row, (a, b)) in table.iter().zip(expected) {
        let values: Vec<bool> = row.assignment.values().collect();
        assert_eq!(values, vec![a, b]);
    }
}

#[test]
fn first_variable_toggles_slowest() {
    let table = table_of("c or a or b");
    let n = table.variables().len();
    for (i, row) in table.iter().enumerate() {
        for (j, value) in row.assignment.values().enumerate() {
            assert_eq!(value, (i >> (n - 1 - j)) & 1 == 0, "row {} variable {}", i, j);
        }
    }
}

#[test]
fn marked_columns_precede_final_value() {
    let s = parse("*(p ⇒ q) ∧ *(q ⇒ p)").unwrap();
    let table = s.truth_table();
    for row in table.iter() {
        assert_eq!(row.results.len(), s.sub_expressions().len() + 1);
        assert_eq!(row.value(), row.results[0] && row.results[1]);
    }
}

// ─── Round trip ────────────────────────────────────────────────────────────────

#[test]
fn reparsing_source_is_identical() {
    for text in ["p and *(q or ¬r)", "a => b => c", "x | y | z", "(t) ⇔ ¬(u ⊕ v)"] {
        let s = parse(text).unwrap();
        let again: Statement = s.source().parse().unwrap();
        assert!(s.structurally_eq(&again), "{}", text);
        assert_eq!(s.truth_table(), again.truth_table(), "{}", text);
    }
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn undefined_variable_both_paths() {
    let s = parse("p and q").unwrap();

    let partial = s.partial_assignment([("p", true)]).unwrap();
    assert_eq!(
        s.evaluate(&partial),
        Err(EvaluationError::UndefinedVariable { name: "q".to_string() })
    );

    let defaulted = s.assignment([("p", true)]).unwrap();
    assert_eq!(s.evaluate(&defaulted), Ok(true));
}

#[test]
fn trailing_operator_is_end_of_input() {
    assert!(matches!(
        parse("p and"),
        Err(CompileError::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn unknown_word_is_reported() {
    assert!(matches!(
        parse("p and $"),
        Err(CompileError::UnknownToken { ref word, position: 2 }) if word == "$"
    ));
}

#[test]
fn deep_nesting_is_rejected_not_overflowed() {
    let text = format!("{}p{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(
        parse(&text),
        Err(CompileError::NestingTooDeep { limit: Config::DEFAULT_MAX_DEPTH, .. })
    ));
    let config = Config::default().with_max_depth(20_000);
    let shallow = format!("{}p{}", "(".repeat(100), ")".repeat(100));
    assert!(parse_with(&shallow, &config).is_ok());
}
