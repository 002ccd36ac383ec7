use std::cell::Cell;

use polcalc::{
    Arity, CalcError, CalcResult, Calculator, NumericFunction, WhitespaceTokenizer, evaluate,
};
use rstest::rstest;

/// A resolver that always hands back the same function.
fn fixed(func: NumericFunction) -> impl Fn(&str) -> CalcResult<NumericFunction> {
    move |_| Ok(func)
}

fn raising(id: &str) -> CalcResult<NumericFunction> {
    Err(CalcError::unknown_function(id))
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "'{src}' evaluated to {v}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_nan(src: &str) {
    match evaluate(src) {
        Ok(v) => assert!(v.is_nan(), "'{src}' evaluated to {v}, expected NaN"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str, message: &str) {
    match evaluate(src) {
        Ok(v) => panic!("'{src}' evaluated to {v} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message),
    }
}

#[test]
fn addition_with_injected_function() {
    let calculator = Calculator::new(fixed(NumericFunction::Binary(|a, b| a + b)));

    assert_eq!(calculator.run("+ 2 2").unwrap(), 4.0);
    assert_eq!(calculator.run("+ 2 -2").unwrap(), 0.0);
}

#[test]
fn arity_errors_with_injected_function() {
    let calculator = Calculator::new(fixed(NumericFunction::Binary(|a, b| a + b)));

    assert_eq!(calculator.run("+ 2"), Err(CalcError::ArityMismatch { expected: 2, got: 1 }));
    assert_eq!(calculator.run("+"), Err(CalcError::ArityMismatch { expected: 2, got: 0 }));
    assert_eq!(calculator.run("+ 1 1 1"), Err(CalcError::ArityMismatch { expected: 2, got: 3 }));
}

#[test]
fn invalid_operands_degrade_to_nan() {
    let calculator = Calculator::new(fixed(NumericFunction::Binary(|a, b| a + b)));

    assert!(calculator.run("+ hello world").unwrap().is_nan());
    assert!(calculator.run("+ hello 1").unwrap().is_nan());
}

#[test]
fn unary_function_arity() {
    let calculator = Calculator::new(fixed(NumericFunction::Unary(f64::sqrt)));

    assert_eq!(calculator.run("sqrt 4").unwrap(), 2.0);
    assert_eq!(calculator.run("sqrt").unwrap_err().to_string(),
               "Invalid arity for function, expected 1, got 0");
    assert_eq!(calculator.run("sqrt 5 1").unwrap_err().to_string(),
               "Invalid arity for function, expected 1, got 2");
}

#[test]
fn resolver_failure_is_propagated() {
    let calculator = Calculator::new(raising);

    assert_eq!(calculator.run("multiply 2 3"),
               Err(CalcError::UnknownFunction { name: "multiply".to_string() }));
}

#[test]
fn unknown_operator_fails_before_arity_check() {
    assert_failure("multiply 2 3", "invalid function: multiply");
    assert_failure("multiply", "invalid function: multiply");
    assert_failure("% 1 2 3 4", "invalid function: %");
}

#[rstest]
#[case("")]
#[case(" + 2 2")]
#[case(" ")]
fn empty_first_token_skips_resolution(#[case] src: &str) {
    let consulted = Cell::new(false);
    let calculator = Calculator::new(|id: &str| {
                         consulted.set(true);
                         raising(id)
                     });

    assert!(calculator.run(src).unwrap().is_nan());
    assert!(!consulted.get(), "resolver was consulted for {src:?}");
}

#[rstest]
#[case("+ 2 2", 4.0)]
#[case("+ 2 -2", 0.0)]
#[case("- 10 4", 6.0)]
#[case("* 3 -4", -12.0)]
#[case("/ 4 2", 2.0)]
#[case("/ 1 4", 0.25)]
#[case("^ 2 10", 1024.0)]
#[case("^ 2 -1", 0.5)]
#[case("sqrt 4", 2.0)]
#[case("sqrt 2.25", 1.5)]
#[case("+ 1.5e2 .5", 150.5)]
#[case("+ 12px 3", 15.0)]
fn builtin_operators(#[case] src: &str, #[case] expected: f64) {
    assert_value(src, expected);
}

#[test]
fn division_by_zero_is_infinite() {
    assert_value("/ 4 0", f64::INFINITY);
    assert_value("/ -4 0", f64::NEG_INFINITY);
    assert_nan("/ 0 0");
}

#[test]
fn nan_results_are_values() {
    assert_nan("");
    assert_nan("sqrt -1");
    assert_nan("+ hello world");
    assert_nan("+ hello 1");
    assert_nan("* 2 .");
}

#[rstest]
#[case("+ 2", "Invalid arity for function, expected 2, got 1")]
#[case("+", "Invalid arity for function, expected 2, got 0")]
#[case("+ 1 1 1", "Invalid arity for function, expected 2, got 3")]
#[case("sqrt", "Invalid arity for function, expected 1, got 0")]
#[case("sqrt 5 1", "Invalid arity for function, expected 1, got 2")]
#[case("+  2 2", "Invalid arity for function, expected 2, got 3")]
#[case("+ 2 2 ", "Invalid arity for function, expected 2, got 3")]
fn arity_mismatches(#[case] src: &str, #[case] message: &str) {
    assert_failure(src, message);
}

#[test]
fn whitespace_tokenizer_collapses_separators() {
    let calculator = Calculator::with_tokenizer(polcalc::DefaultFunctions, WhitespaceTokenizer);

    assert_eq!(calculator.run("+  2\t2 ").unwrap(), 4.0);
    assert_eq!(calculator.run("  sqrt   16").unwrap(), 4.0);
    assert!(calculator.run("").unwrap().is_nan());
    assert!(calculator.run("   ").unwrap().is_nan());
}

#[test]
fn custom_operator_sets_plug_in() {
    let calculator = Calculator::new(|id: &str| match id {
                         "neg" => Ok(NumericFunction::Unary(|a| -a)),
                         "max" => Ok(NumericFunction::Binary(f64::max)),
                         _ => raising(id),
                     });

    assert_eq!(calculator.run("neg 3").unwrap(), -3.0);
    assert_eq!(calculator.run("max 3 7").unwrap(), 7.0);
    assert!(calculator.run("+ 1 2").is_err());
}

#[test]
fn arity_is_carried_by_the_function() {
    assert_eq!(NumericFunction::Unary(f64::sqrt).arity(), Arity::Unary);
    assert_eq!(NumericFunction::Binary(f64::powf).arity(), Arity::Binary);
}

#[test]
fn repeated_runs_are_identical() {
    let calculator = Calculator::builtin();

    for src in ["+ 2 2", "sqrt 9", "/ 1 0", "+ 2", "nope 1"] {
        assert_eq!(calculator.run(src), calculator.run(src));
    }
    assert!(calculator.run("+ x 1").unwrap().is_nan());
    assert!(calculator.run("+ x 1").unwrap().is_nan());
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Calculator::builtin();

    std::thread::scope(|s| {
        let handles = (0..4).map(|i| {
                                let calculator = &calculator;
                                s.spawn(move || calculator.run(&format!("* {i} 2")))
                            })
                            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), f64::from(i as u8) * 2.0);
        }
    });
}
