#![cfg(feature = "kleisli")]
//! Integration tests for composing embellished functions.
//!
//! Covers the end-to-end scenarios for both embellishments:
//! - Logging pipeline: to_upper >=> to_words
//! - Partial functions: safe_reciprocal >=> safe_root
//! - Short-circuiting, verified by counting calls
//! - Sharing composed morphisms between threads

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use embellish::effect::{EmptyValueError, Maybe, Writer};
use embellish::functions::{
    is_even, is_odd, negate, process, safe_reciprocal, safe_root, safe_root_reciprocal, to_upper,
    to_words,
};
use embellish::kleisli::{Embellishment, Kleisli, compose, identity};
use embellish::kleisli;
use rstest::rstest;

// =============================================================================
// Writer Scenarios
// =============================================================================

#[rstest]
fn to_upper_alone() {
    let writer = to_upper("Hello World".to_string());
    assert_eq!(writer.value(), "HELLO WORLD");
    assert_eq!(writer.log(), "toUpper ");
}

#[rstest]
fn to_upper_then_to_words() {
    let composed = compose(to_upper, to_words);
    let (words, log) = composed("Hello World".to_string()).into_parts();
    assert_eq!(words, vec!["HELLO".to_string(), "WORLD".to_string()]);
    assert_eq!(log, "toUpper toWords ");
}

#[rstest]
fn process_matches_explicit_composition() {
    let composed = compose(to_upper, to_words);
    let input = "kleisli categories compose".to_string();
    assert_eq!(process(input.clone()), composed(input));
}

#[rstest]
fn log_order_follows_execution_order() {
    let a = |n: i32| Writer::new(n, "A ".to_string());
    let b = |n: i32| Writer::new(n, "B ".to_string());

    assert_eq!(compose(a, b)(0).log(), "A B ");
    assert_eq!(compose(b, a)(0).log(), "B A ");
}

#[rstest]
fn writer_with_vec_log() {
    let step = |name: &'static str| move |n: u32| Writer::new(n + 1, vec![name]);
    let composed = kleisli!(step("parse"), step("check"), step("emit"));
    let (value, log) = composed(0).into_parts();
    assert_eq!(value, 3);
    assert_eq!(log, vec!["parse", "check", "emit"]);
}

#[rstest]
#[case(4, false, "isEven not so! ")]
#[case(5, true, "isEven not so! ")]
fn is_odd_scenario(#[case] n: i64, #[case] expected: bool, #[case] expected_log: &str) {
    let writer = is_odd(n);
    assert_eq!(*writer.value(), expected);
    assert_eq!(writer.log(), expected_log);
}

#[rstest]
fn double_negation_logs_twice() {
    let composed = kleisli!(is_even, negate, negate);
    let (value, log) = composed(10).into_parts();
    assert!(value);
    assert_eq!(log, "isEven not so! not so! ");
}

#[rstest]
fn writer_identity_adds_nothing_to_the_log() {
    let composed = kleisli!(
        identity::<Writer<String, String>>,
        to_upper,
        identity::<Writer<String, String>>,
        to_words,
    );
    assert_eq!(composed("a b".to_string()).log(), "toUpper toWords ");
}

// =============================================================================
// Maybe Scenarios
// =============================================================================

#[rstest]
#[case(4.0, Maybe::Present(2.0))]
#[case(-1.0, Maybe::Absent)]
fn safe_root_scenario(#[case] x: f64, #[case] expected: Maybe<f64>) {
    assert_eq!(safe_root(x), expected);
}

#[rstest]
#[case(0.0, Maybe::Absent)]
#[case(4.0, Maybe::Present(0.5))]
fn reciprocal_then_root(#[case] x: f64, #[case] expected: Maybe<f64>) {
    assert_eq!(compose(safe_reciprocal, safe_root)(x), expected);
    assert_eq!(safe_root_reciprocal(x), expected);
}

#[rstest]
fn short_circuit_never_invokes_second_function() {
    let calls = AtomicUsize::new(0);
    let counted_root = |x: f64| {
        calls.fetch_add(1, Ordering::SeqCst);
        safe_root(x)
    };

    let composed = compose(safe_reciprocal, counted_root);
    assert_eq!(composed(0.0), Maybe::Absent);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(composed(4.0), Maybe::Present(0.5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn short_circuit_skips_every_later_step() {
    let calls = AtomicUsize::new(0);
    let counted = |x: f64| {
        calls.fetch_add(1, Ordering::SeqCst);
        Maybe::present(x)
    };

    let composed = kleisli!(safe_root, &counted, &counted, &counted);
    assert_eq!(composed(-9.0), Maybe::Absent);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(composed(9.0), Maybe::Present(3.0));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[rstest]
fn unwrapping_absent_result_is_an_explicit_error() {
    fn root_reciprocal_or_error(x: f64) -> Result<f64, EmptyValueError> {
        safe_root_reciprocal(x).expect_present("safe_root_reciprocal")
    }

    assert_eq!(root_reciprocal_or_error(4.0), Ok(0.5));
    let error = root_reciprocal_or_error(-4.0).unwrap_err();
    assert_eq!(error.context(), Some("safe_root_reciprocal"));
    assert_eq!(
        error.to_string(),
        "safe_root_reciprocal: attempted to unwrap an absent value"
    );
}

#[rstest]
fn std_option_composes_the_same_way() {
    let parse = |text: String| text.trim().parse::<f64>().ok();
    let root = |x: f64| -> Option<f64> { safe_root(x).into() };

    let composed = compose(parse, root);
    assert_eq!(composed(" 16 ".to_string()), Some(4.0));
    assert_eq!(composed("-16".to_string()), None);
    assert_eq!(composed("sixteen".to_string()), None);
}

// =============================================================================
// Trait Surface
// =============================================================================

#[rstest]
fn trait_identity_per_instance() {
    assert_eq!(
        <Writer<String, i32> as Embellishment>::identity(1).into_parts(),
        (1, String::new())
    );
    assert_eq!(<Maybe<i32> as Embellishment>::identity(1), Maybe::Present(1));
    assert_eq!(<Option<i32> as Embellishment>::identity(1), Some(1));
}

#[rstest]
fn trait_compose_per_instance() {
    let via_writer = Writer::compose(to_upper, to_words);
    assert_eq!(via_writer("x y".to_string()).log(), "toUpper toWords ");

    let via_maybe = Maybe::compose(safe_reciprocal, safe_root);
    assert_eq!(via_maybe(4.0), Maybe::Present(0.5));
}

// =============================================================================
// Kleisli Morphisms
// =============================================================================

#[rstest]
fn kleisli_morphism_pipeline() {
    let pipeline = Kleisli::new(to_upper).and_then(Kleisli::new(to_words));
    let (words, log) = pipeline.run("Hello World".to_string()).into_parts();
    assert_eq!(words, vec!["HELLO", "WORLD"]);
    assert_eq!(log, "toUpper toWords ");
}

#[rstest]
fn kleisli_morphism_associativity() {
    let reciprocal = Kleisli::new(safe_reciprocal);
    let root = Kleisli::new(safe_root);

    let left = reciprocal
        .clone()
        .and_then(root.clone())
        .and_then(reciprocal.clone());
    let right = reciprocal.clone().and_then(root.and_then(reciprocal));

    for x in [-2.0, 0.0, 0.25, 4.0, 100.0] {
        assert_eq!(left.run(x), right.run(x));
    }
}

#[rstest]
fn composed_morphism_shared_between_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let root = Kleisli::new(move |x: f64| {
        counter.fetch_add(1, Ordering::SeqCst);
        safe_root(x)
    });
    let pipeline = Kleisli::new(safe_reciprocal).and_then(root);

    let handles: Vec<_> = [0.0, 4.0, 0.25, -1.0]
        .into_iter()
        .map(|x| {
            let pipeline = pipeline.clone();
            std::thread::spawn(move || (x, pipeline.run(x)))
        })
        .collect();

    for handle in handles {
        let (x, result) = handle.join().expect("worker panicked");
        assert_eq!(result, safe_root_reciprocal(x));
    }
    // 0.0 short-circuits before the root; -1.0 reaches it and comes back absent.
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
