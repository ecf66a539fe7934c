//! Tests for array traversal and the generic `Traversable` instance.
//!
//! Array traversal is fail-fast: elements are visited left to right and
//! nothing after the first failure is passed to the function.

use std::cell::RefCell;

use outcome::{Outcome, sequence_array, traverse_array, traverse_array_with_index};
use rstest::rstest;

fn checked_square(n: i32) -> Outcome<String, i32> {
    n.checked_mul(n)
        .map_or_else(|| Outcome::fail(format!("{n} overflows")), Outcome::succeed)
}

// =============================================================================
// traverse_array
// =============================================================================

#[rstest]
fn traverse_array_collects_in_order() {
    assert_eq!(
        traverse_array(vec![1, 2, 3], checked_square),
        Outcome::Success(vec![1, 4, 9])
    );
}

#[rstest]
fn traverse_array_of_empty_input_succeeds() {
    assert_eq!(traverse_array(Vec::<i32>::new(), checked_square), Outcome::Success(vec![]));
}

#[rstest]
fn traverse_array_stops_at_first_failure() {
    let visited = RefCell::new(Vec::new());
    let result = traverse_array([3, 70_000, 5, 80_000], |n| {
        visited.borrow_mut().push(n);
        checked_square(n)
    });

    assert_eq!(result, Outcome::Failure("70000 overflows".to_string()));
    assert_eq!(visited.into_inner(), vec![3, 70_000]);
}

#[rstest]
fn traverse_array_accepts_lazy_iterators() {
    let mut produced = 0;
    let numbers = (1..).inspect(|_| produced += 1).take_while(|n| *n < 100);
    let result = traverse_array(numbers, |n: i32| {
        if n == 4 { Outcome::fail(n) } else { Outcome::succeed(n) }
    });

    assert_eq!(result, Outcome::Failure(4));
    assert_eq!(produced, 4);
}

#[rstest]
fn traverse_array_with_index_passes_positions() {
    let labels = traverse_array_with_index(["a", "b", "c"], |index, item| {
        Outcome::<String, String>::succeed(format!("{index}:{item}"))
    });

    assert_eq!(
        labels,
        Outcome::Success(vec!["0:a".to_string(), "1:b".to_string(), "2:c".to_string()])
    );
}

#[rstest]
fn traverse_array_with_index_reports_failing_position() {
    let result = traverse_array_with_index([10, 20, -1, 30], |index, n: i32| {
        if n < 0 { Outcome::fail(index) } else { Outcome::succeed(n) }
    });

    assert_eq!(result, Outcome::Failure(2));
}

// =============================================================================
// sequence_array
// =============================================================================

#[rstest]
#[case(vec![], Outcome::Success(vec![]))]
#[case(vec![Outcome::Success(1), Outcome::Success(2)], Outcome::Success(vec![1, 2]))]
#[case(
    vec![Outcome::Success(1), Outcome::Failure("b"), Outcome::Failure("c")],
    Outcome::Failure("b")
)]
fn sequence_array_cases(
    #[case] outcomes: Vec<Outcome<&'static str, i32>>,
    #[case] expected: Outcome<&'static str, Vec<i32>>,
) {
    assert_eq!(sequence_array(outcomes), expected);
}

// =============================================================================
// Generic Traversable
// =============================================================================

#[cfg(feature = "typeclass")]
mod generic {
    use outcome::Outcome;
    use outcome::typeclass::{Identity, Traversable};
    use rstest::rstest;

    #[rstest]
    fn traverse_into_option() {
        let success: Outcome<String, i32> = Outcome::succeed(4);
        let halved = success.traverse(|n| if n % 2 == 0 { Some(n / 2) } else { None });
        assert_eq!(halved, Some(Outcome::Success(2)));

        let odd: Outcome<String, i32> = Outcome::succeed(3);
        let rejected = odd.traverse(|n| if n % 2 == 0 { Some(n / 2) } else { None });
        assert_eq!(rejected, None);
    }

    #[rstest]
    fn traverse_lifts_failure_without_calling_function() {
        let failure: Outcome<String, i32> = Outcome::fail("boom".to_string());
        let mut calls = 0;
        let lifted = failure.traverse(|n| {
            calls += 1;
            Some(n)
        });

        assert_eq!(lifted, Some(Outcome::Failure("boom".to_string())));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn traverse_identity_law() {
        let success: Outcome<String, i32> = Outcome::succeed(9);
        assert_eq!(success.clone().traverse(Identity::new), Identity::new(success));
    }

    #[rstest]
    fn sequence_option_inside_outcome() {
        let present: Outcome<String, Option<i32>> = Outcome::succeed(Some(1));
        assert_eq!(present.sequence(), Some(Outcome::Success(1)));

        let failed: Outcome<String, Option<i32>> = Outcome::fail("e".to_string());
        assert_eq!(failed.sequence(), Some(Outcome::Failure("e".to_string())));
    }

    #[rstest]
    fn sequence_outcome_inside_option() {
        let inner_failure: Option<Outcome<String, i32>> = Some(Outcome::fail("e".to_string()));
        assert_eq!(inner_failure.sequence(), Outcome::Failure("e".to_string()));

        let nothing: Option<Outcome<String, i32>> = None;
        assert_eq!(nothing.sequence(), Outcome::Success(None));
    }
}
