use proptest::prelude::*;

use sortvis::sort::run_to_completion;
use sortvis::{Algorithm, Direction, SortDriver, Step};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

fn sort(algorithm: Algorithm, values: &mut [i32], direction: Direction) -> Vec<Step> {
    let mut driver = SortDriver::new(algorithm, values.len());
    run_to_completion(&mut driver, values, direction).expect("driver contract violated")
}

fn highlighted(steps: &[Step]) -> usize {
    steps.iter().filter(|s| s.is_highlighted()).count()
}

fn is_ordered(values: &[i32], direction: Direction) -> bool {
    values.windows(2).all(|w| direction.in_order(w[0], w[1]))
}

proptest! {
    #[test]
    fn result_is_a_permutation(
        algorithm in algorithm(),
        direction in direction(),
        input in prop::collection::vec(-50i32..50, 0..64),
    ) {
        let mut values = input.clone();
        sort(algorithm, &mut values, direction);

        let mut expected = input;
        expected.sort_unstable();
        let mut actual = values;
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn result_is_ordered(
        algorithm in algorithm(),
        direction in direction(),
        input in prop::collection::vec(-1000i32..1000, 0..64),
    ) {
        let mut values = input;
        sort(algorithm, &mut values, direction);
        prop_assert!(is_ordered(&values, direction), "{:?}", values);
    }

    #[test]
    fn step_sequence_is_deterministic(
        algorithm in algorithm(),
        direction in direction(),
        input in prop::collection::vec(0i32..20, 0..40),
    ) {
        let mut first = input.clone();
        let mut second = input;
        prop_assert_eq!(
            sort(algorithm, &mut first, direction),
            sort(algorithm, &mut second, direction)
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn quadratic_sorts_stay_within_pair_count(
        direction in direction(),
        input in prop::collection::vec(0i32..100, 0..48),
    ) {
        let n = input.len();
        let bound = n * n.saturating_sub(1) / 2;
        for algorithm in [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Quick] {
            let mut values = input.clone();
            let steps = sort(algorithm, &mut values, direction);
            // Quick sort also spends one step per pivot placement.
            let limit = if algorithm == Algorithm::Quick { bound + n } else { bound };
            prop_assert!(highlighted(&steps) <= limit, "{} took {} steps", algorithm, highlighted(&steps));
        }
    }

    #[test]
    fn merge_writes_n_log_n(
        direction in direction(),
        input in prop::collection::vec(0i32..100, 1..128),
    ) {
        let n = input.len();
        let levels = (usize::BITS - (n - 1).leading_zeros()) as usize;
        let mut values = input;
        let steps = sort(Algorithm::Merge, &mut values, direction);
        prop_assert!(highlighted(&steps) <= n * levels);
    }

    #[test]
    fn every_step_but_the_last_is_live(
        algorithm in algorithm(),
        direction in direction(),
        input in prop::collection::vec(0i32..100, 0..32),
    ) {
        let mut values = input;
        let steps = sort(algorithm, &mut values, direction);
        let (last, rest) = steps.split_last().unwrap();
        prop_assert!(last.is_done());
        prop_assert!(!last.is_highlighted());
        prop_assert!(rest.iter().all(|s| !s.is_done()));
    }
}

#[test]
fn empty_and_singleton_finish_on_first_advance() {
    for algorithm in Algorithm::ALL {
        for direction in [Direction::Ascending, Direction::Descending] {
            for input in [vec![], vec![17]] {
                let mut values = input.clone();
                let steps = sort(algorithm, &mut values, direction);
                assert_eq!(steps, vec![Step::finished()], "{algorithm} {direction}");
                assert_eq!(values, input);
            }
        }
    }
}

#[test]
fn bubble_reference_scenario() {
    let mut values = vec![5, 3, 4, 1, 2];
    let steps = sort(Algorithm::Bubble, &mut values, Direction::Ascending);
    assert_eq!(steps[0], Step::pair(0, 1));
    assert_eq!(values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn insertion_reference_scenario() {
    let mut values = vec![5, 3, 4, 1, 2];
    sort(Algorithm::Insertion, &mut values, Direction::Descending);
    assert_eq!(values, vec![5, 4, 3, 2, 1]);
}
