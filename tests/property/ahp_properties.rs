use ahp_sherpa::domain::ahp::{
    AhpError, ComparisonMatrix, ConsistencyChecker, ElementRegistry, Judgment, JudgmentSet,
    PrioritySolver, Solution, SolverSettings,
};
use proptest::prelude::*;

const SAATY_VALUES: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

fn label(index: usize) -> String {
    format!("E{}", index)
}

/// Every pair of 2..=6 elements judged with a Saaty value.
fn complete_judgments() -> impl Strategy<Value = JudgmentSet> {
    (2usize..=6).prop_flat_map(|n| {
        prop::collection::vec(prop::sample::select(SAATY_VALUES.to_vec()), n * (n - 1) / 2)
            .prop_map(move |ratios| {
                let mut ratios = ratios.into_iter();
                let mut judgments = JudgmentSet::new();
                for i in 0..n {
                    for j in (i + 1)..n {
                        if let Some(ratio) = ratios.next() {
                            judgments.push(Judgment::new(label(i), label(j), ratio));
                        }
                    }
                }
                judgments
            })
    })
}

/// Arbitrary pairs among six elements, possibly repeated or reversed.
fn sparse_judgments() -> impl Strategy<Value = JudgmentSet> {
    prop::collection::vec(
        (0usize..6, 0usize..6, 0.05f64..20.0).prop_filter("distinct pair", |(i, j, _)| i != j),
        1..15,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(i, j, ratio)| Judgment::new(label(i), label(j), ratio))
            .collect()
    })
}

/// Weights on 2..=6 elements; their ratios form a perfectly consistent matrix.
fn consistent_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..9.0, 2..=6)
}

fn solve(matrix: &ComparisonMatrix) -> Option<Solution> {
    match PrioritySolver::default().solve(matrix) {
        Ok(solution) => Some(solution),
        Err(AhpError::NonConvergence { .. }) => None,
        Err(other) => panic!("unexpected solver error: {}", other),
    }
}

proptest! {
    #[test]
    fn priorities_are_non_negative_and_sum_to_one(judgments in complete_judgments()) {
        let matrix = ComparisonMatrix::from_judgments(&judgments).unwrap();
        let solution = solve(&matrix);
        prop_assert!(solution.is_some(), "complete Saaty matrix did not converge");
        let solution = solution.unwrap();

        let total: f64 = solution.priorities.values().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "sum was {}", total);
        prop_assert!(solution.priorities.values().iter().all(|w| *w >= 0.0));
        prop_assert_eq!(solution.priorities.len(), matrix.size());
    }

    #[test]
    fn matrix_is_exactly_reciprocal(judgments in sparse_judgments()) {
        let matrix = ComparisonMatrix::from_judgments(&judgments).unwrap();

        prop_assert!(matrix.is_reciprocal());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), Some(1.0));
        }
    }

    #[test]
    fn last_judgment_on_a_pair_wins(judgments in sparse_judgments()) {
        let matrix = ComparisonMatrix::from_judgments(&judgments).unwrap();

        let mut seen = std::collections::HashSet::new();
        for judgment in judgments.iter().collect::<Vec<_>>().into_iter().rev() {
            let key = if judgment.first < judgment.second {
                (judgment.first.clone(), judgment.second.clone())
            } else {
                (judgment.second.clone(), judgment.first.clone())
            };
            if seen.insert(key) {
                let stored = matrix.ratio(&judgment.first, &judgment.second).unwrap();
                prop_assert!((stored - judgment.ratio).abs() <= judgment.ratio * 1e-12);
            }
        }
        prop_assert_eq!(matrix.judged_pairs(), seen.len());
    }

    #[test]
    fn elements_keep_first_seen_order(judgments in sparse_judgments()) {
        let registry = ElementRegistry::from_judgments(&judgments).unwrap();

        let mut expected: Vec<&str> = Vec::new();
        for judgment in &judgments {
            for name in [judgment.first.as_str(), judgment.second.as_str()] {
                if !expected.contains(&name) {
                    expected.push(name);
                }
            }
        }
        let names: Vec<&str> = registry.names().iter().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn consistent_matrix_recovers_weights(weights in consistent_weights()) {
        let n = weights.len();
        let mut judgments = JudgmentSet::new();
        for i in 0..n {
            for j in (i + 1)..n {
                judgments.push(Judgment::new(label(i), label(j), weights[i] / weights[j]));
            }
        }

        let matrix = ComparisonMatrix::from_judgments(&judgments).unwrap();
        let solution = solve(&matrix).unwrap();
        let consistency = ConsistencyChecker::check(&matrix, solution.lambda_max);

        let total: f64 = weights.iter().sum();
        for (i, weight) in weights.iter().enumerate() {
            let derived = solution.priorities.get(&label(i)).unwrap();
            prop_assert!((derived - weight / total).abs() < 1e-6);
        }
        prop_assert!((solution.lambda_max - n as f64).abs() < 1e-6);
        prop_assert!(consistency.consistency_ratio < 1e-6);
    }

    #[test]
    fn result_does_not_depend_on_starting_vector(
        judgments in complete_judgments(),
        seed in prop::collection::vec(0.01f64..10.0, 6),
    ) {
        let matrix = ComparisonMatrix::from_judgments(&judgments).unwrap();
        let solver = PrioritySolver::new(SolverSettings::default());
        let start = &seed[..matrix.size()];

        let uniform = solve(&matrix);
        prop_assert!(uniform.is_some(), "complete Saaty matrix did not converge");
        let uniform = uniform.unwrap();
        let seeded = solver.solve_from(&matrix, start);
        prop_assert!(seeded.is_ok(), "seeded solve failed: {:?}", seeded.as_ref().err());
        let seeded = seeded.unwrap();

        prop_assert!(uniform.priorities.approx_eq(&seeded.priorities, 1e-6));
        prop_assert!((uniform.lambda_max - seeded.lambda_max).abs() < 1e-6);
    }
}
