#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

use tictactoe_ai::board::Board;

pub fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Check that `sampler` only ever produces values from `expected` and that
/// the distribution over them is roughly uniform.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(
    expected: &[T],
    mut sampler: impl FnMut() -> T,
) {
    assert!(
        expected.iter().all_unique(),
        "duplicate value in expected: {:?}",
        expected
    );
    assert!(!expected.is_empty(), "expected values must be nonempty");

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    let mut counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();
    for _ in 0..total_samples {
        let sample = sampler();
        match counts.get_mut(&sample) {
            None => panic!("non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    for value in expected {
        let count = *counts.get(value).unwrap();
        let relative = count as f32 / samples_per_value as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "value {:?} was over/under sampled {} ~ {}",
            value,
            count,
            relative,
        );
    }
}
