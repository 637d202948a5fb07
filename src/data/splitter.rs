// ============================================================
// Layer 4 — Train/Test/Validation Splitter
// ============================================================
// Shuffles items with a seeded RNG and cuts them into three sets:
//   - Training set:   used to fit the model
//   - Test set:       held out for final evaluation
//   - Validation set: used to tune and to catch overfitting
//
// One shuffle followed by two cut points, so the whole
// partition comes from a single seeded draw:
//
//     shuffled: [ train ........ | test ... | val . ]
//               0             n_train   n_train+n_test
//
// ChaCha8Rng is a fixed algorithm: a given seed yields the same
// permutation across rand releases and platforms.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand / rand_chacha crate documentation

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::split::{Partition, SplitRatios};

/// Shuffle `items` with `seed` and split them into train/test/validation.
///
/// # Arguments
/// * `items`  - All items to split (consumed by this function)
/// * `ratios` - Target proportions, see `SplitRatios::sizes`
/// * `seed`   - RNG seed; the same seed and input give the same partition
///
/// # Panics
/// If the three subsets do not add up to the input length. That can only
/// happen through a bug in this function, never through user input.
pub fn split_three_way<T>(mut items: Vec<T>, ratios: &SplitRatios, seed: u64) -> Partition<T> {
    let total = items.len();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    items.shuffle(&mut rng);

    let (n_train, n_test, _) = ratios.sizes(total);

    // split_off(n) keeps [0..n) and returns [n..)
    let mut rest   = items.split_off(n_train);
    let validation = rest.split_off(n_test);
    let partition  = Partition { train: items, test: rest, validation };

    assert_eq!(
        partition.len(),
        total,
        "partition lost or duplicated items: {} train + {} test + {} validation != {}",
        partition.train.len(),
        partition.test.len(),
        partition.validation.len(),
        total,
    );

    tracing::debug!(
        "Dataset split (seed {}): {} train, {} test, {} validation",
        seed,
        partition.train.len(),
        partition.test.len(),
        partition.validation.len(),
    );

    partition
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let p = split_three_way(items, &SplitRatios::DEFAULT, 1);
        assert_eq!(p.train.len(), 70);
        assert_eq!(p.test.len(), 20);
        assert_eq!(p.validation.len(), 10);
    }

    #[test]
    fn test_subsets_are_disjoint_and_complete() {
        let items: Vec<usize> = (0..57).collect();
        let p = split_three_way(items, &SplitRatios::DEFAULT, 7);

        let mut seen = HashSet::new();
        for item in p.train.iter().chain(&p.test).chain(&p.validation) {
            // insert() returns false for duplicates
            assert!(seen.insert(*item), "item {item} assigned twice");
        }
        assert_eq!(seen, (0..57).collect::<HashSet<_>>());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let items: Vec<usize> = (0..40).collect();
        let a = split_three_way(items.clone(), &SplitRatios::DEFAULT, 1);
        let b = split_three_way(items, &SplitRatios::DEFAULT, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_partition() {
        let items: Vec<usize> = (0..100).collect();
        let a = split_three_way(items.clone(), &SplitRatios::DEFAULT, 1);
        let b = split_three_way(items, &SplitRatios::DEFAULT, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_items_are_shuffled() {
        let items: Vec<usize> = (0..100).collect();
        let p = split_three_way(items, &SplitRatios::DEFAULT, 1);
        assert_ne!(p.train, (0..70).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_ratios() {
        let ratios = SplitRatios::new(0.5, 0.25, 0.25).unwrap();
        let items: Vec<usize> = (0..20).collect();
        let p = split_three_way(items, &ratios, 3);
        assert_eq!((p.train.len(), p.test.len(), p.validation.len()), (10, 5, 5));
    }

    #[test]
    fn test_empty_dataset() {
        let p = split_three_way(Vec::<usize>::new(), &SplitRatios::DEFAULT, 1);
        assert!(p.is_empty());
    }

    #[test]
    fn test_single_item_goes_to_training() {
        let p = split_three_way(vec!["only"], &SplitRatios::DEFAULT, 1);
        assert_eq!(p.train, ["only"]);
        assert!(p.test.is_empty());
        assert!(p.validation.is_empty());
    }
}
