//! Order and search utilities layered on the container
//!
//! These operate on the container's indexing contract only: the searches go
//! through the public live-element iterator and report logical indices;
//! shuffle and sort permute the written physical range, moving each value
//! together with its state tag so tombstone accounting stays intact.

use crate::vector::TombVec;
use rand::Rng;

/// Uniformly permute the elements using the thread-local rng
pub fn shuffle<T>(vec: &mut TombVec<T>) {
    shuffle_with(vec, &mut rand::thread_rng());
}

/// Uniformly permute the elements with a caller-supplied rng
///
/// Fisher-Yates over the written range. Tombstoned slots take part in the
/// swaps (value and tag move together), so the live sequence is uniformly
/// permuted while the tombstone count is unchanged.
pub fn shuffle_with<T, R: Rng>(vec: &mut TombVec<T>, rng: &mut R) {
    let used = vec.used();
    for i in (1..used).rev() {
        let j = rng.gen_range(0..=i);
        vec.swap_physical(i, j);
    }
}

/// In-place quicksort by a strict-order predicate
///
/// `before(a, b)` returns true when `a` must come before `b`. The sort runs
/// over the full written range, so tombstoned values participate in the
/// partitioning and tombstones end up wherever their values land; compact
/// first (for instance via `resize(len())`) when that matters.
pub fn tv_sort<T, F>(vec: &mut TombVec<T>, before: F)
where
    F: Fn(&T, &T) -> bool,
{
    let used = vec.used();
    if used > 1 {
        quick_sort(vec, 0, used - 1, &before);
    }
}

fn quick_sort<T, F>(vec: &mut TombVec<T>, low: usize, high: usize, before: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if low >= high {
        return;
    }

    let pivot = partition(vec, low, high, before);
    if pivot > low {
        quick_sort(vec, low, pivot - 1, before);
    }
    if pivot < high {
        quick_sort(vec, pivot + 1, high, before);
    }
}

/// Lomuto partition with the pivot parked at `high`
fn partition<T, F>(vec: &mut TombVec<T>, low: usize, high: usize, before: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mid = low + (high - low) / 2;
    vec.swap_physical(mid, high);

    let mut store = low;
    for probe in low..high {
        if before(vec.physical_value(probe), vec.physical_value(high)) {
            vec.swap_physical(store, probe);
            store += 1;
        }
    }

    vec.swap_physical(store, high);
    store
}

/// Logical index of the first live element matching the predicate
pub fn search_begin<T>(vec: &TombVec<T>, matches: impl Fn(&T) -> bool) -> Option<usize> {
    vec.iter().position(|value| matches(value))
}

/// Logical index of the last live element matching the predicate
pub fn search_end<T>(vec: &TombVec<T>, matches: impl Fn(&T) -> bool) -> Option<usize> {
    vec.iter().rposition(|value| matches(value))
}

/// Logical indices of every live element matching the predicate
pub fn search_all<T>(vec: &TombVec<T>, matches: impl Fn(&T) -> bool) -> Vec<usize> {
    vec.iter()
        .enumerate()
        .filter(|(_, value)| matches(value))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_even(value: &i32) -> bool {
        value % 2 == 0
    }

    #[test]
    fn test_search_begin_after_front_removal() {
        let mut vec: TombVec<i32> = (1..=10).collect();
        vec.pop_front().unwrap();

        // Live sequence 2..=10: the first even element sits at logical 0
        assert_eq!(search_begin(&vec, is_even), Some(0));
    }

    #[test]
    fn test_search_end_after_edge_removals() {
        let mut vec: TombVec<i32> = (1..=10).collect();
        vec.pop_front().unwrap();
        vec.pop_back().unwrap();

        // Live sequence 2..=9: the last even element (8) sits at logical 6
        assert_eq!(search_end(&vec, is_even), Some(6));
    }

    #[test]
    fn test_search_all_after_edge_removals() {
        let mut vec: TombVec<i32> = (1..=10).collect();
        vec.pop_front().unwrap();
        vec.pop_back().unwrap();

        assert_eq!(search_all(&vec, is_even), vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_search_misses() {
        let vec: TombVec<i32> = (1..=5).collect();
        assert_eq!(search_begin(&vec, |v| *v > 100), None);
        assert_eq!(search_end(&vec, |v| *v > 100), None);
        assert!(search_all(&vec, |v| *v > 100).is_empty());

        let empty: TombVec<i32> = TombVec::new();
        assert_eq!(search_begin(&empty, is_even), None);
    }

    #[test]
    fn test_sort_reversed_input() {
        let mut vec: TombVec<i32> = (1..=20).rev().collect();
        tv_sort(&mut vec, |a, b| a < b);

        let sorted: Vec<i32> = vec.iter().copied().collect();
        assert_eq!(sorted, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_descending_predicate() {
        let mut vec = TombVec::from([3, 1, 4, 1, 5, 9, 2, 6]);
        tv_sort(&mut vec, |a, b| a > b);

        let sorted: Vec<i32> = vec.iter().copied().collect();
        assert_eq!(sorted, vec![9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_sort_preserves_multiset() {
        let mut vec = TombVec::from([5, 3, 5, 1, 3, 5]);
        tv_sort(&mut vec, |a, b| a < b);

        let sorted: Vec<i32> = vec.iter().copied().collect();
        assert_eq!(sorted, vec![1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_trivial_inputs() {
        let mut empty: TombVec<i32> = TombVec::new();
        tv_sort(&mut empty, |a, b| a < b);
        assert!(empty.is_empty());

        let mut single = TombVec::from([7]);
        tv_sort(&mut single, |a, b| a < b);
        assert_eq!(single[0], 7);
    }

    #[test]
    fn test_sort_moves_tombstoned_values_too() {
        let mut vec: TombVec<i32> = (1..=10).collect();
        vec.erase(4).unwrap();
        assert_eq!(vec.tombstones(), 1);

        tv_sort(&mut vec, |a, b| a < b);

        // The live multiset is intact and ordered once the tombstone is
        // swept out
        vec.resize(vec.len());
        let sorted: Vec<i32> = vec.iter().copied().collect();
        assert_eq!(sorted, vec![1, 2, 3, 4, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_keeps_live_multiset() {
        let mut vec: TombVec<i32> = (1..=20).collect();
        vec.pop_back().unwrap();
        vec.pop_front().unwrap();
        assert_eq!(vec.tombstones(), 2);

        let mut rng = StdRng::seed_from_u64(42);
        shuffle_with(&mut vec, &mut rng);

        assert_eq!(vec.len(), 18);
        assert_eq!(vec.tombstones(), 2);

        let mut values: Vec<i32> = vec.iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (2..=19).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_permutes_with_seeded_rng() {
        let mut vec: TombVec<i32> = (1..=50).collect();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_with(&mut vec, &mut rng);

        let shuffled: Vec<i32> = vec.iter().copied().collect();
        assert_ne!(shuffled, (1..=50).collect::<Vec<_>>());
    }
}
