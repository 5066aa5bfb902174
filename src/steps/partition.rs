// Divide-and-conquer sorts: merge and quick
//
// Both recurse over inclusive index ranges `left..=right` of one working
// slice. Steps are only emitted through the trail passed down the recursion.

use super::{Highlight, Trail};

/// One step per completed merge, highlighting the merged range's ends
pub(super) fn merge_sort(values: &mut [i64], trail: &mut Trail) {
    if !values.is_empty() {
        merge_range(values, 0, values.len() - 1, trail);
    }
}

fn merge_range(values: &mut [i64], left: usize, right: usize, trail: &mut Trail) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_range(values, left, mid, trail);
    merge_range(values, mid + 1, right, trail);
    merge_runs(values, left, mid, right);
    trail.record(values, Highlight::pair(left, right));
}

/// Merge the sorted runs `left..=mid` and `mid+1..=right`. Stable.
fn merge_runs(values: &mut [i64], left: usize, mid: usize, right: usize) {
    let lower = values[left..=mid].to_vec();
    let upper = values[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lower.len() && j < upper.len() {
        if lower[i] <= upper[j] {
            values[k] = lower[i];
            i += 1;
        } else {
            values[k] = upper[j];
            j += 1;
        }
        k += 1;
    }
    for &rest in lower[i..].iter().chain(&upper[j..]) {
        values[k] = rest;
        k += 1;
    }
}

/// Lomuto quick sort with the last element as pivot
pub(super) fn quick_sort(values: &mut [i64], trail: &mut Trail) {
    if !values.is_empty() {
        quick_range(values, 0, values.len() - 1, trail);
    }
}

fn quick_range(values: &mut [i64], left: usize, right: usize, trail: &mut Trail) {
    if left >= right {
        return;
    }
    let pivot_index = partition(values, left, right, trail);
    if pivot_index > left {
        quick_range(values, left, pivot_index - 1, trail);
    }
    quick_range(values, pivot_index + 1, right, trail);
}

/// Records every partition swap (including self-swaps) and the final pivot
/// placement. Returns the pivot's resting index.
fn partition(values: &mut [i64], left: usize, right: usize, trail: &mut Trail) -> usize {
    let pivot = values[right];
    let mut store = left;

    for j in left..right {
        if values[j] < pivot {
            values.swap(store, j);
            trail.record(values, Highlight::pair(store, j));
            store += 1;
        }
    }

    values.swap(store, right);
    trail.record(values, Highlight::pair(store, right));
    store
}

#[cfg(test)]
mod tests {
    use super::super::test_support::middle_steps;
    use super::*;
    use crate::steps::Algorithm;

    #[test]
    fn test_merge_one_step_per_merge() {
        let steps = middle_steps(Algorithm::Merge, &[4, 3, 2, 1], merge_sort);
        assert_eq!(
            steps,
            vec![
                (vec![3, 4, 2, 1], (0, 1)),
                (vec![3, 4, 1, 2], (2, 3)),
                (vec![1, 2, 3, 4], (0, 3)),
            ]
        );
    }

    #[test]
    fn test_merge_records_even_when_already_ordered() {
        let steps = middle_steps(Algorithm::Merge, &[1, 2], merge_sort);
        assert_eq!(steps, vec![(vec![1, 2], (0, 1))]);
    }

    #[test]
    fn test_merge_single_element() {
        assert!(middle_steps(Algorithm::Merge, &[7], merge_sort).is_empty());
    }

    #[test]
    fn test_quick_partition_swaps_then_pivot() {
        // pivot 2: 1 < 2 swaps with itself, then 2 lands at index 1
        let steps = middle_steps(Algorithm::Quick, &[1, 3, 2], quick_sort);
        assert_eq!(
            steps,
            vec![(vec![1, 3, 2], (0, 0)), (vec![1, 2, 3], (1, 2))]
        );
    }

    #[test]
    fn test_quick_pivot_at_left_edge() {
        let steps = middle_steps(Algorithm::Quick, &[2, 1], quick_sort);
        assert_eq!(steps, vec![(vec![1, 2], (0, 1))]);
    }
}
