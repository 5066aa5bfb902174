// Heap sort over an implicit max-heap

use super::{Highlight, Trail};

pub(super) fn heap_sort(values: &mut [i64], trail: &mut Trail) {
    let n = values.len();

    for root in (0..n / 2).rev() {
        sift_down(values, n, root, trail);
    }

    for end in (1..n).rev() {
        values.swap(0, end);
        trail.record(values, Highlight::pair(0, end));
        sift_down(values, end, 0, trail);
    }
}

/// Restore the heap property below `root` within `values[..len]`,
/// recording each parent/child swap
fn sift_down(values: &mut [i64], len: usize, mut root: usize, trail: &mut Trail) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        values.swap(root, largest);
        trail.record(values, Highlight::pair(root, largest));
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::middle_steps;
    use super::*;
    use crate::steps::Algorithm;

    #[test]
    fn test_build_and_extract() {
        let steps = middle_steps(Algorithm::Heap, &[1, 3, 2], heap_sort);
        assert_eq!(
            steps,
            vec![
                (vec![3, 1, 2], (0, 1)), // build: root sinks
                (vec![2, 1, 3], (0, 2)), // extract 3
                (vec![1, 2, 3], (0, 1)), // extract 2
            ]
        );
    }

    #[test]
    fn test_sift_follows_larger_child() {
        let steps = middle_steps(Algorithm::Heap, &[1, 2, 5, 4, 3], heap_sort);
        let (first, highlight) = &steps[0];
        // index 1 (value 2) swaps with its larger child at index 3
        assert_eq!(first, &vec![1, 4, 5, 2, 3]);
        assert_eq!(*highlight, (1, 3));
        assert_eq!(steps[1], (vec![5, 4, 1, 2, 3], (0, 2)));
    }
}
