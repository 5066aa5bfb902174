// In-place comparison sorts: bubble, insertion, selection, shell

use super::{Highlight, Trail};

/// One step per adjacent swap, highlighting `(j, j + 1)`
pub(super) fn bubble_sort(values: &mut [i64], trail: &mut Trail) {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                trail.record(values, Highlight::pair(j, j + 1));
            }
        }
    }
}

/// Marks the key's slot, then one step per right shift and one for the
/// final placement
pub(super) fn insertion_sort(values: &mut [i64], trail: &mut Trail) {
    for i in 1..values.len() {
        let key = values[i];
        trail.record(values, Highlight::pair(i, i));

        // `slot` is the hole the key will eventually fill
        let mut slot = i;
        while slot > 0 && values[slot - 1] > key {
            values[slot] = values[slot - 1];
            trail.record(values, Highlight::pair(slot - 1, slot));
            slot -= 1;
        }

        values[slot] = key;
        trail.record(values, Highlight::pair(slot, slot));
    }
}

/// One step per pass: the swap of position `i` with the minimum found
pub(super) fn selection_sort(values: &mut [i64], trail: &mut Trail) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
        trail.record(values, Highlight::pair(i, min_index));
    }
}

/// Gapped insertion sort with gaps n/2, n/4, ..., 1
pub(super) fn shell_sort(values: &mut [i64], trail: &mut Trail) {
    let n = values.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let held = values[i];
            let mut j = i;
            while j >= gap && values[j - gap] > held {
                values[j] = values[j - gap];
                trail.record(values, Highlight::pair(j, j - gap));
                j -= gap;
            }
            values[j] = held;
            trail.record(values, Highlight::pair(j, i));
        }
        gap /= 2;
    }
}
