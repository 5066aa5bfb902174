// Value-indexed sorts: counting, radix, bucket
//
// Callers validate every value against `ValueLimits` before these run, so
// `value as usize` is always a non-negative index here.

use super::{Highlight, Trail};

/// The per-value table for `max` could not be allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct TableTooLarge(pub(super) i64);

/// Zeroed counters for every value in `0..=max`
fn value_table(max: i64) -> Result<Vec<usize>, TableTooLarge> {
    let len = usize::try_from(max)
        .ok()
        .and_then(|max| max.checked_add(1))
        .ok_or(TableTooLarge(max))?;
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|_| TableTooLarge(max))?;
    table.resize(len, 0);
    Ok(table)
}

/// Snapshots show the output buffer as it fills, last source element first
pub(super) fn counting_sort(
    values: &mut [i64],
    trail: &mut Trail,
) -> Result<(), TableTooLarge> {
    let Some(&max) = values.iter().max() else {
        return Ok(());
    };

    let mut count = value_table(max)?;
    for &value in values.iter() {
        count[value as usize] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![0; values.len()];
    for &value in values.iter().rev() {
        let position = &mut count[value as usize];
        *position -= 1;
        output[*position] = value;
        trail.record(&output, Highlight::pair(*position, *position + 1));
    }

    values.copy_from_slice(&output);
    Ok(())
}

/// LSD radix sort, one counting pass per decimal digit of the maximum
pub(super) fn radix_sort(values: &mut [i64], trail: &mut Trail) {
    let Some(&max) = values.iter().max() else {
        return;
    };

    let mut exp: i64 = 1;
    while max / exp > 0 {
        digit_pass(values, exp, trail);
        exp = match exp.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }
}

/// Stable counting sort on the digit selected by `exp`. Each pass starts
/// from a fresh zeroed output buffer.
fn digit_pass(values: &mut [i64], exp: i64, trail: &mut Trail) {
    let digit = |value: i64| ((value / exp) % 10) as usize;

    let mut count = [0usize; 10];
    for &value in values.iter() {
        count[digit(value)] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![0; values.len()];
    for &value in values.iter().rev() {
        let position = &mut count[digit(value)];
        *position -= 1;
        output[*position] = value;
        trail.record(&output, Highlight::pair(*position, *position + 1));
    }

    values.copy_from_slice(&output);
}

/// One bucket per value. Non-empty buckets are flushed back to the front of
/// the array in ascending order; the highlight names the bucket.
pub(super) fn bucket_sort(
    values: &mut [i64],
    trail: &mut Trail,
) -> Result<(), TableTooLarge> {
    let Some(&max) = values.iter().max() else {
        return Ok(());
    };

    // a bucket only ever holds copies of its own value
    let mut buckets = value_table(max)?;
    for &value in values.iter() {
        buckets[value as usize] += 1;
    }

    let mut filled = 0;
    for (bucket, &size) in buckets.iter().enumerate() {
        if size == 0 {
            continue;
        }
        values[filled..filled + size].fill(bucket as i64);
        filled += size;
        trail.record(values, Highlight::single(bucket));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::middle_steps;
    use super::*;
    use crate::steps::Algorithm;

    fn counting(values: &mut [i64], trail: &mut Trail) {
        counting_sort(values, trail).unwrap();
    }

    fn bucket(values: &mut [i64], trail: &mut Trail) {
        bucket_sort(values, trail).unwrap();
    }

    #[test]
    fn test_counting_fills_output_from_the_back() {
        let steps = middle_steps(Algorithm::Counting, &[2, 0, 2], counting);
        assert_eq!(
            steps,
            vec![
                (vec![0, 0, 2], (2, 3)),
                (vec![0, 0, 2], (0, 1)),
                (vec![0, 2, 2], (1, 2)),
            ]
        );
    }

    #[test]
    fn test_radix_restarts_each_digit_pass() {
        let steps = middle_steps(Algorithm::Radix, &[21, 12], radix_sort);
        assert_eq!(
            steps,
            vec![
                // ones digit
                (vec![0, 12], (1, 2)),
                (vec![21, 12], (0, 1)),
                // tens digit, fresh buffer
                (vec![12, 0], (0, 1)),
                (vec![12, 21], (1, 2)),
            ]
        );
    }

    #[test]
    fn test_radix_all_zero_has_no_passes() {
        assert!(middle_steps(Algorithm::Radix, &[0, 0], radix_sort).is_empty());
    }

    #[test]
    fn test_bucket_flushes_in_value_order() {
        let steps = middle_steps(Algorithm::Bucket, &[3, 1, 3, 0], bucket);
        assert_eq!(
            steps,
            vec![
                (vec![0, 1, 3, 0], (0, -1)),
                (vec![0, 1, 3, 0], (1, -1)),
                (vec![0, 1, 3, 3], (3, -1)),
            ]
        );
    }

    #[test]
    fn test_huge_value_table_fails_without_panicking() {
        let mut trail = Trail::begin(Algorithm::Counting, &[i64::MAX]);
        assert_eq!(
            counting_sort(&mut [i64::MAX], &mut trail),
            Err(TableTooLarge(i64::MAX))
        );

        let mut trail = Trail::begin(Algorithm::Bucket, &[0, i64::MAX]);
        assert_eq!(
            bucket_sort(&mut [0, i64::MAX], &mut trail),
            Err(TableTooLarge(i64::MAX))
        );
    }

    #[test]
    fn test_value_table_is_zeroed() {
        assert_eq!(value_table(3), Ok(vec![0; 4]));
        assert_eq!(value_table(-1), Err(TableTooLarge(-1)));
    }
}
