//! Step recording for instrumented sorting algorithms
//!
//! Every generator works on a private copy of the input and reports each
//! state-changing operation (swap, shift, write, merge) through a single
//! recording primitive, [`Trail::record`]. The result is a [`StepSequence`]:
//!
//! - the first step is the untouched input with [`Highlight::NONE`]
//! - one step per mutating event, paired with the indices that event touched
//! - the last step is the sorted array with [`Highlight::NONE`]
//!
//! Recording is deterministic: the same input and algorithm always produce
//! the same sequence.
//!
//! # Generators
//!
//! - [`exchange`]: bubble, insertion, selection and shell sort
//! - [`partition`]: merge and quick sort
//! - [`heap`]: heap sort
//! - [`distribution`]: counting, radix and bucket sort (value-indexed, bounded
//!   by [`ValueLimits`])

mod algorithm;
mod distribution;
mod exchange;
mod heap;
mod partition;

pub use algorithm::Algorithm;

use crate::config::ValueLimits;

/// Indices to emphasise for one step.
///
/// `primary` is drawn red and `secondary` green. When both are `None` the
/// whole array is drawn as settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Highlight {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

impl Highlight {
    /// Nothing highlighted: the array is settled
    pub const NONE: Highlight = Highlight {
        primary: None,
        secondary: None,
    };

    pub fn pair(primary: usize, secondary: usize) -> Self {
        Highlight {
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    pub fn single(primary: usize) -> Self {
        Highlight {
            primary: Some(primary),
            secondary: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }

    /// Index pair with `-1` standing in for "none"
    pub fn to_raw(&self) -> (i64, i64) {
        let raw = |slot: Option<usize>| slot.map_or(-1, |index| index as i64);
        (raw(self.primary), raw(self.secondary))
    }
}

/// One recorded state: a copy of the array plus its highlight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    snapshot: Vec<i64>,
    highlight: Highlight,
}

impl Step {
    pub fn snapshot(&self) -> &[i64] {
        &self.snapshot
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

/// The complete recording of one algorithm run. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The sorted array at the end of the run
    pub fn final_snapshot(&self) -> &[i64] {
        self.last().snapshot()
    }
}

impl std::ops::Index<usize> for StepSequence {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Errors raised while recording a run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A distribution sort got a value it cannot use as an array index
    #[error("{algorithm} cannot sort {value}: values must be between 0 and {max}")]
    UnsupportedValue {
        algorithm: Algorithm,
        value: i64,
        max: i64,
    },

    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Accumulates steps for one run.
///
/// Generators only ever see `&mut Trail`; the trail owns every snapshot.
#[derive(Debug)]
pub(crate) struct Trail {
    algorithm: Algorithm,
    steps: Vec<Step>,
}

impl Trail {
    /// Start a trail with the initial, unhighlighted snapshot
    pub(crate) fn begin(algorithm: Algorithm, values: &[i64]) -> Self {
        let mut trail = Trail {
            algorithm,
            steps: Vec::new(),
        };
        trail.record(values, Highlight::NONE);
        trail
    }

    /// Copy `values` into a new step
    pub(crate) fn record(&mut self, values: &[i64], highlight: Highlight) {
        self.steps.push(Step {
            snapshot: values.to_vec(),
            highlight,
        });
    }

    /// Close the trail with the settled final snapshot
    pub(crate) fn finish(mut self, values: &[i64]) -> StepSequence {
        self.record(values, Highlight::NONE);
        StepSequence {
            algorithm: self.algorithm,
            steps: self.steps,
        }
    }
}

/// Record a run by algorithm name with the default value limits
pub fn record(name: &str, values: &[i64]) -> Result<StepSequence, RecordError> {
    let algorithm: Algorithm = name.parse()?;
    algorithm.record(values, &ValueLimits::default())
}

impl Algorithm {
    /// Run this algorithm on a copy of `values`, recording every step
    pub fn record(
        self,
        values: &[i64],
        limits: &ValueLimits,
    ) -> Result<StepSequence, RecordError> {
        if self.indexes_by_value() {
            if let Some(&value) = values.iter().find(|&&v| !limits.admits(v)) {
                log::warn!("{} rejected value {}", self, value);
                return Err(RecordError::UnsupportedValue {
                    algorithm: self,
                    value,
                    max: limits.max_value(),
                });
            }
        }
        let table_error = |e: distribution::TableTooLarge| {
            log::warn!("{} cannot index values up to {}", self, e.0);
            RecordError::UnsupportedValue {
                algorithm: self,
                value: e.0,
                max: limits.max_value(),
            }
        };

        let mut work = values.to_vec();
        let mut trail = Trail::begin(self, values);

        match self {
            Algorithm::Bubble => exchange::bubble_sort(&mut work, &mut trail),
            Algorithm::Insertion => exchange::insertion_sort(&mut work, &mut trail),
            Algorithm::Selection => exchange::selection_sort(&mut work, &mut trail),
            Algorithm::Merge => partition::merge_sort(&mut work, &mut trail),
            Algorithm::Quick => partition::quick_sort(&mut work, &mut trail),
            Algorithm::Heap => heap::heap_sort(&mut work, &mut trail),
            Algorithm::Counting => {
                distribution::counting_sort(&mut work, &mut trail).map_err(table_error)?
            }
            Algorithm::Radix => distribution::radix_sort(&mut work, &mut trail),
            Algorithm::Shell => exchange::shell_sort(&mut work, &mut trail),
            Algorithm::Bucket => {
                distribution::bucket_sort(&mut work, &mut trail).map_err(table_error)?
            }
        }

        let sequence = trail.finish(&work);
        log::debug!(
            "recorded {} steps for {} on {} values",
            sequence.len(),
            self,
            values.len()
        );
        Ok(sequence)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Record `values` with `generator` and return the steps between the
    /// initial and final snapshots as `(snapshot, raw highlight)` pairs
    pub(crate) fn middle_steps(
        algorithm: Algorithm,
        values: &[i64],
        generator: fn(&mut [i64], &mut Trail),
    ) -> Vec<(Vec<i64>, (i64, i64))> {
        let mut work = values.to_vec();
        let mut trail = Trail::begin(algorithm, values);
        generator(&mut work, &mut trail);
        let sequence = trail.finish(&work);
        let steps: Vec<_> = sequence
            .iter()
            .map(|step| (step.snapshot().to_vec(), step.highlight().to_raw()))
            .collect();
        steps[1..steps.len() - 1].to_vec()
    }
}
