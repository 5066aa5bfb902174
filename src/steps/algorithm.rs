// Algorithm catalogue and name lookup

use super::RecordError;
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Shell,
    Bucket,
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Shell,
        Algorithm::Bucket,
    ];

    /// Display name, e.g. "Bubble Sort"
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Counting => "Counting Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Bucket => "Bucket Sort",
        }
    }

    /// Lowercase one-word form accepted on the command line
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Shell => "shell",
            Algorithm::Bucket => "bucket",
        }
    }

    /// Counting, radix and bucket sort index auxiliary storage by value
    pub fn indexes_by_value(self) -> bool {
        matches!(
            self,
            Algorithm::Counting | Algorithm::Radix | Algorithm::Bucket
        )
    }

    /// Position in [`Algorithm::ALL`]
    pub fn index(self) -> usize {
        Algorithm::ALL
            .iter()
            .position(|&a| a == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RecordError;

    /// Accepts "Bubble Sort", "bubble sort", "bubble" or "bubble-sort"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let wanted = wanted.strip_suffix(" sort").unwrap_or(&wanted);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.short_name() == wanted)
            .ok_or_else(|| RecordError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_forms() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.short_name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("QUICK-SORT".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!(" heap_sort ".parse::<Algorithm>(), Ok(Algorithm::Heap));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "sort".parse::<Algorithm>(),
            Err(RecordError::UnknownAlgorithm("sort".to_string()))
        );
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(Algorithm::ALL[0], Algorithm::Bubble);
        assert_eq!(Algorithm::Bucket.index(), 9);
        assert_eq!(Algorithm::Merge.to_string(), "Merge Sort");
    }
}
