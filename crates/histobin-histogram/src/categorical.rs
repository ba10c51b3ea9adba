//! Counts of categorical labels
//!
//! The categorical counterpart of a histogram: one bar per distinct label,
//! ordered by label, placed at integer positions `0, 1, 2, ...`.

use std::collections::BTreeMap;

use serde::Serialize;

/// Occurrences of each distinct label, sorted by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoricalCounts {
    entries: Vec<(String, usize)>,
}

impl CategoricalCounts {
    /// Group `labels` and count each distinct value
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: BTreeMap<String, usize> = BTreeMap::new();
        for label in labels {
            *grouped.entry(label.as_ref().to_owned()).or_insert(0) += 1;
        }
        Self {
            entries: grouped.into_iter().collect(),
        }
    }

    /// Distinct labels in ascending order
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Count of each label, aligned with [`labels`](Self::labels)
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    /// Bar positions, `0.0, 1.0, ...`
    pub fn positions(&self) -> Vec<f64> {
        (0..self.entries.len()).map(|i| i as f64).collect()
    }

    /// Count for one label
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .binary_search_by(|(key, _)| key.as_str().cmp(label))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Total number of labels counted
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Percentage of all labels taken by each category
    pub fn probability(&self) -> Vec<f64> {
        crate::normalize::probabilities(&self.counts(), self.total())
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no label was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(label, count)` pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }
}
