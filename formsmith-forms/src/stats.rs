//! Visit and submission statistics.

use serde::{Deserialize, Serialize};

/// Counters and the rates derived from them, in percent.
///
/// With no visits the submission rate is 0 and the bounce rate 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStats {
    pub visits: u64,
    pub submissions: u64,
    pub submission_rate: f64,
    pub bounce_rate: f64,
}

impl FormStats {
    pub fn from_counts(visits: u64, submissions: u64) -> Self {
        let submission_rate = if visits > 0 {
            submissions as f64 / visits as f64 * 100.0
        } else {
            0.0
        };
        Self {
            visits,
            submissions,
            submission_rate,
            bounce_rate: 100.0 - submission_rate,
        }
    }

    /// Totals over many forms.
    pub fn aggregate(counts: impl IntoIterator<Item = (u64, u64)>) -> Self {
        let (visits, submissions) = counts
            .into_iter()
            .fold((0, 0), |(v, s), (visits, submissions)| (v + visits, s + submissions));
        Self::from_counts(visits, submissions)
    }
}
