//! Bounded rolling window of past overall scores.

use std::collections::VecDeque;

/// Aggregate view of the history without exposing the raw series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistorySummary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Append-only score series. The oldest entry is evicted once `capacity`
/// is reached.
#[derive(Debug, Clone)]
pub struct ScoreHistory {
    scores: VecDeque<f64>,
    capacity: usize,
}

impl ScoreHistory {
    /// A capacity of 0 is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            scores: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn push(&mut self, score: f64) {
        if self.scores.len() == self.capacity {
            self.scores.pop_front();
        }
        self.scores.push_back(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy of the whole series, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.scores.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn summary(&self) -> HistorySummary {
        if self.scores.is_empty() {
            return HistorySummary::default();
        }
        let count = self.scores.len();
        let (min, max, sum) = self
            .scores
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY, 0.0), |(lo, hi, sum), &s| {
                (lo.min(s), hi.max(s), sum + s)
            });
        HistorySummary {
            count,
            mean: sum / count as f64,
            min,
            max,
        }
    }
}

/// Population mean and standard deviation. `(0.0, 0.0)` when empty.
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Mean of the last `window` values, `None` when there are none.
pub fn tail_mean(values: &[f64], window: usize) -> Option<f64> {
    let start = values.len().saturating_sub(window);
    let tail = &values[start..];
    if tail.is_empty() {
        None
    } else {
        Some(tail.iter().sum::<f64>() / tail.len() as f64)
    }
}
