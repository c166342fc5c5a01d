//! Binary classification metrics.
//!
//! ## Purpose
//!
//! Computes accuracy, precision, recall and F1 from the four cells of a
//! confusion matrix.
//!
//! ## Key concepts
//!
//! * **Accuracy**: `(TP + TN) / (TP + FP + TN + FN)`.
//! * **Precision**: `TP / (TP + FP)`.
//! * **Recall**: `TP / (TP + FN)`.
//! * **F1**: harmonic mean `2PR / (P + R)`.
//!
//! ## Invariants
//!
//! * Any ratio whose denominator is zero is defined as zero.
//! * All metrics lie in `[0, 1]`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::constant;

/// Confusion-matrix counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionMatrix {
    /// True positives.
    pub tp: u64,

    /// False positives.
    pub fp: u64,

    /// True negatives.
    pub tn: u64,

    /// False negatives.
    pub fn_: u64,
}

impl ConfusionMatrix {
    /// Build from the four counts.
    pub const fn new(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    /// Total observations, saturating at `u64::MAX`.
    pub const fn total(&self) -> u64 {
        self.tp
            .saturating_add(self.fp)
            .saturating_add(self.tn)
            .saturating_add(self.fn_)
    }
}

/// Accuracy, precision, recall and F1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationMetrics<T> {
    /// Fraction of all predictions that are correct.
    pub accuracy: T,

    /// Fraction of predicted positives that are real positives.
    pub precision: T,

    /// Fraction of real positives that were predicted positive.
    pub recall: T,

    /// Harmonic mean of precision and recall.
    pub f1: T,
}

#[inline]
fn ratio<T: Float>(num: u64, den: u64) -> T {
    if den == 0 {
        return T::zero();
    }
    T::from(num).unwrap_or_else(T::nan) / T::from(den).unwrap_or_else(T::nan)
}

impl<T: Float> ClassificationMetrics<T> {
    /// Compute every metric; an empty matrix yields all zeros.
    pub fn from_counts(m: &ConfusionMatrix) -> Self {
        let accuracy = ratio(m.tp.saturating_add(m.tn), m.total());
        let precision: T = ratio(m.tp, m.tp.saturating_add(m.fp));
        let recall: T = ratio(m.tp, m.tp.saturating_add(m.fn_));

        let pr_sum = precision + recall;
        let f1 = if pr_sum > T::zero() {
            constant::<T>(2.0) * precision * recall / pr_sum
        } else {
            T::zero()
        };

        Self {
            accuracy,
            precision,
            recall,
            f1,
        }
    }
}
