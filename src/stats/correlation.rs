//! Correlation Engine Module
//! Spearman rank correlation over the four composite score variables.

use rayon::prelude::*;
use serde::Serialize;

use crate::data::{RespondentRecord, Variable};

/// Magnitude threshold above which a pair is flagged significant.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.25;

/// How ranks are assigned to tied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMethod {
    /// Consecutive ranks by stable sort order; tied values keep their input
    /// order and receive distinct ranks. Matches the legacy dashboard.
    #[default]
    Legacy,
    /// Tied values share the average of their ranks. The coefficient still
    /// uses the simplified d-squared formula rather than Pearson over the
    /// ranks, so results can differ from the textbook tie-corrected value
    /// when ties are present.
    TieAveraged,
}

/// Correlation result for one unordered variable pair.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationEntry {
    pub variable_a: Variable,
    pub variable_b: Variable,
    pub rho: f64,
    pub significant: bool,
}

/// 1-based ranks of `values` (rank 1 = smallest).
fn ranks(values: &[f64], method: RankMethod) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    // Stable sort keeps tied values in input order
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    match method {
        RankMethod::Legacy => {
            for (position, &index) in order.iter().enumerate() {
                ranks[index] = (position + 1) as f64;
            }
        }
        RankMethod::TieAveraged => {
            let mut start = 0;
            while start < n {
                let mut end = start;
                while end + 1 < n && values[order[end + 1]] == values[order[start]] {
                    end += 1;
                }
                let shared = (start + end + 2) as f64 / 2.0;
                for &index in &order[start..=end] {
                    ranks[index] = shared;
                }
                start = end + 1;
            }
        }
    }
    ranks
}

/// Spearman's rank correlation coefficient.
///
/// Degenerate inputs (length mismatch, n <= 1) return 0.0 rather than
/// erroring; n <= 1 would otherwise divide by zero.
pub fn spearman(x: &[f64], y: &[f64], method: RankMethod) -> f64 {
    let n = x.len();
    if n != y.len() || n <= 1 {
        return 0.0;
    }

    let rank_x = ranks(x, method);
    let rank_y = ranks(y, method);
    let d_squared: f64 = rank_x
        .iter()
        .zip(rank_y.iter())
        .map(|(a, b)| (a - b).powi(2))
        .sum();

    let n = n as f64;
    1.0 - (6.0 * d_squared) / (n * (n * n - 1.0))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// All C(4,2) unordered pairs in the fixed `Variable::ALL` order.
fn variable_pairs() -> Vec<(Variable, Variable)> {
    let mut pairs = Vec::with_capacity(6);
    for (i, &a) in Variable::ALL.iter().enumerate() {
        for &b in &Variable::ALL[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Correlation table over the four core variables, sorted descending by
/// |rho|. The sort is stable, so equal magnitudes keep enumeration order.
pub fn correlation_matrix(records: &[RespondentRecord], method: RankMethod) -> Vec<CorrelationEntry> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<CorrelationEntry> = variable_pairs()
        .par_iter()
        .map(|&(variable_a, variable_b)| {
            let x: Vec<f64> = records.iter().map(|r| r.score(variable_a)).collect();
            let y: Vec<f64> = records.iter().map(|r| r.score(variable_b)).collect();
            let rho = round3(spearman(&x, &y, method));
            CorrelationEntry {
                variable_a,
                variable_b,
                rho,
                significant: rho.abs() >= SIGNIFICANCE_THRESHOLD,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.rho
            .abs()
            .partial_cmp(&a.rho.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    entries
}
