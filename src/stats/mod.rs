//! Stats module - correlation engine and dashboard summary statistics

mod calculator;
mod correlation;

pub use calculator::{score_stats, summarize, DatasetSummary, ScoreStats};
pub use correlation::{
    correlation_matrix, spearman, CorrelationEntry, RankMethod, SIGNIFICANCE_THRESHOLD,
};
