//! SurveyLens - Survey CSV Scoring & Rank-Correlation Core
//!
//! Parses fixed-schema survey CSVs into scored respondent records and
//! computes the Spearman rank-correlation table consumed by the dashboard.

pub mod data;
pub mod stats;

pub use data::{
    build_snapshot, load_survey, DatasetSnapshot, LoaderError, RespondentRecord, SurveySchema,
    UsageGroup, Variable,
};
pub use stats::{
    correlation_matrix, spearman, CorrelationEntry, DatasetSummary, RankMethod, ScoreStats,
    SIGNIFICANCE_THRESHOLD,
};
