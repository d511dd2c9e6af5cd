//! Statistics Calculator Module
//! Descriptive per-variable statistics and KPI counts for the dashboard.

use serde::Serialize;

use crate::data::{RespondentRecord, UsageGroup, Variable};

/// Descriptive statistics for one composite score across all respondents.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ScoreStats {
    fn default() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// KPI block consumed by the dashboard cards.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub respondents: usize,
    pub heavy_users: usize,
    pub heavy_user_share: f64,
    pub intensity: ScoreStats,
    pub dependency: ScoreStats,
    pub competence: ScoreStats,
    pub alienation: ScoreStats,
}

impl DatasetSummary {
    pub fn stats(&self, variable: Variable) -> &ScoreStats {
        match variable {
            Variable::Intensity => &self.intensity,
            Variable::Dependency => &self.dependency,
            Variable::Competence => &self.competence,
            Variable::Alienation => &self.alienation,
        }
    }
}

/// Compute descriptive statistics for an array of values.
pub fn score_stats(values: &[f64]) -> ScoreStats {
    let n = values.len();
    if n == 0 {
        return ScoreStats::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = values.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let variance = if n > 1 {
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    } else {
        0.0
    };

    ScoreStats {
        mean,
        median,
        std: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
    }
}

fn variable_stats(records: &[RespondentRecord], variable: Variable) -> ScoreStats {
    let values: Vec<f64> = records.iter().map(|r| r.score(variable)).collect();
    score_stats(&values)
}

/// Summarize a record collection into the dashboard KPI block.
pub fn summarize(records: &[RespondentRecord]) -> DatasetSummary {
    let heavy_users = records
        .iter()
        .filter(|r| r.usage_group == UsageGroup::HeavyUser)
        .count();
    let heavy_user_share = if records.is_empty() {
        0.0
    } else {
        heavy_users as f64 / records.len() as f64
    };

    DatasetSummary {
        respondents: records.len(),
        heavy_users,
        heavy_user_share,
        intensity: variable_stats(records, Variable::Intensity),
        dependency: variable_stats(records, Variable::Dependency),
        competence: variable_stats(records, Variable::Competence),
        alienation: variable_stats(records, Variable::Alienation),
    }
}
