//! Score Deriver Module
//! Turns raw survey CSV text into scored respondent records.

use serde::Serialize;

use crate::data::schema::{SurveySchema, Variable};

/// Usage-intensity classification from the daily-duration item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageGroup {
    HeavyUser,
    ModerateOrLight,
}

/// One parsed, scored survey participant.
#[derive(Debug, Clone, Serialize)]
pub struct RespondentRecord {
    /// 1-based position in the file, assigned before row filtering, so ids
    /// are not guaranteed contiguous. Display ordering only.
    pub id: u32,
    pub intensity: f64,
    pub dependency: f64,
    pub competence: f64,
    pub alienation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boldness: Option<f64>,
    pub usage_group: UsageGroup,
}

impl RespondentRecord {
    /// Composite score for one of the four core variables.
    pub fn score(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Intensity => self.intensity,
            Variable::Dependency => self.dependency,
            Variable::Competence => self.competence,
            Variable::Alienation => self.alienation,
        }
    }
}

/// Split one CSV line on commas that sit outside double-quoted spans.
/// A quoted field may contain literal commas.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Raw ordinal value at a fixed column index. Missing or non-numeric cells
/// default to 0 and still contribute to the composite average.
fn cell(fields: &[String], index: usize) -> f64 {
    fields
        .get(index)
        .and_then(|field| field.trim().trim_matches('"').trim().parse::<i64>().ok())
        .unwrap_or(0) as f64
}

fn mean_of(fields: &[String], columns: &[usize]) -> f64 {
    let sum: f64 = columns.iter().map(|&idx| cell(fields, idx)).sum();
    round2(sum / columns.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parse the full CSV text into respondent records.
///
/// The first line is a header and is skipped regardless of content. Blank
/// lines are dropped but still consume their ordinal, as does any row whose
/// intensity score does not come out as a finite number.
pub fn parse_records(csv_text: &str, schema: &SurveySchema) -> Vec<RespondentRecord> {
    let mut records = Vec::new();

    for (position, line) in csv_text.lines().skip(1).enumerate() {
        let id = (position + 1) as u32;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_fields(line);
        let intensity = mean_of(&fields, &schema.intensity);
        if !intensity.is_finite() {
            continue;
        }

        let usage_group = if cell(&fields, schema.heavy_user_column) >= schema.heavy_user_cutoff as f64
        {
            UsageGroup::HeavyUser
        } else {
            UsageGroup::ModerateOrLight
        };

        records.push(RespondentRecord {
            id,
            intensity,
            dependency: mean_of(&fields, &schema.dependency),
            competence: mean_of(&fields, &schema.competence),
            alienation: mean_of(&fields, &schema.alienation),
            boldness: schema.boldness.map(|idx| cell(&fields, idx)),
            usage_group,
        });
    }

    records
}
