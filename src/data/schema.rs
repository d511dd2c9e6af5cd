//! Survey Schema Module
//! Declarative mapping from score variables to fixed CSV column indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four composite variables the correlation table is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Intensity,
    Dependency,
    Competence,
    Alienation,
}

impl Variable {
    /// Stable enumeration order used for pair generation and display.
    pub const ALL: [Variable; 4] = [
        Variable::Intensity,
        Variable::Dependency,
        Variable::Competence,
        Variable::Alienation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Variable::Intensity => "Intensity",
            Variable::Dependency => "Dependency",
            Variable::Competence => "Competence",
            Variable::Alienation => "Alienation",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column-index groups for one survey instrument.
///
/// Each composite score is the mean of the listed zero-based columns.
/// `heavy_user_column` deliberately reuses a column that also feeds the
/// intensity average: daily duration is both an intensity item and the
/// headline usage classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveySchema {
    pub intensity: Vec<usize>,
    pub dependency: Vec<usize>,
    pub competence: Vec<usize>,
    pub alienation: Vec<usize>,
    /// Variant instrument only: a single raw column, not averaged.
    pub boldness: Option<usize>,
    pub heavy_user_column: usize,
    pub heavy_user_cutoff: i64,
}

impl Default for SurveySchema {
    fn default() -> Self {
        Self {
            intensity: vec![2, 4, 5, 18, 19],
            dependency: vec![3, 6, 20, 21, 22],
            competence: vec![7, 8, 9, 10],
            alienation: vec![13, 14, 15, 16, 17],
            boldness: None,
            heavy_user_column: 2,
            heavy_user_cutoff: 4,
        }
    }
}

impl SurveySchema {
    /// The variant instrument with the extra raw boldness item.
    pub fn variant() -> Self {
        Self {
            boldness: Some(11),
            ..Self::default()
        }
    }

    /// Column group backing a composite variable.
    pub fn columns(&self, variable: Variable) -> &[usize] {
        match variable {
            Variable::Intensity => &self.intensity,
            Variable::Dependency => &self.dependency,
            Variable::Competence => &self.competence,
            Variable::Alienation => &self.alienation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_matches_legacy_instrument() {
        let schema = SurveySchema::default();
        assert_eq!(schema.columns(Variable::Intensity), &[2, 4, 5, 18, 19]);
        assert_eq!(schema.columns(Variable::Dependency), &[3, 6, 20, 21, 22]);
        assert_eq!(schema.columns(Variable::Competence), &[7, 8, 9, 10]);
        assert_eq!(schema.columns(Variable::Alienation), &[13, 14, 15, 16, 17]);
        assert_eq!(schema.boldness, None);
        assert_eq!(schema.heavy_user_column, 2);
        assert_eq!(schema.heavy_user_cutoff, 4);
    }

    #[test]
    fn variant_schema_adds_boldness_only() {
        let schema = SurveySchema::variant();
        assert_eq!(schema.boldness, Some(11));
        assert_eq!(schema.intensity, SurveySchema::default().intensity);
    }

    #[test]
    fn schema_deserializes_with_partial_overrides() {
        let schema: SurveySchema =
            serde_json::from_str(r#"{"intensity": [1, 2], "heavy_user_cutoff": 3}"#).unwrap();
        assert_eq!(schema.intensity, vec![1, 2]);
        assert_eq!(schema.heavy_user_cutoff, 3);
        // Unspecified groups fall back to the legacy defaults
        assert_eq!(schema.competence, vec![7, 8, 9, 10]);
    }
}
