//! Dataset Loader Module
//! The single asynchronous boundary: fetch the CSV resource, then run the
//! pure scoring and correlation pipeline into an immutable snapshot.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::data::parser::{parse_records, RespondentRecord};
use crate::data::schema::SurveySchema;
use crate::stats::{correlation_matrix, summarize, CorrelationEntry, DatasetSummary, RankMethod};

/// Defensive cap on the one-shot resource read.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch survey CSV: {0}")]
    FetchFailed(String),
    #[error("No usable survey data after parsing")]
    NoData,
}

/// Everything the presentation layer reads for one data load.
///
/// Built once per load and replaced wholesale on reload; consumers never
/// mutate it in place.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSnapshot {
    pub records: Vec<RespondentRecord>,
    pub correlation_table: Vec<CorrelationEntry>,
    pub summary: DatasetSummary,
}

/// Run the pure pipeline over already-fetched CSV text.
pub fn build_snapshot(
    csv_text: &str,
    schema: &SurveySchema,
    rank_method: RankMethod,
) -> Result<DatasetSnapshot, LoaderError> {
    let records = parse_records(csv_text, schema);
    if records.is_empty() {
        return Err(LoaderError::NoData);
    }
    debug!(records = records.len(), "parsed respondent records");

    let correlation_table = correlation_matrix(&records, rank_method);
    let summary = summarize(&records);

    Ok(DatasetSnapshot {
        records,
        correlation_table,
        summary,
    })
}

/// Fetch the CSV resource and build a snapshot from it.
///
/// One read to completion, no retry; a failed or timed-out read surfaces as
/// `FetchFailed`, an empty parse result as `NoData`.
pub async fn load_survey(
    path: &Path,
    schema: &SurveySchema,
    rank_method: RankMethod,
) -> Result<DatasetSnapshot, LoaderError> {
    let csv_text = match tokio::time::timeout(FETCH_TIMEOUT, tokio::fs::read_to_string(path)).await
    {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => return Err(LoaderError::FetchFailed(e.to_string())),
        Err(_) => {
            return Err(LoaderError::FetchFailed(format!(
                "read of {} timed out after {}s",
                path.display(),
                FETCH_TIMEOUT.as_secs()
            )))
        }
    };

    let snapshot = build_snapshot(&csv_text, schema, rank_method)?;
    info!(
        path = %path.display(),
        respondents = snapshot.records.len(),
        "survey dataset loaded"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_records_table_and_summary() {
        let csv = "\
header
1,1,5,1,5,5,1,1,1,1,1,1,1,5,5,5,5,5,5,5,1,1,1
1,1,2,3,2,2,3,4,4,4,4,1,1,2,2,2,2,2,2,2,3,3,3
";
        let snapshot =
            build_snapshot(csv, &SurveySchema::default(), RankMethod::Legacy).unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.correlation_table.len(), 6);
        assert_eq!(snapshot.summary.respondents, 2);
        assert_eq!(snapshot.summary.heavy_users, 1);
    }

    #[test]
    fn empty_parse_result_is_no_data() {
        let err = build_snapshot("header\n\n  \n", &SurveySchema::default(), RankMethod::Legacy)
            .unwrap_err();
        assert!(matches!(err, LoaderError::NoData));
    }

    #[tokio::test]
    async fn missing_file_is_fetch_failed() {
        let err = load_survey(
            Path::new("/nonexistent/survey.csv"),
            &SurveySchema::default(),
            RankMethod::Legacy,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LoaderError::FetchFailed(_)));
    }
}
