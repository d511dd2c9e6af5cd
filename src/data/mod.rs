//! Data module - survey schema, CSV parsing and dataset loading

mod loader;
mod parser;
mod schema;

pub use loader::{build_snapshot, load_survey, DatasetSnapshot, LoaderError};
pub use parser::{parse_records, RespondentRecord, UsageGroup};
pub use schema::{SurveySchema, Variable};
