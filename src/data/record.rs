//! Record builder: structured records to one table

use super::{
    GENDER, LUNCH, PARENTAL_LEVEL_OF_EDUCATION, RACE_ETHNICITY, READING_SCORE,
    TEST_PREPARATION_COURSE, WRITING_SCORE,
};
use crate::error::{PipelineError, PredictError, Result, Stage, StageExt};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw feature values of a single student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    gender: String,
    race_ethnicity: String,
    parental_level_of_education: String,
    lunch: String,
    test_preparation_course: String,
    reading_score: i64,
    writing_score: i64,
}

impl StudentRecord {
    /// Create a record; every field is required
    pub fn new(
        gender: impl Into<String>,
        race_ethnicity: impl Into<String>,
        parental_level_of_education: impl Into<String>,
        lunch: impl Into<String>,
        test_preparation_course: impl Into<String>,
        reading_score: i64,
        writing_score: i64,
    ) -> Self {
        Self {
            gender: gender.into(),
            race_ethnicity: race_ethnicity.into(),
            parental_level_of_education: parental_level_of_education.into(),
            lunch: lunch.into(),
            test_preparation_course: test_preparation_course.into(),
            reading_score,
            writing_score,
        }
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn race_ethnicity(&self) -> &str {
        &self.race_ethnicity
    }

    pub fn parental_level_of_education(&self) -> &str {
        &self.parental_level_of_education
    }

    pub fn lunch(&self) -> &str {
        &self.lunch
    }

    pub fn test_preparation_course(&self) -> &str {
        &self.test_preparation_course
    }

    pub fn reading_score(&self) -> i64 {
        self.reading_score
    }

    pub fn writing_score(&self) -> i64 {
        self.writing_score
    }

    /// Convert this record into a one-row table in canonical column order
    pub fn build_table(&self) -> std::result::Result<DataFrame, PipelineError> {
        build_table_from_records(std::slice::from_ref(self))
    }
}

/// Build an N-row table from `records`, keeping their order
pub fn build_table_from_records(
    records: &[StudentRecord],
) -> std::result::Result<DataFrame, PipelineError> {
    let table = records_to_frame(records).at_stage(Stage::BuildTable)?;
    tracing::info!(rows = table.height(), "Custom data as table:\n{}", table);
    Ok(table)
}

fn records_to_frame(records: &[StudentRecord]) -> Result<DataFrame> {
    if records.is_empty() {
        return Err(PredictError::Data(
            "cannot build a table from zero records".to_string(),
        ));
    }

    let df = DataFrame::new(vec![
        text_column(records, GENDER, StudentRecord::gender),
        text_column(records, RACE_ETHNICITY, StudentRecord::race_ethnicity),
        text_column(
            records,
            PARENTAL_LEVEL_OF_EDUCATION,
            StudentRecord::parental_level_of_education,
        ),
        text_column(records, LUNCH, StudentRecord::lunch),
        text_column(
            records,
            TEST_PREPARATION_COURSE,
            StudentRecord::test_preparation_course,
        ),
        score_column(records, READING_SCORE, StudentRecord::reading_score),
        score_column(records, WRITING_SCORE, StudentRecord::writing_score),
    ])?;

    Ok(df)
}

fn text_column(records: &[StudentRecord], name: &str, field: fn(&StudentRecord) -> &str) -> Column {
    let values: Vec<&str> = records.iter().map(field).collect();
    Column::new(name.into(), values)
}

fn score_column(records: &[StudentRecord], name: &str, field: fn(&StudentRecord) -> i64) -> Column {
    let values: Vec<i64> = records.iter().map(field).collect();
    Column::new(name.into(), values)
}
