//! Input records and the tabular schema the preprocessor expects
//!
//! A [`StudentRecord`] is one subject's raw feature values. The record
//! builder turns one or more records into a polars `DataFrame` whose
//! columns follow [`REQUIRED_COLUMNS`] exactly.

mod record;

pub use record::{build_table_from_records, StudentRecord};

pub const GENDER: &str = "gender";
pub const RACE_ETHNICITY: &str = "race_ethnicity";
pub const PARENTAL_LEVEL_OF_EDUCATION: &str = "parental_level_of_education";
pub const LUNCH: &str = "lunch";
pub const TEST_PREPARATION_COURSE: &str = "test_preparation_course";
pub const READING_SCORE: &str = "reading_score";
pub const WRITING_SCORE: &str = "writing_score";

/// Columns every input table must carry, in canonical order
pub const REQUIRED_COLUMNS: [&str; 7] = [
    GENDER,
    RACE_ETHNICITY,
    PARENTAL_LEVEL_OF_EDUCATION,
    LUNCH,
    TEST_PREPARATION_COURSE,
    READING_SCORE,
    WRITING_SCORE,
];

/// String-valued feature columns
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    GENDER,
    RACE_ETHNICITY,
    PARENTAL_LEVEL_OF_EDUCATION,
    LUNCH,
    TEST_PREPARATION_COURSE,
];

/// Integer-valued feature columns
pub const NUMERIC_COLUMNS: [&str; 2] = [READING_SCORE, WRITING_SCORE];
