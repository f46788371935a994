//! Fitted preprocessing artifact
//!
//! The preprocessor is produced by an offline training job and persisted
//! next to the model. At inference time it is only applied:
//! - Standard scaling of numeric columns with fitted mean/std
//! - One-hot encoding of categorical columns with fitted category lists

mod encoder;
mod pipeline;
mod scaler;

pub use encoder::CategoricalColumn;
pub use pipeline::ColumnPreprocessor;
pub use scaler::NumericColumn;

use crate::data::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};

/// Category levels of the student performance dataset, per categorical column
pub const KNOWN_CATEGORIES: [(&str, &[&str]); 5] = [
    ("gender", &["female", "male"]),
    ("race_ethnicity", &["group A", "group B", "group C", "group D", "group E"]),
    (
        "parental_level_of_education",
        &[
            "associate's degree",
            "bachelor's degree",
            "high school",
            "master's degree",
            "some college",
            "some high school",
        ],
    ),
    ("lunch", &["free/reduced", "standard"]),
    ("test_preparation_course", &["completed", "none"]),
];

/// A preprocessor covering every schema column, with the given numeric
/// statistics as `(mean, std)` for reading and writing score respectively
pub fn student_preprocessor(numeric_stats: [(f64, f64); 2]) -> ColumnPreprocessor {
    let mut preprocessor = ColumnPreprocessor::new();
    for (name, (mean, std)) in NUMERIC_COLUMNS.iter().zip(numeric_stats) {
        preprocessor = preprocessor.with_numeric(*name, mean, std);
    }
    for name in CATEGORICAL_COLUMNS {
        let categories = KNOWN_CATEGORIES
            .iter()
            .find(|(column, _)| *column == name)
            .map(|(_, levels)| levels.to_vec())
            .unwrap_or_default();
        preprocessor = preprocessor.with_categorical(name, categories);
    }
    preprocessor
}
