//! Input schema checks run before the preprocessor sees the table

use crate::data::REQUIRED_COLUMNS;
use crate::error::{Result, ValidationError};
use polars::prelude::*;
use std::collections::{BTreeSet, HashSet};

/// Run every input check: missing values first, then required columns
pub fn validate_table(table: &DataFrame) -> Result<()> {
    check_missing_values(table)?;
    check_required_columns(table)?;
    Ok(())
}

/// Reject any null cell (or float NaN) in any column, extra columns included
pub fn check_missing_values(table: &DataFrame) -> std::result::Result<(), ValidationError> {
    let columns: Vec<String> = table
        .get_columns()
        .iter()
        .filter(|column| column.null_count() > 0 || has_nan(column))
        .map(|column| column.name().to_string())
        .collect();

    if columns.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingValues { columns })
    }
}

fn has_nan(column: &Column) -> bool {
    let series = column.as_materialized_series();
    match series.dtype() {
        DataType::Float32 | DataType::Float64 => series
            .cast(&DataType::Float64)
            .ok()
            .and_then(|s| s.f64().ok().map(|ca| ca.into_iter().flatten().any(f64::is_nan)))
            .unwrap_or(false),
        _ => false,
    }
}

/// Require every schema column; unrecognized extra columns are allowed
pub fn check_required_columns(table: &DataFrame) -> std::result::Result<(), ValidationError> {
    let present: HashSet<&str> = table
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();

    let missing: BTreeSet<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingColumns(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictError;

    fn complete_table() -> DataFrame {
        df!(
            "gender" => &["female"],
            "race_ethnicity" => &["group B"],
            "parental_level_of_education" => &["bachelor's degree"],
            "lunch" => &["standard"],
            "test_preparation_course" => &["none"],
            "reading_score" => &[72i64],
            "writing_score" => &[74i64]
        )
        .unwrap()
    }

    #[test]
    fn test_complete_table_passes() {
        assert!(validate_table(&complete_table()).is_ok());
    }

    #[test]
    fn test_extra_column_tolerated() {
        let mut table = complete_table();
        table
            .with_column(Column::new("math_score".into(), &[71i64]))
            .unwrap();
        assert!(validate_table(&table).is_ok());
    }

    #[test]
    fn test_missing_columns_named_exactly() {
        let table = complete_table()
            .drop("lunch")
            .unwrap()
            .drop("writing_score")
            .unwrap();

        let err = check_required_columns(&table).unwrap_err();
        let expected: BTreeSet<String> = ["lunch", "writing_score"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(err, ValidationError::MissingColumns(expected));
    }

    #[test]
    fn test_null_cell_rejected() {
        let mut table = complete_table();
        table
            .with_column(Column::new("reading_score".into(), &[None::<i64>]))
            .unwrap();

        let err = check_missing_values(&table).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingValues {
                columns: vec!["reading_score".to_string()]
            }
        );
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let mut table = complete_table();
        table
            .with_column(Column::new("extra".into(), &[f64::NAN]))
            .unwrap();

        assert!(matches!(
            check_missing_values(&table),
            Err(ValidationError::MissingValues { .. })
        ));
    }

    #[test]
    fn test_missing_values_checked_before_columns() {
        let mut table = complete_table().drop("gender").unwrap();
        table
            .with_column(Column::new("lunch".into(), &[None::<&str>]))
            .unwrap();

        let err = validate_table(&table).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Validation(ValidationError::MissingValues { .. })
        ));
    }
}
