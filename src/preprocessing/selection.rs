//! Column selection by schema inspection.
//!
//! Resolves which columns a transformer works on, either from an explicit
//! user list or by picking every numeric column of the frame.

use crate::frame::{DataFrame, DataType};
use crate::preprocessing::error::PreprocessingError;

/// Names of all numeric columns, in frame order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.schema()
        .into_iter()
        .filter(|(_, dtype)| *dtype == DataType::Numeric)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Checks that every name exists in `df` and is numeric.
pub fn check_numeric_columns(df: &DataFrame, names: &[String]) -> Result<(), PreprocessingError> {
    for name in names {
        let column = df
            .column(name)
            .ok_or_else(|| PreprocessingError::ColumnNotFound(name.clone()))?;
        if column.data_type() != DataType::Numeric {
            return Err(PreprocessingError::NonNumericColumn {
                column: name.clone(),
                dtype: column.data_type(),
            });
        }
    }
    Ok(())
}

/// Resolve the target columns for a fit.
///
/// `Some(list)` is validated against the frame; `None` selects every numeric
/// column and fails if there are none.
pub fn resolve_numeric_variables(
    df: &DataFrame,
    variables: Option<&[String]>,
) -> Result<Vec<String>, PreprocessingError> {
    match variables {
        Some(names) => {
            check_numeric_columns(df, names)?;
            Ok(names.to_vec())
        }
        None => {
            let found = numeric_columns(df);
            if found.is_empty() {
                return Err(PreprocessingError::NoNumericColumns);
            }
            Ok(found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Column;

    fn frame() -> DataFrame {
        DataFrame::new()
            .with_column("City", Column::text(vec![Some("London"), None]))
            .unwrap()
            .with_column("Age", Column::numeric(vec![20.0, f64::NAN]))
            .unwrap()
            .with_column("dob", Column::datetime(vec![Some(0), Some(60)]))
            .unwrap()
            .with_column("Marks", Column::numeric(vec![0.9, 0.8]))
            .unwrap()
    }

    #[test]
    fn test_numeric_columns_in_order() {
        assert_eq!(numeric_columns(&frame()), vec!["Age", "Marks"]);
    }

    #[test]
    fn test_auto_detect() {
        let vars = resolve_numeric_variables(&frame(), None).unwrap();
        assert_eq!(vars, vec!["Age", "Marks"]);
    }

    #[test]
    fn test_user_list_kept_in_order() {
        let user = vec!["Marks".to_string(), "Age".to_string()];
        let vars = resolve_numeric_variables(&frame(), Some(&user)).unwrap();
        assert_eq!(vars, user);
    }

    #[test]
    fn test_user_list_unknown_column() {
        let user = vec!["Height".to_string()];
        let err = resolve_numeric_variables(&frame(), Some(&user)).unwrap_err();
        assert!(matches!(err, PreprocessingError::ColumnNotFound(name) if name == "Height"));
    }

    #[test]
    fn test_user_list_non_numeric_column() {
        let user = vec!["dob".to_string()];
        let err = resolve_numeric_variables(&frame(), Some(&user)).unwrap_err();
        assert!(matches!(
            err,
            PreprocessingError::NonNumericColumn {
                dtype: DataType::Datetime,
                ..
            }
        ));
    }

    #[test]
    fn test_no_numeric_columns() {
        let df = DataFrame::new()
            .with_column("City", Column::text(vec![Some("London")]))
            .unwrap();
        let err = resolve_numeric_variables(&df, None).unwrap_err();
        assert!(matches!(err, PreprocessingError::NoNumericColumns));
    }
}
