use tail_imputer::frame::{Column, DataFrame};
use tail_imputer::preprocessing::{
    EndTailImputer, EndTailImputerConfig, ImputationMethod, PreprocessingError, Tail, Transformer,
};

const NAN: f64 = f64::NAN;

/// 8 rows x 6 columns with missing values in every column but `dob`.
fn dataframe_na() -> DataFrame {
    // 2020-02-24T00:00:00Z, one minute apart
    let dob = (0..8).map(|i| Some(1_582_502_400 + 60 * i)).collect();
    DataFrame::new()
        .with_column(
            "Name",
            Column::text(vec![
                Some("tom"),
                Some("nick"),
                Some("krish"),
                None,
                Some("peter"),
                None,
                Some("fred"),
                Some("sam"),
            ]),
        )
        .unwrap()
        .with_column(
            "City",
            Column::text(vec![
                Some("London"),
                Some("Manchester"),
                None,
                None,
                Some("London"),
                Some("London"),
                Some("Bristol"),
                Some("Manchester"),
            ]),
        )
        .unwrap()
        .with_column(
            "Studies",
            Column::text(vec![
                Some("Bachelor"),
                None,
                Some("PhD"),
                Some("Masters"),
                Some("Bachelor"),
                Some("PhD"),
                Some("None"),
                Some("Masters"),
            ]),
        )
        .unwrap()
        .with_column(
            "Age",
            Column::numeric(vec![20.0, 21.0, 19.0, NAN, 23.0, 40.0, 41.0, 37.0]),
        )
        .unwrap()
        .with_column(
            "Marks",
            Column::numeric(vec![0.9, 0.8, 0.7, NAN, 0.3, NAN, 0.8, 0.6]),
        )
        .unwrap()
        .with_column("dob", Column::datetime(dob))
        .unwrap()
}

fn filled_reference(df: &DataFrame, age: f64, marks: f64) -> DataFrame {
    let fill = |name: &str, value: f64| {
        Column::numeric(
            df.column(name)
                .unwrap()
                .as_numeric()
                .unwrap()
                .iter()
                .map(|&v| if v.is_nan() { value } else { v })
                .collect(),
        )
    };
    let mut reference = df.clone();
    reference.replace_column("Age", fill("Age", age)).unwrap();
    reference.replace_column("Marks", fill("Marks", marks)).unwrap();
    reference
}

fn dict(imputer: &EndTailImputer) -> Vec<(&str, f64)> {
    imputer
        .imputer_dict()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect()
}

#[test]
fn test_automatically_find_variables_and_gaussian_imputation_on_right_tail() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::from_strs("gaussian", "right", 3.0, None).unwrap();
    let transformed = imputer.fit_transform(&df).unwrap();

    assert_eq!(imputer.imputation_method(), ImputationMethod::Gaussian);
    assert_eq!(imputer.tail(), Tail::Right);
    assert_eq!(imputer.fold(), 3.0);
    assert_eq!(imputer.variables().unwrap(), &["Age".to_string(), "Marks".to_string()]);
    assert_eq!(imputer.input_shape().unwrap(), (8, 6));
    assert_eq!(
        dict(&imputer),
        vec![("Age", 58.94908118478389), ("Marks", 1.3244261503263175)]
    );

    assert_eq!(transformed.null_count_in(&["Age", "Marks"]), 0);
    assert!(transformed.null_count_in(&["City", "Name"]) > 0);
    assert_eq!(
        transformed,
        filled_reference(&df, 58.94908118478389, 1.3244261503263175)
    );
}

#[test]
fn test_user_enters_variables_and_iqr_imputation_on_right_tail() {
    let df = dataframe_na();
    let config = EndTailImputerConfig::default()
        .with_method(ImputationMethod::Iqr)
        .with_tail(Tail::Right)
        .with_fold(1.5)
        .with_variables(["Age", "Marks"]);
    let mut imputer = EndTailImputer::new(config).unwrap();
    let transformed = imputer.fit_transform(&df).unwrap();

    assert_eq!(dict(&imputer), vec![("Age", 65.5), ("Marks", 1.0625)]);
    assert_eq!(transformed.null_count_in(&["Age", "Marks"]), 0);
    assert_eq!(transformed, filled_reference(&df, 65.5, 1.0625));
}

#[test]
fn test_user_enters_variables_and_max_value_imputation() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::from_strs(
        "max",
        "right",
        2.0,
        Some(vec!["Age".to_string(), "Marks".to_string()]),
    )
    .unwrap();
    imputer.fit(&df).unwrap();
    assert_eq!(dict(&imputer), vec![("Age", 82.0), ("Marks", 1.8)]);
}

#[test]
fn test_automatically_select_variables_and_gaussian_imputation_on_left_tail() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::from_strs("gaussian", "left", 3.0, None).unwrap();
    imputer.fit(&df).unwrap();
    assert_eq!(
        dict(&imputer),
        vec![("Age", -1.520509756212462), ("Marks", 0.04224051634034898)]
    );
}

#[test]
fn test_user_enters_variables_and_iqr_imputation_on_left_tail() {
    let df = dataframe_na();
    let config = EndTailImputerConfig::default()
        .with_method(ImputationMethod::Iqr)
        .with_tail(Tail::Left)
        .with_fold(1.5)
        .with_variables(["Age", "Marks"]);
    let mut imputer = EndTailImputer::new(config).unwrap();
    imputer.fit(&df).unwrap();
    assert_eq!(dict(&imputer), vec![("Age", -6.5), ("Marks", 0.36249999999999993)]);
}

#[test]
fn test_raises_error_when_imputation_method_is_not_permitted_value() {
    let err = EndTailImputer::from_strs("arbitrary", "right", 3.0, None).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_raises_error_when_tail_is_not_permitted_value() {
    let err = EndTailImputer::from_strs("gaussian", "arbitrary", 3.0, None).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_raises_error_when_fold_is_negative() {
    let err = EndTailImputer::new(EndTailImputerConfig::default().with_fold(-1.0)).unwrap_err();
    assert!(matches!(err, PreprocessingError::InvalidParameter(_)));
}

#[test]
fn test_non_fitted_error() {
    let df = dataframe_na();
    let imputer = EndTailImputer::default();
    let err = imputer.transform(&df).unwrap_err();
    assert!(matches!(err, PreprocessingError::NotFitted("EndTailImputer")));
}

#[test]
fn test_transform_does_not_mutate_input() {
    let df = dataframe_na();
    let snapshot = df.clone();
    let mut imputer = EndTailImputer::default();
    let _ = imputer.fit_transform(&df).unwrap();

    assert_eq!(df, snapshot);
    assert_eq!(df.null_count_in(&["Age", "Marks"]), 3);
}

#[test]
fn test_every_configuration_fills_targets_only() {
    let df = dataframe_na();
    let others = ["Name", "City", "Studies"];
    for method in [ImputationMethod::Gaussian, ImputationMethod::Iqr, ImputationMethod::Max] {
        for tail in [Tail::Left, Tail::Right] {
            for fold in [0.5, 1.5, 3.0] {
                let config = EndTailImputerConfig::default()
                    .with_method(method)
                    .with_tail(tail)
                    .with_fold(fold);
                let mut imputer = EndTailImputer::new(config).unwrap();
                let out = imputer.fit_transform(&df).unwrap();

                assert_eq!(imputer.imputer_dict().unwrap().len(), 2);
                assert!(imputer.imputer_dict().unwrap().iter().all(|(_, v)| v.is_finite()));
                assert_eq!(out.null_count_in(&["Age", "Marks"]), 0);
                assert_eq!(out.null_count_in(&others), df.null_count_in(&others));
                assert_eq!(out.shape(), df.shape());
                assert_eq!(out.column_names(), df.column_names());
            }
        }
    }
}

#[test]
fn test_refit_replaces_state() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::from_strs("max", "right", 2.0, None).unwrap();
    imputer.fit(&df).unwrap();

    let other = DataFrame::new()
        .with_column("Height", Column::numeric(vec![1.5, NAN, 2.0]))
        .unwrap();
    imputer.fit(&other).unwrap();

    assert_eq!(dict(&imputer), vec![("Height", 4.0)]);
    assert_eq!(imputer.input_shape().unwrap(), (3, 1));
    assert_eq!(imputer.fill_value("Age"), None);
}

#[test]
fn test_fit_returns_self_for_chaining() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::default();
    let out = imputer.fit(&df).unwrap().transform(&df).unwrap();
    assert_eq!(out.null_count_in(&["Age", "Marks"]), 0);
}

#[test]
fn test_user_variable_must_be_numeric() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::new(EndTailImputerConfig::default().with_variable("City"))
        .unwrap();
    let err = imputer.fit(&df).map(|_| ()).unwrap_err();
    assert!(matches!(err, PreprocessingError::NonNumericColumn { .. }));
    assert!(!imputer.is_fitted());
}

#[test]
fn test_loaded_imputer_matches_original() {
    let df = dataframe_na();
    let mut imputer = EndTailImputer::from_strs("iqr", "left", 1.5, None).unwrap();
    imputer.fit(&df).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imputer.bin");
    imputer.save_to_file(&path).unwrap();
    let loaded = EndTailImputer::load_from_file(&path).unwrap();

    assert_eq!(loaded.feature_names_in().unwrap(), df.column_names());
    assert_eq!(loaded.transform(&df).unwrap(), imputer.transform(&df).unwrap());
}
