//! End-of-tail imputer.
//!
//! Replaces missing values with a value placed at the far end of each column's
//! distribution. The placement is estimated with one of three methods:
//!
//! ```text
//! gaussian  right: mean + fold * std          left: mean - fold * std
//! iqr       right: Q3 + fold * (Q3 - Q1)      left: Q1 - fold * (Q3 - Q1)
//! max       right: max * fold                 left: min - fold * (max - min)
//! ```
//!
//! `std` is the sample standard deviation and quartiles are linearly
//! interpolated. Only finite values enter the statistics; `NaN` and `±inf` are skipped.
//!
//! # Example
//! ```ignore
//! use tail_imputer::preprocessing::{EndTailImputer, EndTailImputerConfig, Tail, Transformer};
//!
//! let mut imputer = EndTailImputer::new(
//!     EndTailImputerConfig::default().with_tail(Tail::Left).with_fold(1.5),
//! )?;
//! let filled = imputer.fit_transform(&df)?;
//! ```

use crate::frame::{Column, DataFrame};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::imputation::stats;
use crate::preprocessing::selection::resolve_numeric_variables;
use crate::preprocessing::traits::Transformer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// How the tail value is estimated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputationMethod {
    /// Mean plus or minus `fold` standard deviations.
    #[default]
    Gaussian,
    /// Quartile plus or minus `fold` interquartile ranges.
    Iqr,
    /// Observed extreme scaled or extended by `fold`.
    Max,
}

impl fmt::Display for ImputationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputationMethod::Gaussian => write!(f, "gaussian"),
            ImputationMethod::Iqr => write!(f, "iqr"),
            ImputationMethod::Max => write!(f, "max"),
        }
    }
}

impl FromStr for ImputationMethod {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gaussian" => Ok(ImputationMethod::Gaussian),
            "iqr" => Ok(ImputationMethod::Iqr),
            "max" => Ok(ImputationMethod::Max),
            other => Err(PreprocessingError::InvalidParameter(format!(
                "imputation_method takes only values 'gaussian', 'iqr' or 'max', got '{other}'"
            ))),
        }
    }
}

/// Which end of the distribution the fill value comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tail {
    Left,
    #[default]
    Right,
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tail::Left => write!(f, "left"),
            Tail::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Tail {
    type Err = PreprocessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Tail::Left),
            "right" => Ok(Tail::Right),
            other => Err(PreprocessingError::InvalidParameter(format!(
                "tail takes only values 'left' or 'right', got '{other}'"
            ))),
        }
    }
}

/// Hyperparameters for [`EndTailImputer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndTailImputerConfig {
    /// Estimation method (default: gaussian).
    pub imputation_method: ImputationMethod,
    /// Distribution end (default: right).
    pub tail: Tail,
    /// Multiplier applied to the spread, or to the maximum for `max` (default: 3.0).
    pub fold: f64,
    /// Columns to impute. `None` selects every numeric column at fit time.
    #[serde(default)]
    pub variables: Option<Vec<String>>,
}

impl Default for EndTailImputerConfig {
    fn default() -> Self {
        Self {
            imputation_method: ImputationMethod::Gaussian,
            tail: Tail::Right,
            fold: 3.0,
            variables: None,
        }
    }
}

impl EndTailImputerConfig {
    pub fn with_method(mut self, method: ImputationMethod) -> Self {
        self.imputation_method = method;
        self
    }

    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    pub fn with_fold(mut self, fold: f64) -> Self {
        self.fold = fold;
        self
    }

    /// Restrict imputation to the given columns.
    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict imputation to a single column.
    pub fn with_variable(self, variable: impl Into<String>) -> Self {
        self.with_variables([variable.into()])
    }

    /// Check every field against its allowed domain.
    pub fn validate(&self) -> Result<(), PreprocessingError> {
        if !(self.fold.is_finite() && self.fold > 0.0) {
            return Err(PreprocessingError::InvalidParameter(format!(
                "fold takes only positive numbers, got {}",
                self.fold
            )));
        }
        if let Some(vars) = &self.variables {
            if vars.is_empty() {
                return Err(PreprocessingError::InvalidParameter(
                    "variables must be None or a non-empty list".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// ```rust
    /// use tail_imputer::preprocessing::{EndTailImputerConfig, ImputationMethod};
    ///
    /// let cfg = EndTailImputerConfig::from_json(
    ///     r#"{"imputation_method": "iqr", "tail": "left", "fold": 1.5}"#,
    /// ).unwrap();
    /// assert_eq!(cfg.imputation_method, ImputationMethod::Iqr);
    /// assert!(cfg.variables.is_none());
    /// ```
    pub fn from_json(s: &str) -> Result<Self, PreprocessingError> {
        let config: Self = serde_json::from_str(s).map_err(|e| {
            PreprocessingError::InvalidParameter(format!("invalid configuration: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Tail value of one column's finite values. `None` when `values` is empty.
pub fn tail_value(method: ImputationMethod, tail: Tail, fold: f64, values: &[f64]) -> Option<f64> {
    let value = match method {
        ImputationMethod::Gaussian => {
            let mu = stats::mean(values)?;
            let sd = stats::sample_std(values)?;
            match tail {
                Tail::Right => mu + fold * sd,
                Tail::Left => mu - fold * sd,
            }
        }
        ImputationMethod::Iqr => {
            let (q1, q3) = stats::quartiles(values)?;
            let iqr = q3 - q1;
            match tail {
                Tail::Right => q3 + fold * iqr,
                Tail::Left => q1 - fold * iqr,
            }
        }
        ImputationMethod::Max => {
            let max = stats::max(values)?;
            match tail {
                Tail::Right => max * fold,
                Tail::Left => {
                    let min = stats::min(values)?;
                    min - fold * (max - min)
                }
            }
        }
    };
    Some(value)
}

/// Learned state of a fitted [`EndTailImputer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndTailImputerParams {
    /// Configuration used for the fit.
    pub config: EndTailImputerConfig,
    /// Fill value per imputed column, in `variables_` order.
    pub imputer_dict_: Vec<(String, f64)>,
    /// Resolved columns to impute.
    pub variables_: Vec<String>,
    /// `(rows, columns)` of the training frame.
    pub input_shape_: (usize, usize),
    /// All column names of the training frame.
    pub feature_names_in_: Vec<String>,
}

/// Imputer that fills missing numeric values with an end-of-distribution value.
///
/// Starts unfitted; [`fit`](Transformer::fit) resolves the target columns and
/// stores one fill value per column. Re-fitting replaces the stored state.
#[derive(Clone, Debug, Default)]
pub struct EndTailImputer {
    config: EndTailImputerConfig,
    fitted: Option<EndTailImputerParams>,
}

fn dedup_keep_first(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

impl EndTailImputer {
    /// Create an unfitted imputer from a validated configuration.
    ///
    /// Duplicate names in `variables` are dropped, keeping the first occurrence.
    pub fn new(mut config: EndTailImputerConfig) -> Result<Self, PreprocessingError> {
        config.validate()?;
        config.variables = config.variables.map(dedup_keep_first);
        Ok(Self {
            config,
            fitted: None,
        })
    }

    /// Create an imputer from string-valued method and tail.
    pub fn from_strs(
        imputation_method: &str,
        tail: &str,
        fold: f64,
        variables: Option<Vec<String>>,
    ) -> Result<Self, PreprocessingError> {
        Self::new(EndTailImputerConfig {
            imputation_method: imputation_method.parse()?,
            tail: tail.parse()?,
            fold,
            variables,
        })
    }

    pub fn config(&self) -> &EndTailImputerConfig {
        &self.config
    }

    pub fn imputation_method(&self) -> ImputationMethod {
        self.config.imputation_method
    }

    pub fn tail(&self) -> Tail {
        self.config.tail
    }

    pub fn fold(&self) -> f64 {
        self.config.fold
    }

    /// Columns requested at construction, `None` for auto-detection.
    pub fn user_variables(&self) -> Option<&[String]> {
        self.config.variables.as_deref()
    }

    fn params(&self) -> Result<&EndTailImputerParams, PreprocessingError> {
        self.fitted
            .as_ref()
            .ok_or(PreprocessingError::NotFitted(Self::NAME))
    }

    /// Fill value per imputed column.
    pub fn imputer_dict(&self) -> Result<&[(String, f64)], PreprocessingError> {
        Ok(&self.params()?.imputer_dict_)
    }

    /// Fill value for one column, if it was imputed.
    pub fn fill_value(&self, column: &str) -> Option<f64> {
        self.fitted.as_ref().and_then(|p| {
            p.imputer_dict_
                .iter()
                .find(|(name, _)| name == column)
                .map(|(_, v)| *v)
        })
    }

    /// Resolved columns to impute.
    pub fn variables(&self) -> Result<&[String], PreprocessingError> {
        Ok(&self.params()?.variables_)
    }

    /// Shape of the training frame.
    pub fn input_shape(&self) -> Result<(usize, usize), PreprocessingError> {
        Ok(self.params()?.input_shape_)
    }

    pub fn feature_names_in(&self) -> Result<&[String], PreprocessingError> {
        Ok(&self.params()?.feature_names_in_)
    }
}

impl Transformer for EndTailImputer {
    type Params = EndTailImputerParams;

    const NAME: &'static str = "EndTailImputer";

    fn fit(&mut self, data: &DataFrame) -> Result<&mut Self, PreprocessingError> {
        let (rows, cols) = data.shape();
        if rows == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit EndTailImputer on empty data".to_string(),
            ));
        }

        let variables_ = resolve_numeric_variables(data, self.config.variables.as_deref())?;
        let EndTailImputerConfig {
            imputation_method,
            tail,
            fold,
            ..
        } = self.config;

        let mut imputer_dict_ = Vec::with_capacity(variables_.len());
        for name in &variables_ {
            let values = data
                .column(name)
                .and_then(Column::valid_numeric_values)
                .ok_or_else(|| PreprocessingError::ColumnNotFound(name.clone()))?;

            if imputation_method == ImputationMethod::Gaussian && values.len() == 1 {
                warn!(column = %name, "single observed value, standard deviation is zero");
            }

            let fill = tail_value(imputation_method, tail, fold, &values).ok_or_else(|| {
                PreprocessingError::MissingValues(format!(
                    "column '{name}' has no finite values to estimate from"
                ))
            })?;
            if !fill.is_finite() {
                return Err(PreprocessingError::NumericalError(format!(
                    "tail value for column '{name}' is not finite ({fill})"
                )));
            }

            debug!(column = %name, fill_value = fill, observed = values.len(), "estimated tail value");
            imputer_dict_.push((name.clone(), fill));
        }

        info!(
            method = %imputation_method,
            tail = %tail,
            fold,
            n_variables = variables_.len(),
            rows,
            cols,
            "fitted EndTailImputer"
        );

        self.fitted = Some(EndTailImputerParams {
            config: self.config.clone(),
            imputer_dict_,
            variables_,
            input_shape_: (rows, cols),
            feature_names_in_: data.column_names().to_vec(),
        });
        Ok(self)
    }

    fn transform(&self, data: &DataFrame) -> Result<DataFrame, PreprocessingError> {
        let params = self.params()?;

        let (_, cols) = data.shape();
        if cols != params.input_shape_.1 {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: params.input_shape_.1,
                got_features: cols,
            });
        }

        let mut out = data.clone();
        for (name, fill) in &params.imputer_dict_ {
            let column = data
                .column(name)
                .ok_or_else(|| PreprocessingError::ColumnNotFound(name.clone()))?;
            let values = column
                .as_numeric()
                .ok_or_else(|| PreprocessingError::NonNumericColumn {
                    column: name.clone(),
                    dtype: column.data_type(),
                })?;

            let mut n_filled = 0usize;
            let filled: Vec<f64> = values
                .iter()
                .map(|&v| {
                    if v.is_nan() {
                        n_filled += 1;
                        *fill
                    } else {
                        v
                    }
                })
                .collect();

            debug!(column = %name, n_filled, fill_value = *fill, "imputed column");
            out.replace_column(name, Column::Numeric(filled))?;
        }

        Ok(out)
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    fn n_features_in(&self) -> Result<usize, PreprocessingError> {
        Ok(self.params()?.input_shape_.1)
    }

    fn extract_params(&self) -> Result<Self::Params, PreprocessingError> {
        self.params().cloned()
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        params.config.validate()?;

        let keys_match = params.imputer_dict_.len() == params.variables_.len()
            && params
                .imputer_dict_
                .iter()
                .zip(&params.variables_)
                .all(|((k, _), v)| k == v);
        if !keys_match {
            return Err(PreprocessingError::InvalidParameter(
                "imputer_dict_ keys must match variables_".to_string(),
            ));
        }
        if let Some((name, v)) = params.imputer_dict_.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PreprocessingError::NumericalError(format!(
                "stored fill value for '{name}' is not finite ({v})"
            )));
        }

        Ok(Self {
            config: params.config.clone(),
            fitted: Some(params),
        })
    }
}
