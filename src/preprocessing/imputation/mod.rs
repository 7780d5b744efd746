//! Imputation transformers for handling missing values.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`EndTailImputer`] | Impute with a value from the right or left tail (gaussian, iqr, max) |
//!
//! # Example
//!
//! ```ignore
//! use tail_imputer::preprocessing::{EndTailImputer, EndTailImputerConfig, ImputationMethod, Transformer};
//!
//! let mut imputer = EndTailImputer::new(
//!     EndTailImputerConfig::default().with_method(ImputationMethod::Iqr).with_fold(1.5),
//! )?;
//! imputer.fit(&train)?;
//! let imputed = imputer.transform(&test)?;
//! ```

pub mod end_tail;
pub mod stats;

pub use end_tail::{
    tail_value, EndTailImputer, EndTailImputerConfig, EndTailImputerParams, ImputationMethod, Tail,
};
