//! # tail_imputer
//!
//! Missing-value imputation for in-memory tabular data, filling gaps in numeric
//! columns with a value taken from the end of each column's distribution.
//!
//! ## Core Design Principles
//!
//! - **Validated construction**: invalid hyperparameters never produce an imputer.
//! - **Explicit fitted state**: an imputer either holds its complete learned
//!   state or none; transforming before fitting is an error, not a panic.
//! - **Non-destructive transforms**: `transform` returns a new frame and leaves
//!   its input untouched.
//!
//! ## Quick Start
//!
//! ```rust
//! use tail_imputer::frame::{Column, DataFrame};
//! use tail_imputer::preprocessing::{EndTailImputer, Transformer};
//!
//! let df = DataFrame::new()
//!     .with_column("age", Column::numeric(vec![20.0, 21.0, f64::NAN, 41.0]))
//!     .unwrap();
//!
//! let mut imputer = EndTailImputer::from_strs("max", "right", 2.0, None).unwrap();
//! let filled = imputer.fit_transform(&df).unwrap();
//!
//! assert_eq!(imputer.fill_value("age"), Some(82.0));
//! assert_eq!(filled.null_count(), 0);
//! ```
//!
//! ## Module Structure
//!
//! - `frame`: Named-column data container and CSV loading
//! - `preprocessing`: Transformer trait, column selection, imputers
//! - `serialization`: Byte encoding of fitted parameters

/// Named-column tabular data.
pub mod frame;

/// Data preprocessing transformers.
pub mod preprocessing;

/// Fitted parameter persistence.
pub mod serialization;

pub use frame::{Column, DataFrame, DataType};
pub use preprocessing::{EndTailImputer, PreprocessingError, Transformer};
