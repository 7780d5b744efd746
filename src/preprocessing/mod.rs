//! Data preprocessing transformers.
//!
//! Transformers follow a fit/transform lifecycle over a [`DataFrame`](crate::frame::DataFrame):
//! hyperparameters are validated at construction, `fit` learns state from a
//! training frame, and `transform` applies that state to new frames without
//! mutating them.
//!
//! # Core Traits
//!
//! - [`Transformer`]: fit, transform, and persistence of the learned state
//!
//! # Available Transformers
//!
//! ## Imputation
//! - [`EndTailImputer`]: Fill missing values with a value from the distribution's tail
//!
//! # Example
//!
//! ```ignore
//! use tail_imputer::preprocessing::{EndTailImputer, Transformer};
//!
//! let mut imputer = EndTailImputer::from_strs("iqr", "right", 1.5, None)?;
//! let filled = imputer.fit_transform(&training_data)?;
//!
//! // Save for later use
//! imputer.save_to_file("imputer.bin")?;
//!
//! // Later, load and transform new data
//! let loaded = EndTailImputer::load_from_file("imputer.bin")?;
//! let filled_test = loaded.transform(&test_data)?;
//! ```

pub mod error;
pub mod imputation;
pub mod selection;
pub mod traits;

// Re-export main types
pub use error::PreprocessingError;
pub use imputation::{
    EndTailImputer, EndTailImputerConfig, EndTailImputerParams, ImputationMethod, Tail,
};
pub use traits::Transformer;
