//! Core trait for preprocessing transformers.
//!
//! A [`Transformer`] is built from validated hyperparameters, learns its state
//! from a [`DataFrame`] in [`fit`](Transformer::fit), and afterwards applies
//! that state to any compatible frame. The learned state lives in a separate
//! serializable `Params` type so fitted transformers can be saved and loaded.

use crate::frame::DataFrame;
use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for transformers with a fit/transform lifecycle.
///
/// # Example
/// ```ignore
/// use tail_imputer::preprocessing::{EndTailImputer, Transformer};
///
/// let mut imputer = EndTailImputer::default();
/// imputer.fit(&train)?;
/// let filled = imputer.transform(&test)?;
/// ```
pub trait Transformer: Sized {
    /// Serializable representation of the learned state.
    type Params: SerializableParams;

    /// Human-readable transformer name used in error messages.
    const NAME: &'static str;

    /// Learn state from `data`, replacing any previous state.
    ///
    /// Returns `&mut Self` so calls can be chained.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the data is empty or the selected
    /// columns cannot be used. On error the previous state is kept.
    fn fit(&mut self, data: &DataFrame) -> Result<&mut Self, PreprocessingError>;

    /// Apply the learned state to `data`, returning a new frame.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::NotFitted`] before a successful `fit`.
    fn transform(&self, data: &DataFrame) -> Result<DataFrame, PreprocessingError>;

    /// Fit on `data` and transform it in one step.
    fn fit_transform(&mut self, data: &DataFrame) -> Result<DataFrame, PreprocessingError> {
        self.fit(data)?;
        self.transform(data)
    }

    /// Whether `fit` has completed successfully.
    fn is_fitted(&self) -> bool;

    /// Number of columns seen during fit.
    fn n_features_in(&self) -> Result<usize, PreprocessingError>;

    /// Extract the learned state.
    fn extract_params(&self) -> Result<Self::Params, PreprocessingError>;

    /// Rebuild a fitted transformer from its learned state.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>;

    /// Save the fitted state to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let params = self.extract_params()?;
        let bytes = params
            .to_bytes()
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError> {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}
