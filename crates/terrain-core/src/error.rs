use thiserror::Error;

/// Failures in the training or inference pipeline.
///
/// Inference never panics and never propagates library internals: a
/// non-finite reading and an internal numeric failure are distinct variants
/// so callers can tell bad input from a broken probability estimate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input reading was NaN or infinite.
    #[error("non-finite value for {field}")]
    NonFiniteInput { field: &'static str },

    /// The underlying SVM solver rejected the training set.
    #[error("svm training failed: {0}")]
    Training(#[from] linfa_svm::error::SvmError),

    /// The scale/predict/probability pipeline produced unusable numbers.
    #[error("numeric failure in inference pipeline: {0}")]
    Numeric(&'static str),
}
