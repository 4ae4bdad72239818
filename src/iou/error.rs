//! See [`IouError`].

use thiserror::Error;

/// Errors returned by the IoU operations.
#[derive(Debug, Error)]
pub enum IouError {
    #[error("unknown box format `{value}`, expected `midpoint` or `corners`")]
    InvalidArgument { value: String },

    #[error("box batches differ in length: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("expected boxes of shape [4] or [N, 4], got {shape:?}")]
    InvalidShape { shape: Vec<usize> },

    #[error("failed to reshape box batch")]
    Shape(#[from] ndarray::ShapeError),
}
