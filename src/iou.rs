//! IoU evaluation over single boxes and batches of boxes.

mod box_format;
mod error;
mod evaluator;
mod matrix;
mod rect;

pub use box_format::{BoxFormat, convert_format};
pub use error::IouError;
pub use evaluator::{DEFAULT_EPSILON, IouConfig, IouEvaluator, intersection_over_union};
pub use matrix::{iou_distance, iou_matrix};
pub use rect::Rect;
