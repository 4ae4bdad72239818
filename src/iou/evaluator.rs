//! Pairwise IoU over batches of boxes.

use ndarray::{Array2, ArrayBase, Axis, Data, Dimension, Zip};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::iou::box_format::BoxFormat;
use crate::iou::error::IouError;
use crate::iou::rect::Rect;

/// Added to every union area before dividing.
pub const DEFAULT_EPSILON: f64 = 1e-6;

const BOX_LEN: usize = 4;

/// Configuration for the [`IouEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IouConfig {
    pub format: BoxFormat,
    pub epsilon: f64,
}

impl Default for IouConfig {
    fn default() -> Self {
        Self {
            format: BoxFormat::Corners,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Computes IoU row by row for two equally sized batches of boxes.
#[derive(Debug, Clone, Default)]
pub struct IouEvaluator {
    config: IouConfig,
}

impl IouEvaluator {
    pub fn new(config: IouConfig) -> Self {
        Self { config }
    }

    /// Evaluator for `format` using [`DEFAULT_EPSILON`].
    pub fn with_format(format: BoxFormat) -> Self {
        Self::new(IouConfig {
            format,
            ..IouConfig::default()
        })
    }

    pub fn config(&self) -> &IouConfig {
        &self.config
    }

    /// IoU of each row of `boxes1` with the same row of `boxes2`.
    ///
    /// Both inputs are either a single box of shape `[4]` or a batch of
    /// shape `[N, 4]`, and must hold the same number of boxes. The result
    /// has shape `[N, 1]`.
    pub fn evaluate<A1, S1, D1, A2, S2, D2>(
        &self,
        boxes1: &ArrayBase<S1, D1>,
        boxes2: &ArrayBase<S2, D2>,
    ) -> Result<Array2<f64>, IouError>
    where
        A1: AsPrimitive<f64>,
        S1: Data<Elem = A1>,
        D1: Dimension,
        A2: AsPrimitive<f64>,
        S2: Data<Elem = A2>,
        D2: Dimension,
    {
        let batch1 = to_batch(boxes1)?;
        let batch2 = to_batch(boxes2)?;

        let (left, right) = (batch1.nrows(), batch2.nrows());
        if left != right {
            debug!(left, right, "rejecting box batches of different length");
            return Err(IouError::ShapeMismatch { left, right });
        }

        let IouConfig { format, epsilon } = self.config;
        trace!(rows = left, %format, "evaluating iou");

        let ious = Zip::from(batch1.rows())
            .and(batch2.rows())
            .map_collect(|a, b| Rect::from_row(a, format).iou(&Rect::from_row(b, format), epsilon));

        Ok(ious.insert_axis(Axis(1)))
    }
}

/// Compute IoU for each pair of rows, with the box layout named by a string.
///
/// `box_format` must be `"midpoint"` or `"corners"`; anything else fails
/// with [`IouError::InvalidArgument`].
pub fn intersection_over_union<A1, S1, D1, A2, S2, D2>(
    boxes1: &ArrayBase<S1, D1>,
    boxes2: &ArrayBase<S2, D2>,
    box_format: &str,
) -> Result<Array2<f64>, IouError>
where
    A1: AsPrimitive<f64>,
    S1: Data<Elem = A1>,
    D1: Dimension,
    A2: AsPrimitive<f64>,
    S2: Data<Elem = A2>,
    D2: Dimension,
{
    let format = box_format.parse::<BoxFormat>()?;
    IouEvaluator::with_format(format).evaluate(boxes1, boxes2)
}

/// Copy a `[4]` or `[N, 4]` array into an owned `N x 4` batch of `f64`.
pub(crate) fn to_batch<A, S, D>(boxes: &ArrayBase<S, D>) -> Result<Array2<f64>, IouError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let shape = boxes.shape();
    let rows = match shape {
        [BOX_LEN] => 1,
        [rows, BOX_LEN] => *rows,
        _ => {
            debug!(?shape, "rejecting boxes with unexpected shape");
            return Err(IouError::InvalidShape {
                shape: shape.to_vec(),
            });
        }
    };

    // logical (row-major) order, whatever the memory layout
    let values: Vec<f64> = boxes.iter().map(|&v| v.as_()).collect();
    Ok(Array2::from_shape_vec((rows, BOX_LEN), values)?)
}
