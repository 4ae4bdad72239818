//! Cross-product IoU between two sets of boxes.

use ndarray::{Array2, ArrayBase, Data, Dimension};
use num_traits::AsPrimitive;
use tracing::trace;

use crate::iou::box_format::BoxFormat;
use crate::iou::error::IouError;
use crate::iou::evaluator::{DEFAULT_EPSILON, to_batch};
use crate::iou::rect::Rect;

fn to_rects<A, S, D>(boxes: &ArrayBase<S, D>, format: BoxFormat) -> Result<Vec<Rect>, IouError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let batch = to_batch(boxes)?;
    Ok(batch.rows().into_iter().map(|row| Rect::from_row(row, format)).collect())
}

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the number of boxes in
/// `boxes_a` and N the number in `boxes_b`. Unlike
/// [`intersection_over_union`](crate::intersection_over_union) the two
/// sets may differ in size.
pub fn iou_matrix<A1, S1, D1, A2, S2, D2>(
    boxes_a: &ArrayBase<S1, D1>,
    boxes_b: &ArrayBase<S2, D2>,
    format: BoxFormat,
) -> Result<Array2<f64>, IouError>
where
    A1: AsPrimitive<f64>,
    S1: Data<Elem = A1>,
    D1: Dimension,
    A2: AsPrimitive<f64>,
    S2: Data<Elem = A2>,
    D2: Dimension,
{
    let rects_a = to_rects(boxes_a, format)?;
    let rects_b = to_rects(boxes_b, format)?;
    trace!(rows = rects_a.len(), cols = rects_b.len(), %format, "evaluating iou matrix");

    Ok(Array2::from_shape_fn((rects_a.len(), rects_b.len()), |(i, j)| {
        rects_a[i].iou(&rects_b[j], DEFAULT_EPSILON)
    }))
}

/// Compute IoU distance matrix (`1 - IoU`) between two sets of boxes.
pub fn iou_distance<A1, S1, D1, A2, S2, D2>(
    boxes_a: &ArrayBase<S1, D1>,
    boxes_b: &ArrayBase<S2, D2>,
    format: BoxFormat,
) -> Result<Array2<f64>, IouError>
where
    A1: AsPrimitive<f64>,
    S1: Data<Elem = A1>,
    D1: Dimension,
    A2: AsPrimitive<f64>,
    S2: Data<Elem = A2>,
    D2: Dimension,
{
    Ok(iou_matrix(boxes_a, boxes_b, format)?.mapv_into(|iou| 1.0 - iou))
}
