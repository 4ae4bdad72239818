//! Intersection over Union (IoU) for axis-aligned bounding boxes.
//!
//! Boxes are given either in `midpoint` form `(cx, cy, w, h)` or in
//! `corners` form `(x1, y1, x2, y2)`, one box per row of an `N x 4`
//! [`ndarray`] array.
//!
//! ```
//! use box_iou::intersection_over_union;
//! use ndarray::array;
//!
//! let a = array![[0, 0, 2, 2], [0, 0, 3, 2]];
//! let b = array![[1, 1, 3, 3], [1, 1, 3, 3]];
//! let ious = intersection_over_union(&a, &b, "corners").unwrap();
//! assert_eq!(ious.dim(), (2, 1));
//! assert!((ious[[1, 0]] - 0.25).abs() < 1e-3);
//! ```

pub mod iou;

pub use iou::{
    BoxFormat, DEFAULT_EPSILON, IouConfig, IouError, IouEvaluator, Rect, convert_format,
    intersection_over_union, iou_distance, iou_matrix,
};
