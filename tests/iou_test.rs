use box_iou::{BoxFormat, IouError, IouEvaluator, intersection_over_union};
use ndarray::{Array1, array};

// Accept if the difference in iou is small
const EPSILON: f64 = 0.001;

fn assert_iou(boxes1: Array1<f64>, boxes2: Array1<f64>, format: &str, expected: f64) {
    let iou = intersection_over_union(&boxes1, &boxes2, format).unwrap();
    assert_eq!(iou.dim(), (1, 1));
    assert!(
        (iou[[0, 0]] - expected).abs() < EPSILON,
        "expected {expected}, got {}",
        iou[[0, 0]]
    );
}

#[test]
fn test_both_inside_cell_shares_area() {
    assert_iou(array![0.8, 0.1, 0.2, 0.2], array![0.9, 0.2, 0.2, 0.2], "midpoint", 1.0 / 7.0);
}

#[test]
fn test_partially_outside_cell_shares_area() {
    assert_iou(array![0.95, 0.6, 0.5, 0.2], array![0.95, 0.7, 0.3, 0.2], "midpoint", 3.0 / 13.0);
}

#[test]
fn test_both_inside_cell_shares_no_area() {
    assert_iou(array![0.25, 0.15, 0.3, 0.1], array![0.25, 0.35, 0.3, 0.1], "midpoint", 0.0);
}

#[test]
fn test_midpoint_outside_cell_shares_area() {
    assert_iou(array![0.7, 0.95, 0.6, 0.1], array![0.5, 1.15, 0.4, 0.7], "midpoint", 3.0 / 31.0);
}

#[test]
fn test_both_inside_cell_shares_entire_area() {
    assert_iou(array![0.5, 0.5, 0.2, 0.2], array![0.5, 0.5, 0.2, 0.2], "midpoint", 1.0);
}

#[test]
fn test_box_format_x1_y1_x2_y2() {
    let iou = intersection_over_union(&array![2, 2, 6, 6], &array![4, 4, 7, 8], "corners").unwrap();
    assert!((iou[[0, 0]] - 4.0 / 24.0).abs() < EPSILON);
}

#[test]
fn test_corners_pairs() {
    let cases = [
        ([0, 0, 2, 2], [3, 0, 5, 2], 0.0),
        ([0, 0, 2, 2], [0, 3, 2, 5], 0.0),
        ([0, 0, 2, 2], [2, 0, 5, 2], 0.0),
        ([0, 0, 2, 2], [1, 1, 3, 3], 1.0 / 7.0),
        ([0, 0, 3, 2], [1, 1, 3, 3], 0.25),
    ];
    for (a, b, expected) in cases {
        let (boxes1, boxes2) = (Array1::from(a.to_vec()), Array1::from(b.to_vec()));
        let iou = intersection_over_union(&boxes1, &boxes2, "corners").unwrap();
        assert!(
            (iou[[0, 0]] - expected).abs() < EPSILON,
            "{a:?} vs {b:?}: expected {expected}, got {}",
            iou[[0, 0]]
        );
    }
}

#[test]
fn test_additional_and_batch() {
    let bboxes1 = array![
        [0, 0, 2, 2],
        [0, 0, 2, 2],
        [0, 0, 2, 2],
        [0, 0, 2, 2],
        [0, 0, 2, 2],
        [0, 0, 3, 2],
    ];
    let bboxes2 = array![
        [3, 0, 5, 2],
        [3, 0, 5, 2],
        [0, 3, 2, 5],
        [2, 0, 5, 2],
        [1, 1, 3, 3],
        [1, 1, 3, 3],
    ];
    let correct_ious = array![0.0, 0.0, 0.0, 0.0, 1.0 / 7.0, 0.25];

    let ious = intersection_over_union(&bboxes1, &bboxes2, "corners").unwrap();
    assert_eq!(ious.dim(), (6, 1));

    let ious = ious.remove_axis(ndarray::Axis(1));
    assert!(
        ious.iter()
            .zip(correct_ious.iter())
            .all(|(got, want)| (got - want).abs() < EPSILON),
        "got {ious}"
    );
}

#[test]
fn test_typed_evaluator_matches_string_api() {
    let a = array![[0.8, 0.1, 0.2, 0.2], [0.25, 0.15, 0.3, 0.1]];
    let b = array![[0.9, 0.2, 0.2, 0.2], [0.25, 0.35, 0.3, 0.1]];

    let typed = IouEvaluator::with_format(BoxFormat::Midpoint).evaluate(&a, &b).unwrap();
    let named = intersection_over_union(&a, &b, "midpoint").unwrap();
    assert_eq!(typed, named);
}

#[test]
fn test_invalid_format_and_shape_mismatch() {
    let one = array![0.0, 0.0, 1.0, 1.0];
    let two = array![[0.0, 0.0, 1.0, 1.0], [0.0, 0.0, 1.0, 1.0]];

    let err = intersection_over_union(&one, &one, "center").unwrap_err();
    assert!(matches!(err, IouError::InvalidArgument { ref value } if value == "center"));
    assert_eq!(
        err.to_string(),
        "unknown box format `center`, expected `midpoint` or `corners`"
    );

    let err = intersection_over_union(&one, &two, "corners").unwrap_err();
    assert!(matches!(err, IouError::ShapeMismatch { left: 1, right: 2 }));
}
