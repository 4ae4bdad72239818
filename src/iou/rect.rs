use ndarray::ArrayView1;

use crate::iou::box_format::BoxFormat;

/// Axis-aligned bounding box, stored in corner form.
///
/// Corners are not reordered: a box with `x2 < x1` or `y2 < y1` is kept as
/// given and treated as having zero area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x1: f64,
    /// Top-left y coordinate
    pub y1: f64,
    /// Bottom-right x coordinate
    pub x2: f64,
    /// Bottom-right y coordinate
    pub y2: f64,
}

impl Rect {
    /// Create a Rect from corners format (x1, y1, x2, y2).
    #[inline]
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a Rect from midpoint format (center x, center y, width, height).
    #[inline]
    pub fn from_midpoint(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x1: cx - width / 2.0,
            y1: cy - height / 2.0,
            x2: cx + width / 2.0,
            y2: cy + height / 2.0,
        }
    }

    /// Create a Rect from four values laid out according to `format`.
    #[inline]
    pub fn from_format(values: [f64; 4], format: BoxFormat) -> Self {
        let [a, b, c, d] = values;
        match format {
            BoxFormat::Midpoint => Self::from_midpoint(a, b, c, d),
            BoxFormat::Corners => Self::from_corners(a, b, c, d),
        }
    }

    /// Read one `[_, _, _, _]` row of a batch.
    #[inline]
    pub(crate) fn from_row(row: ArrayView1<'_, f64>, format: BoxFormat) -> Self {
        Self::from_format([row[0], row[1], row[2], row[3]], format)
    }

    /// Convert to corners format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_corners(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Convert to midpoint format: (center_x, center_y, width, height).
    #[inline]
    pub fn to_midpoint(&self) -> [f64; 4] {
        let (cx, cy) = self.center();
        [cx, cy, self.x2 - self.x1, self.y2 - self.y1]
    }

    /// Convert to the layout described by `format`.
    #[inline]
    pub fn to_format(&self, format: BoxFormat) -> [f64; 4] {
        match format {
            BoxFormat::Midpoint => self.to_midpoint(),
            BoxFormat::Corners => self.to_corners(),
        }
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Horizontal extent, clamped at zero.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).max(0.0)
    }

    /// Vertical extent, clamped at zero.
    #[inline]
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).max(0.0)
    }

    /// Get the area of the bounding box. Inverted boxes have zero area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Area shared with `other`; zero when the boxes touch or are apart.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        (x2 - x1).max(0.0) * (y2 - y1).max(0.0)
    }

    /// Calculate Intersection over Union (IoU) with another bounding box.
    ///
    /// `epsilon` is added to the union so two empty boxes give `0.0`
    /// instead of `NaN`.
    pub fn iou(&self, other: &Rect, epsilon: f64) -> f64 {
        let inter_area = self.intersection_area(other);
        let union_area = self.area() + other.area() - inter_area;

        inter_area / (union_area + epsilon)
    }
}
