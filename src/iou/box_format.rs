use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayBase, Data, Dimension, aview1};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::iou::error::IouError;
use crate::iou::evaluator::to_batch;
use crate::iou::rect::Rect;

/// Coordinate layout of the four numbers describing a box.
///
/// - `Midpoint`: center x, center y, width, height
/// - `Corners`: top-left x, top-left y, bottom-right x, bottom-right y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxFormat {
    Midpoint,
    #[default]
    Corners,
}

impl BoxFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::Corners => "corners",
        }
    }

    /// Re-express one box given in `self` layout in the `to` layout.
    #[inline]
    pub fn convert(self, values: [f64; 4], to: BoxFormat) -> [f64; 4] {
        if self == to {
            return values;
        }
        Rect::from_format(values, self).to_format(to)
    }
}

impl fmt::Display for BoxFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxFormat {
    type Err = IouError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "midpoint" => Ok(Self::Midpoint),
            "corners" => Ok(Self::Corners),
            other => {
                debug!(value = other, "rejecting unknown box format");
                Err(IouError::InvalidArgument {
                    value: other.to_owned(),
                })
            }
        }
    }
}

/// Convert a batch of boxes from one layout to another.
///
/// Accepts a single box (`[4]`) or a batch (`[N, 4]`) and always returns
/// an `N x 4` array.
pub fn convert_format<A, S, D>(
    boxes: &ArrayBase<S, D>,
    from: BoxFormat,
    to: BoxFormat,
) -> Result<Array2<f64>, IouError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut batch = to_batch(boxes)?;
    if from != to {
        for mut row in batch.rows_mut() {
            let converted = from.convert([row[0], row[1], row[2], row[3]], to);
            row.assign(&aview1(&converted));
        }
    }
    Ok(batch)
}
