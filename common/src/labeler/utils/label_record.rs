use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// One bounding box in normalized image coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LabelRecord {
    pub class_id: u32,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelRecord {
    pub fn new(class_id: u32, x_center: f64, y_center: f64, width: f64, height: f64) -> Self {
        Self {
            class_id,
            x_center,
            y_center,
            width,
            height,
        }
    }
}

impl Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.6} {:.6} {:.6} {:.6}", self.class_id, self.x_center, self.y_center, self.width, self.height)
    }
}
