// Swipe data types. Coordinates are page pixels, times are wall-clock milliseconds.

use serde::{Deserialize, Serialize};

/// One sample of a single touch contact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_millis: i64,
}

impl TouchSample {
    pub fn new(x: f64, y: f64, timestamp_millis: i64) -> Self {
        Self { x, y, timestamp_millis }
    }
}

/// Reference surface geometry, in the same frame as `TouchSample`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Optional margins restricting where a gesture may begin.
/// `top`/`left` are offsets from the near edge, `bottom`/`right` from the far edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartRegion {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl StartRegion {
    /// Checks a point given relative to the bounds' top-left corner.
    pub fn contains(&self, rel_x: f64, rel_y: f64, bounds: &Bounds) -> bool {
        if let Some(top) = self.top {
            if rel_y < top {
                return false;
            }
        }
        if let Some(bottom) = self.bottom {
            if rel_y < bounds.height - bottom {
                return false;
            }
        }
        if let Some(left) = self.left {
            if rel_x < left {
                return false;
            }
        }
        if let Some(right) = self.right {
            if rel_x > bounds.width - right {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum travel along the dominant axis.
    pub min_distance: f64,
    /// Maximum travel allowed along the other axis.
    pub cross_axis_tolerance: f64,
    pub max_duration_millis: i64,
    pub start_region: Option<StartRegion>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            cross_axis_tolerance: 100.0,
            max_duration_millis: 300,
            start_region: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn label(self) -> &'static str {
        match self {
            SwipeDirection::None => "none",
            SwipeDirection::Up => "up",
            SwipeDirection::Down => "down",
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureResult {
    pub direction: SwipeDirection,
    pub detected: bool,
}

impl GestureResult {
    pub fn none() -> Self {
        Self { direction: SwipeDirection::None, detected: false }
    }

    pub fn swipe(direction: SwipeDirection) -> Self {
        Self { direction, detected: direction != SwipeDirection::None }
    }
}
