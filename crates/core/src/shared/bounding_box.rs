use crate::shared::constants::{DEFAULT_IOU_EPS, FRAME_HEIGHT, FRAME_WIDTH};
use crate::shared::numeric::{nan_max, nan_min};

/// Axis-aligned 2D box in center/size encoding.
///
/// Any component may be NaN to mark the box as unavailable; NaN then
/// propagates through corners, clipping and IoU.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub center: [f64; 2],
    pub size: [f64; 2],
}

/// Corner form `(x_min, y_min, x_max, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// Rectangle boxes are truncated to before IoU is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl BoundingBox {
    pub fn new(center: [f64; 2], size: [f64; 2]) -> Self {
        Self { center, size }
    }

    pub fn corners(&self) -> Corners {
        let [cx, cy] = self.center;
        let [w, h] = self.size;
        Corners {
            x_min: cx - 0.5 * w,
            y_min: cy - 0.5 * h,
            x_max: cx + 0.5 * w,
            y_max: cy + 0.5 * h,
        }
    }

    pub fn iou(&self, other: &BoundingBox, window: &ClipWindow) -> f64 {
        self.iou_with_eps(other, window, DEFAULT_IOU_EPS)
    }

    /// Intersection over union after clipping both boxes to `window`.
    ///
    /// `eps` is added to the union, so zero-area pairs yield 0.
    pub fn iou_with_eps(&self, other: &BoundingBox, window: &ClipWindow, eps: f64) -> f64 {
        let a = self.corners().clip(window);
        let b = other.corners().clip(window);

        let x_min = nan_max(a.x_min, b.x_min);
        let y_min = nan_max(a.y_min, b.y_min);
        let x_max = nan_min(a.x_max, b.x_max);
        let y_max = nan_min(a.y_max, b.y_max);

        let inter = nan_max(0.0, x_max - x_min) * nan_max(0.0, y_max - y_min);
        inter / (a.area() + b.area() - inter + eps)
    }
}

impl Corners {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Truncates the corners to `window`.
    ///
    /// The max corner is clamped first and the min corner second, so a
    /// box lying entirely outside collapses onto the nearest clip edge
    /// instead of turning inside out.
    pub fn clip(&self, window: &ClipWindow) -> Corners {
        let [clip_x_min, clip_x_max] = window.x;
        let [clip_y_min, clip_y_max] = window.y;

        let x_max = nan_min(nan_max(self.x_max, clip_x_min), clip_x_max);
        let y_max = nan_min(nan_max(self.y_max, clip_y_min), clip_y_max);
        let x_min = nan_max(nan_min(self.x_min, clip_x_max), clip_x_min);
        let y_min = nan_max(nan_min(self.y_min, clip_y_max), clip_y_min);

        Corners {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }
}

impl ClipWindow {
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self { x, y }
    }

    pub fn unbounded() -> Self {
        Self {
            x: [f64::NEG_INFINITY, f64::INFINITY],
            y: [f64::NEG_INFINITY, f64::INFINITY],
        }
    }

    /// The full camera frame.
    pub fn frame() -> Self {
        Self {
            x: [0.0, FRAME_WIDTH],
            y: [0.0, FRAME_HEIGHT],
        }
    }
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}
