//! Canvas-space geometry: points, canvas dimensions, positioned rects,
//! and the display-to-canvas coordinate mapping.
//!
//! All values are `f64` pixels in canvas space unless noted otherwise.
//!
//! # Example
//!
//! ```
//! use thumbcomposer::{CanvasSize, Point, PositionedRect};
//!
//! let canvas = CanvasSize::default();
//! let rect = PositionedRect::new(1000.0, 500.0, 200.0, 200.0);
//!
//! assert!(rect.contains(Point::new(1200.0, 700.0)));
//! assert!(rect.validate(canvas).is_ok());
//! ```

use num_traits::Float;

use crate::handle::Handle;

/// Smallest width or height an element may be resized to.
pub const MIN_ELEMENT_SIZE: f64 = 50.0;

/// Half-extent of the square around each handle point that counts as a hit.
pub const HANDLE_HIT_RADIUS: f64 = 20.0;

/// A point in canvas pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Pixel dimensions of the canvas backing store.
///
/// Missing fields deserialize to the [`HD`](Self::HD) dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// The 1280×720 thumbnail canvas.
    pub const HD: Self = Self::new(1280.0, 720.0);

    /// Create a new canvas size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::HD
    }
}

/// Axis-aligned rectangle of a movable element, in canvas pixel space.
///
/// Valid rects are at least [`MIN_ELEMENT_SIZE`] on each axis and lie
/// entirely inside the canvas; see [`validate`](Self::validate).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PositionedRect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `p` lies within the rect, edges included.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Canvas position of one of the eight resize handles.
    pub fn handle_point(&self, handle: Handle) -> Point {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;
        match handle {
            Handle::NorthWest => Point::new(self.x, self.y),
            Handle::NorthEast => Point::new(self.right(), self.y),
            Handle::SouthWest => Point::new(self.x, self.bottom()),
            Handle::SouthEast => Point::new(self.right(), self.bottom()),
            Handle::North => Point::new(cx, self.y),
            Handle::South => Point::new(cx, self.bottom()),
            Handle::East => Point::new(self.right(), cy),
            Handle::West => Point::new(self.x, cy),
        }
    }

    /// Check the element invariants against a canvas.
    ///
    /// Size floor is checked first, then origin, then the far edges. A NaN
    /// field fails the first check it takes part in.
    pub fn validate(&self, canvas: CanvasSize) -> Result<(), RectError> {
        if !(self.width >= MIN_ELEMENT_SIZE) || !(self.height >= MIN_ELEMENT_SIZE) {
            return Err(RectError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.x >= 0.0) || !(self.y >= 0.0) {
            return Err(RectError::NegativeOrigin {
                x: self.x,
                y: self.y,
            });
        }
        if !(self.right() <= canvas.width) || !(self.bottom() <= canvas.height) {
            return Err(RectError::OutsideCanvas {
                right: self.right(),
                bottom: self.bottom(),
                canvas_width: canvas.width,
                canvas_height: canvas.height,
            });
        }
        Ok(())
    }

    /// Translate (never resize) so the rect lies inside the canvas.
    ///
    /// A rect larger than the canvas on some axis is pinned to 0 on that axis.
    pub fn constrain_to(self, canvas: CanvasSize) -> Self {
        Self {
            x: clamp_origin(self.x, canvas.width - self.width),
            y: clamp_origin(self.y, canvas.height - self.height),
            ..self
        }
    }

    /// Distance from `p` to `anchor` on each axis.
    pub(crate) fn axis_distance(p: Point, anchor: Point) -> (f64, f64) {
        (Float::abs(p.x - anchor.x), Float::abs(p.y - anchor.y))
    }
}

/// `max(0, min(upper, v))`. Unlike `f64::clamp`, tolerates `upper < 0`.
pub(crate) fn clamp_origin(v: f64, upper: f64) -> f64 {
    v.min(upper).max(0.0)
}

/// A rect that breaks the element invariants.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum RectError {
    /// Width or height under [`MIN_ELEMENT_SIZE`].
    #[error("rect {width}×{height} is below the minimum element size")]
    TooSmall { width: f64, height: f64 },
    /// Origin left of or above the canvas.
    #[error("rect origin ({x}, {y}) is outside the canvas")]
    NegativeOrigin { x: f64, y: f64 },
    /// Far edge past the canvas.
    #[error("rect extends to ({right}, {bottom}) beyond the {canvas_width}×{canvas_height} canvas")]
    OutsideCanvas {
        right: f64,
        bottom: f64,
        canvas_width: f64,
        canvas_height: f64,
    },
}

/// Maps host display coordinates to canvas pixel coordinates.
///
/// The canvas may be shown scaled; each axis is scaled independently by
/// `canvas / displayed`, after subtracting the displayed box's origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayMapping {
    origin: Point,
    scale_x: f64,
    scale_y: f64,
}

impl DisplayMapping {
    /// Build a mapping for a canvas shown at `origin` with size
    /// `displayed_width`×`displayed_height` in display units.
    pub fn new(
        origin: Point,
        displayed_width: f64,
        displayed_height: f64,
        canvas: CanvasSize,
    ) -> Result<Self, MappingError> {
        if !(displayed_width > 0.0) || !(displayed_height > 0.0) {
            return Err(MappingError::ZeroDisplayDimension);
        }
        Ok(Self {
            origin,
            scale_x: canvas.width / displayed_width,
            scale_y: canvas.height / displayed_height,
        })
    }

    /// Identity mapping: canvas displayed at its native size at `(0, 0)`.
    pub fn identity() -> Self {
        Self {
            origin: Point::default(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Per-axis scale factors `(canvas_w / displayed_w, canvas_h / displayed_h)`.
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Convert a raw display point into canvas space.
    pub fn to_canvas(&self, raw: Point) -> Point {
        Point::new(
            (raw.x - self.origin.x) * self.scale_x,
            (raw.y - self.origin.y) * self.scale_y,
        )
    }
}

/// Coordinate mapping construction error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// Displayed width or height is zero, negative, or NaN.
    #[error("displayed canvas has zero width or height")]
    ZeroDisplayDimension,
}
