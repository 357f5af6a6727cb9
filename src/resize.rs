//! Drag and resize computation for a single element.
//!
//! Both functions are pure: they take the rect captured when the gesture
//! started plus the pointer delta since then, and return the new rect.
//! Computing from the start rect (rather than accumulating per-move deltas)
//! keeps the result independent of how many move events were delivered.

use crate::geometry::{CanvasSize, MIN_ELEMENT_SIZE, Point, PositionedRect, clamp_origin};
use crate::handle::Handle;

/// Translate `start` by `delta`, keeping the whole rect on the canvas.
///
/// Width and height are never changed.
pub fn drag(start: PositionedRect, delta: Point, canvas: CanvasSize) -> PositionedRect {
    PositionedRect {
        x: clamp_origin(start.x + delta.x, canvas.width - start.width),
        y: clamp_origin(start.y + delta.y, canvas.height - start.height),
        ..start
    }
}

/// Resize `start` by dragging `handle` by `delta`.
///
/// Stages run in a fixed order, and reordering them changes the result at
/// canvas edges:
///
/// 1. Edge deltas: west/north edges move the origin (floored at 0) and
///    grow the size by the opposite of the delta; east/south edges grow the
///    size, floored at [`MIN_ELEMENT_SIZE`].
/// 2. Aspect correction (when `keep_aspect`), using the start rect's ratio.
///    Any handle with a horizontal component derives height from width,
///    re-anchoring the top edge for north handles. Pure north/south handles
///    derive width from height and keep the left edge.
/// 3. Canvas clamp: negative origins are folded into the size, then sizes
///    are cut back to the far canvas edges.
/// 4. Size floor at [`MIN_ELEMENT_SIZE`].
pub fn resize(
    start: PositionedRect,
    handle: Handle,
    delta: Point,
    canvas: CanvasSize,
    keep_aspect: bool,
) -> PositionedRect {
    let PositionedRect {
        x: x0,
        y: y0,
        width: w0,
        height: h0,
    } = start;
    let (dx, dy) = (delta.x, delta.y);

    let mut x = x0;
    let mut y = y0;
    let mut w = w0;
    let mut h = h0;

    // Stage 1: edge deltas.
    if handle.has_west() {
        x = (x0 + dx).max(0.0);
        w = w0 - dx;
    }
    if handle.has_east() {
        w = (w0 + dx).max(MIN_ELEMENT_SIZE);
    }
    if handle.has_north() {
        y = (y0 + dy).max(0.0);
        h = h0 - dy;
    }
    if handle.has_south() {
        h = (h0 + dy).max(MIN_ELEMENT_SIZE);
    }

    // Stage 2: aspect correction. Corners go through the horizontal branch.
    if keep_aspect {
        let ratio = w0 / h0;
        if handle.has_west() || handle.has_east() {
            h = w / ratio;
            if handle.has_north() {
                y = y0 + h0 - h;
            }
        } else if handle.has_north() || handle.has_south() {
            w = h * ratio;
        }
    }

    // Stage 3: canvas clamp.
    if x < 0.0 {
        w += x;
        x = 0.0;
    }
    if y < 0.0 {
        h += y;
        y = 0.0;
    }
    if x + w > canvas.width {
        w = canvas.width - x;
    }
    if y + h > canvas.height {
        h = canvas.height - y;
    }

    // Stage 4: size floor.
    PositionedRect {
        x,
        y,
        width: w.max(MIN_ELEMENT_SIZE),
        height: h.max(MIN_ELEMENT_SIZE),
    }
}
