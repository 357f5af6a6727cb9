//! Pointer-driven drag/resize controller for the two movable elements.
//!
//! The controller owns both element rects and at most one in-progress
//! gesture ([`InteractionSession`]). Hosts feed it pointer events already
//! mapped into canvas space (see [`DisplayMapping`](crate::DisplayMapping))
//! and read rects back by value.
//!
//! ```text
//!   Idle ──pointer_down (hit)──▶ Dragging | Resizing
//!    ▲                                  │
//!    └──────── pointer_up / leave ──────┘
//! ```
//!
//! # Example
//!
//! ```
//! use thumbcomposer::{CanvasSize, InteractionController, Point, PositionedRect, Target};
//!
//! let mut ctl = InteractionController::new();
//! ctl.set_image_present(Target::Headshot, true);
//!
//! // Grab the headshot body and move it 100px left.
//! ctl.pointer_down(Point::new(1100.0, 600.0), CanvasSize::HD);
//! ctl.pointer_move(Point::new(1000.0, 600.0));
//! ctl.pointer_up();
//!
//! assert_eq!(ctl.rect(Target::Headshot), PositionedRect::new(900.0, 500.0, 200.0, 200.0));
//! ```

use alloc::boxed::Box;
use core::fmt;

use crate::geometry::{CanvasSize, HANDLE_HIT_RADIUS, Point, PositionedRect, RectError};
use crate::handle::{CursorHint, Handle};
use crate::resize::{drag, resize};

/// Which movable element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Target {
    /// Circular speaker photo.
    Headshot,
    /// Rectangular slide or screen capture.
    Screenshot,
}

impl Target {
    /// Hit-test priority order.
    pub const ALL: [Self; 2] = [Self::Headshot, Self::Screenshot];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Headshot => "headshot",
            Self::Screenshot => "screenshot",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-progress gesture, from pointer-down to pointer-up.
///
/// Values captured at pointer-down are the anchors every move is computed
/// against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InteractionSession {
    /// Moving an element.
    Dragging {
        target: Target,
        /// Pointer position at pointer-down.
        start_pointer: Point,
        /// Element rect at pointer-down.
        start_rect: PositionedRect,
        canvas: CanvasSize,
    },
    /// Resizing an element from one handle.
    Resizing {
        target: Target,
        handle: Handle,
        /// Pointer position at pointer-down.
        start_pointer: Point,
        /// Element rect at pointer-down.
        start_rect: PositionedRect,
        canvas: CanvasSize,
    },
}

impl InteractionSession {
    /// Element this gesture acts on.
    pub fn target(&self) -> Target {
        match *self {
            Self::Dragging { target, .. } | Self::Resizing { target, .. } => target,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Active handle when resizing.
    pub fn handle(&self) -> Option<Handle> {
        match *self {
            Self::Resizing { handle, .. } => Some(handle),
            Self::Dragging { .. } => None,
        }
    }

    fn cursor(&self) -> CursorHint {
        match *self {
            Self::Dragging { .. } => CursorHint::Move,
            Self::Resizing { handle, .. } => CursorHint::Resize(handle),
        }
    }
}

/// Result of hit-testing a canvas point against the present elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hit {
    /// On a resize handle.
    Handle(Target, Handle),
    /// Inside an element's body.
    Body(Target),
}

impl Hit {
    fn cursor(self) -> CursorHint {
        match self {
            Self::Handle(_, handle) => CursorHint::Resize(handle),
            Self::Body(_) => CursorHint::Move,
        }
    }
}

/// Controller settings.
///
/// # Example
///
/// ```
/// use thumbcomposer::{CanvasSize, ControllerConfig, InteractionController};
///
/// let ctl = InteractionController::with_config(
///     ControllerConfig::default()
///         .canvas(CanvasSize::new(1920.0, 1080.0))
///         .maintain_aspect_ratio(false),
/// );
/// assert!(!ctl.maintain_aspect_ratio());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Canvas used to validate rects in [`InteractionController::try_set_rect`].
    pub canvas: CanvasSize,
    /// Handle hit radius in canvas pixels.
    pub hit_radius: f64,
    /// Initial aspect-ratio lock.
    pub maintain_aspect_ratio: bool,
    /// Initial headshot rect.
    pub headshot: PositionedRect,
    /// Initial screenshot rect.
    pub screenshot: PositionedRect,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::HD,
            hit_radius: HANDLE_HIT_RADIUS,
            maintain_aspect_ratio: true,
            headshot: PositionedRect::new(1000.0, 500.0, 200.0, 200.0),
            screenshot: PositionedRect::new(600.0, 300.0, 400.0, 300.0),
        }
    }
}

impl ControllerConfig {
    /// Set the canvas size.
    pub fn canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    /// Set the handle hit radius.
    pub fn hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Set the initial aspect-ratio lock.
    pub fn maintain_aspect_ratio(mut self, on: bool) -> Self {
        self.maintain_aspect_ratio = on;
        self
    }

    /// Set an element's initial rect.
    pub fn rect(mut self, target: Target, rect: PositionedRect) -> Self {
        match target {
            Target::Headshot => self.headshot = rect,
            Target::Screenshot => self.screenshot = rect,
        }
        self
    }
}

/// Drag/resize state machine over the headshot and screenshot rects.
///
/// Single-threaded: every call runs to completion before the next.
/// Pointer calls never fail; events that don't apply are ignored.
pub struct InteractionController {
    headshot: PositionedRect,
    screenshot: PositionedRect,
    session: Option<InteractionSession>,
    maintain_aspect_ratio: bool,
    headshot_present: bool,
    screenshot_present: bool,
    hit_radius: f64,
    canvas: CanvasSize,
    cursor: CursorHint,
    redraw: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionController")
            .field("headshot", &self.headshot)
            .field("screenshot", &self.screenshot)
            .field("session", &self.session)
            .field("maintain_aspect_ratio", &self.maintain_aspect_ratio)
            .field("headshot_present", &self.headshot_present)
            .field("screenshot_present", &self.screenshot_present)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Controller with default rects on a 1280×720 canvas, aspect lock on,
    /// and no images present.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            headshot: config.headshot,
            screenshot: config.screenshot,
            session: None,
            maintain_aspect_ratio: config.maintain_aspect_ratio,
            headshot_present: false,
            screenshot_present: false,
            hit_radius: config.hit_radius,
            canvas: config.canvas,
            cursor: CursorHint::Default,
            redraw: None,
        }
    }

    // ── collaborator wiring ─────────────────────────────────────────────

    /// Register the callback invoked after every geometry change made by a
    /// pointer gesture. Replaces any previous callback.
    pub fn on_redraw(&mut self, callback: impl FnMut() + 'static) {
        self.redraw = Some(Box::new(callback));
    }

    /// Invoke the redraw callback, if one is registered.
    pub fn request_redraw(&mut self) {
        if let Some(redraw) = self.redraw.as_mut() {
            redraw();
        }
    }

    /// Record whether an element's image is loaded. Only present elements
    /// take part in hit-testing.
    pub fn set_image_present(&mut self, target: Target, present: bool) {
        match target {
            Target::Headshot => self.headshot_present = present,
            Target::Screenshot => self.screenshot_present = present,
        }
    }

    pub fn has_image(&self, target: Target) -> bool {
        match target {
            Target::Headshot => self.headshot_present,
            Target::Screenshot => self.screenshot_present,
        }
    }

    // ── accessors ───────────────────────────────────────────────────────

    /// Copy of an element's rect.
    pub fn rect(&self, target: Target) -> PositionedRect {
        match target {
            Target::Headshot => self.headshot,
            Target::Screenshot => self.screenshot,
        }
    }

    /// Replace an element's rect without validation.
    ///
    /// The caller is responsible for supplying a rect that satisfies the
    /// element invariants; see [`try_set_rect`](Self::try_set_rect) for a
    /// checked variant. Does not trigger a redraw.
    pub fn set_rect(&mut self, target: Target, rect: PositionedRect) {
        match target {
            Target::Headshot => self.headshot = rect,
            Target::Screenshot => self.screenshot = rect,
        }
    }

    /// Replace an element's rect after checking it against the configured
    /// canvas. On error the stored rect is unchanged.
    pub fn try_set_rect(&mut self, target: Target, rect: PositionedRect) -> Result<(), RectError> {
        if let Err(e) = rect.validate(self.canvas) {
            tracing::warn!(element = %target, error = %e, "rejected element rect");
            return Err(e);
        }
        self.set_rect(target, rect);
        Ok(())
    }

    pub fn set_maintain_aspect_ratio(&mut self, on: bool) {
        self.maintain_aspect_ratio = on;
    }

    pub fn maintain_aspect_ratio(&self) -> bool {
        self.maintain_aspect_ratio
    }

    /// Canvas the controller was configured with.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// The active gesture, if any.
    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    /// Last advisory cursor.
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    // ── hit-testing ─────────────────────────────────────────────────────

    /// What lies under `p`, without changing any state.
    ///
    /// Handles of every present element beat bodies, and the headshot beats
    /// the screenshot at each level.
    pub fn hit_test(&self, p: Point) -> Option<Hit> {
        let handle_hit = self.present_targets().find_map(|t| {
            Handle::hit(&self.rect(t), p, self.hit_radius).map(|h| Hit::Handle(t, h))
        });
        handle_hit.or_else(|| {
            self.present_targets()
                .find(|&t| self.rect(t).contains(p))
                .map(Hit::Body)
        })
    }

    /// Targets with an image, in priority order.
    fn present_targets(&self) -> impl Iterator<Item = Target> + '_ {
        Target::ALL.into_iter().filter(move |&t| self.has_image(t))
    }

    // ── pointer events ──────────────────────────────────────────────────

    /// Start a drag or resize if `p` hits a present element.
    ///
    /// A miss is a no-op. While a gesture is already active the event is
    /// ignored. Returns the advisory cursor.
    pub fn pointer_down(&mut self, p: Point, canvas: CanvasSize) -> CursorHint {
        if let Some(session) = &self.session {
            tracing::debug!(element = %session.target(), "pointer down ignored during gesture");
            return self.cursor;
        }

        let session = self.hit_test(p).map(|hit| match hit {
            Hit::Handle(target, handle) => InteractionSession::Resizing {
                target,
                handle,
                start_pointer: p,
                start_rect: self.rect(target),
                canvas,
            },
            Hit::Body(target) => InteractionSession::Dragging {
                target,
                start_pointer: p,
                start_rect: self.rect(target),
                canvas,
            },
        });

        self.cursor = match &session {
            Some(s) => {
                tracing::debug!(
                    element = %s.target(),
                    handle = ?s.handle(),
                    x = p.x,
                    y = p.y,
                    "gesture started"
                );
                s.cursor()
            }
            None => CursorHint::Default,
        };
        self.session = session;
        self.cursor
    }

    /// Apply the active gesture at `p`, or update the hover cursor when idle.
    ///
    /// Redraw is requested only when a rect was updated.
    pub fn pointer_move(&mut self, p: Point) -> CursorHint {
        let Some(session) = self.session else {
            self.cursor = self.hit_test(p).map_or(CursorHint::Default, Hit::cursor);
            return self.cursor;
        };

        let (target, rect) = match session {
            InteractionSession::Resizing {
                target,
                handle,
                start_pointer,
                start_rect,
                canvas,
            } => {
                let delta = p.delta_from(start_pointer);
                let keep = self.maintain_aspect_ratio;
                (target, resize(start_rect, handle, delta, canvas, keep))
            }
            InteractionSession::Dragging {
                target,
                start_pointer,
                start_rect,
                canvas,
            } => (target, drag(start_rect, p.delta_from(start_pointer), canvas)),
        };

        tracing::trace!(
            element = %target,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "element updated"
        );
        self.set_rect(target, rect);
        self.request_redraw();
        self.cursor
    }

    /// End any gesture and reset the cursor. Idempotent.
    pub fn pointer_up(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(element = %session.target(), "gesture ended");
        }
        self.cursor = CursorHint::Default;
    }

    /// Pointer left the canvas. Same as [`pointer_up`](Self::pointer_up).
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn with_both() -> InteractionController {
        let mut ctl = InteractionController::new();
        ctl.set_image_present(Target::Headshot, true);
        ctl.set_image_present(Target::Screenshot, true);
        ctl
    }

    fn counter(ctl: &mut InteractionController) -> Rc<Cell<u32>> {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        ctl.on_redraw(move || c.set(c.get() + 1));
        count
    }

    // ── hit-testing ─────────────────────────────────────────────────────

    #[test]
    fn absent_images_are_not_hit() {
        let ctl = InteractionController::new();
        assert_eq!(ctl.hit_test(Point::new(1100.0, 600.0)), None);
        assert_eq!(ctl.hit_test(Point::new(1000.0, 500.0)), None);
    }

    #[test]
    fn headshot_wins_overlap() {
        let mut ctl = with_both();
        ctl.set_rect(Target::Headshot, PositionedRect::new(650.0, 350.0, 200.0, 200.0));
        assert_eq!(
            ctl.hit_test(Point::new(750.0, 450.0)),
            Some(Hit::Body(Target::Headshot))
        );
    }

    #[test]
    fn screenshot_handle_beats_headshot_body() {
        let mut ctl = with_both();
        // Headshot body covers the screenshot's se corner (1000, 600).
        ctl.set_rect(Target::Headshot, PositionedRect::new(900.0, 520.0, 200.0, 200.0));
        assert_eq!(
            ctl.hit_test(Point::new(1000.0, 600.0)),
            Some(Hit::Handle(Target::Screenshot, Handle::SouthEast))
        );
    }

    #[test]
    fn screenshot_only_when_headshot_absent() {
        let mut ctl = with_both();
        ctl.set_image_present(Target::Headshot, false);
        ctl.set_rect(Target::Headshot, PositionedRect::new(650.0, 350.0, 200.0, 200.0));
        assert_eq!(
            ctl.hit_test(Point::new(750.0, 450.0)),
            Some(Hit::Body(Target::Screenshot))
        );
    }

    // ── pointer_down ────────────────────────────────────────────────────

    #[test]
    fn down_on_corner_starts_resize() {
        let mut ctl = with_both();
        let cursor = ctl.pointer_down(Point::new(1000.0, 500.0), CanvasSize::HD);
        assert_eq!(cursor, CursorHint::Resize(Handle::NorthWest));
        let s = ctl.session().unwrap();
        assert!(s.is_resizing());
        assert_eq!(s.target(), Target::Headshot);
        assert_eq!(s.handle(), Some(Handle::NorthWest));
    }

    #[test]
    fn down_on_body_starts_drag() {
        let mut ctl = with_both();
        let cursor = ctl.pointer_down(Point::new(800.0, 450.0), CanvasSize::HD);
        assert_eq!(cursor, CursorHint::Move);
        let s = ctl.session().unwrap();
        assert!(s.is_dragging());
        assert_eq!(s.target(), Target::Screenshot);
    }

    #[test]
    fn down_on_empty_canvas_is_noop() {
        let mut ctl = with_both();
        let before = (ctl.rect(Target::Headshot), ctl.rect(Target::Screenshot));
        assert_eq!(ctl.pointer_down(Point::new(10.0, 10.0), CanvasSize::HD), CursorHint::Default);
        assert!(ctl.is_idle());
        assert_eq!(before, (ctl.rect(Target::Headshot), ctl.rect(Target::Screenshot)));
    }

    #[test]
    fn down_during_gesture_is_ignored() {
        let mut ctl = with_both();
        ctl.pointer_down(Point::new(800.0, 450.0), CanvasSize::HD);
        ctl.pointer_down(Point::new(1000.0, 500.0), CanvasSize::HD);
        assert!(ctl.session().unwrap().is_dragging());
        assert_eq!(ctl.session().unwrap().target(), Target::Screenshot);
    }

    // ── pointer_move ────────────────────────────────────────────────────

    #[test]
    fn hover_updates_cursor_without_redraw() {
        let mut ctl = with_both();
        let redraws = counter(&mut ctl);
        assert_eq!(ctl.pointer_move(Point::new(1100.0, 600.0)), CursorHint::Move);
        assert_eq!(
            ctl.pointer_move(Point::new(1200.0, 600.0)),
            CursorHint::Resize(Handle::East)
        );
        assert_eq!(ctl.pointer_move(Point::new(5.0, 5.0)), CursorHint::Default);
        assert_eq!(redraws.get(), 0);
        assert!(ctl.is_idle());
    }

    #[test]
    fn drag_moves_and_redraws() {
        let mut ctl = with_both();
        let redraws = counter(&mut ctl);
        ctl.pointer_down(Point::new(1100.0, 600.0), CanvasSize::HD);
        ctl.pointer_move(Point::new(1050.0, 580.0));
        ctl.pointer_move(Point::new(1000.0, 560.0));
        assert_eq!(
            ctl.rect(Target::Headshot),
            PositionedRect::new(900.0, 460.0, 200.0, 200.0)
        );
        assert_eq!(redraws.get(), 2);
    }

    #[test]
    fn resize_moves_redraw_each_time() {
        let mut ctl = with_both();
        let redraws = counter(&mut ctl);
        // se corner of the headshot.
        ctl.pointer_down(Point::new(1200.0, 700.0), CanvasSize::HD);
        assert!(ctl.session().unwrap().is_resizing());
        ctl.pointer_move(Point::new(1180.0, 680.0));
        ctl.pointer_move(Point::new(1150.0, 650.0));
        assert_eq!(redraws.get(), 2);
        assert_eq!(ctl.rect(Target::Headshot).width, 150.0);
        ctl.pointer_up();
        assert_eq!(redraws.get(), 2);
    }

    #[test]
    fn resize_reads_aspect_lock_at_move_time() {
        let mut ctl = with_both();
        // East handle of the 400×300 screenshot.
        ctl.pointer_down(Point::new(1000.0, 450.0), CanvasSize::HD);
        ctl.set_maintain_aspect_ratio(false);
        ctl.pointer_move(Point::new(1080.0, 450.0));
        assert_eq!(ctl.rect(Target::Screenshot).height, 300.0);
        ctl.set_maintain_aspect_ratio(true);
        ctl.pointer_move(Point::new(1080.0, 450.0));
        assert!((ctl.rect(Target::Screenshot).height - 360.0).abs() < 1e-9);
    }

    // ── pointer_up ──────────────────────────────────────────────────────

    #[test]
    fn up_is_idempotent() {
        let mut ctl = with_both();
        ctl.pointer_down(Point::new(1100.0, 600.0), CanvasSize::HD);
        ctl.pointer_up();
        assert!(ctl.is_idle());
        assert_eq!(ctl.cursor(), CursorHint::Default);
        ctl.pointer_up();
        assert!(ctl.is_idle());
    }

    #[test]
    fn leave_ends_gesture() {
        let mut ctl = with_both();
        let redraws = counter(&mut ctl);
        ctl.pointer_down(Point::new(1100.0, 600.0), CanvasSize::HD);
        ctl.pointer_leave();
        ctl.pointer_move(Point::new(0.0, 0.0));
        assert_eq!(ctl.rect(Target::Headshot).x, 1000.0);
        assert_eq!(redraws.get(), 0);
    }

    // ── rect accessors ──────────────────────────────────────────────────

    #[test]
    fn rect_is_a_copy() {
        let mut ctl = InteractionController::new();
        let mut r = ctl.rect(Target::Headshot);
        r.x = 0.0;
        assert_eq!(ctl.rect(Target::Headshot).x, 1000.0);
        ctl.set_rect(Target::Headshot, r);
        assert_eq!(ctl.rect(Target::Headshot).x, 0.0);
    }

    #[test]
    fn set_rect_is_unchecked() {
        let mut ctl = InteractionController::new();
        let bad = PositionedRect::new(-10.0, 0.0, 10.0, 10.0);
        ctl.set_rect(Target::Screenshot, bad);
        assert_eq!(ctl.rect(Target::Screenshot), bad);
    }

    #[test]
    fn try_set_rect_rejects_and_keeps_old() {
        let mut ctl = InteractionController::new();
        let old = ctl.rect(Target::Screenshot);
        let bad = PositionedRect::new(1000.0, 0.0, 400.0, 300.0);
        assert!(matches!(
            ctl.try_set_rect(Target::Screenshot, bad),
            Err(RectError::OutsideCanvas { .. })
        ));
        assert_eq!(ctl.rect(Target::Screenshot), old);

        let good = PositionedRect::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(ctl.try_set_rect(Target::Screenshot, good), Ok(()));
        assert_eq!(ctl.rect(Target::Screenshot), good);
    }

    #[test]
    fn try_set_rect_rejects_nan() {
        let mut ctl = InteractionController::new();
        let old = ctl.rect(Target::Headshot);
        let bad = PositionedRect::new(f64::NAN, 0.0, f64::NAN, 100.0);
        assert!(ctl.try_set_rect(Target::Headshot, bad).is_err());
        assert_eq!(ctl.rect(Target::Headshot), old);
    }

    #[test]
    fn config_builder() {
        let ctl = InteractionController::with_config(
            ControllerConfig::default()
                .hit_radius(5.0)
                .rect(Target::Headshot, PositionedRect::new(0.0, 0.0, 100.0, 100.0)),
        );
        assert_eq!(ctl.rect(Target::Headshot).width, 100.0);
        assert!(ctl.maintain_aspect_ratio());
        assert_eq!(ctl.canvas(), CanvasSize::HD);
    }
}
