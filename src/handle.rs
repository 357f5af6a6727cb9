//! Resize handles (eight compass points on a rect's border) and advisory
//! cursor hints.
//!
//! ```text
//!     nw ──── n ──── ne
//!     │              │
//!     w              e
//!     │              │
//!     sw ──── s ──── se
//! ```
//!
//! Hit-testing walks [`Handle::ALL`] in order and returns the first match.
//! Corners come before edge midpoints, so a point near a corner of a small
//! rect resolves to the corner.

use core::fmt;
use core::str::FromStr;

use crate::geometry::{Point, PositionedRect};

/// One of the eight resize handles of a rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    #[cfg_attr(feature = "serde", serde(rename = "nw"))]
    NorthWest,
    #[cfg_attr(feature = "serde", serde(rename = "ne"))]
    NorthEast,
    #[cfg_attr(feature = "serde", serde(rename = "sw"))]
    SouthWest,
    #[cfg_attr(feature = "serde", serde(rename = "se"))]
    SouthEast,
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    North,
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    South,
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    East,
    #[cfg_attr(feature = "serde", serde(rename = "w"))]
    West,
}

impl Handle {
    /// All handles in hit-test order: corners, then edge midpoints.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
        Self::North,
        Self::South,
        Self::East,
        Self::West,
    ];

    /// Moves the top edge.
    pub fn has_north(self) -> bool {
        matches!(self, Self::North | Self::NorthWest | Self::NorthEast)
    }

    /// Moves the bottom edge.
    pub fn has_south(self) -> bool {
        matches!(self, Self::South | Self::SouthWest | Self::SouthEast)
    }

    /// Moves the right edge.
    pub fn has_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Moves the left edge.
    pub fn has_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Whether this is a corner handle.
    pub fn is_corner(self) -> bool {
        (self.has_north() || self.has_south()) && (self.has_east() || self.has_west())
    }

    /// First handle of `rect` within `radius` of `p` on both axes (strict).
    pub fn hit(rect: &PositionedRect, p: Point, radius: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|&h| {
            let (dx, dy) = PositionedRect::axis_distance(p, rect.handle_point(h));
            dx < radius && dy < radius
        })
    }

    /// Compass identifier: `"nw"`, `"n"`, …
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or(UnknownHandle)
    }
}

/// A string that names none of the eight handles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize handle (expected one of nw, ne, sw, se, n, s, e, w)")]
pub struct UnknownHandle;

/// Pointer cursor the host UI should show. Purely advisory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    #[default]
    Default,
    /// Over the body of a movable element, or dragging one.
    Move,
    /// Over a resize handle, or resizing from it.
    Resize(Handle),
}

impl CursorHint {
    /// CSS `cursor` value.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Resize(Handle::NorthWest) => "nw-resize",
            Self::Resize(Handle::NorthEast) => "ne-resize",
            Self::Resize(Handle::SouthWest) => "sw-resize",
            Self::Resize(Handle::SouthEast) => "se-resize",
            Self::Resize(Handle::North) => "n-resize",
            Self::Resize(Handle::South) => "s-resize",
            Self::Resize(Handle::East) => "e-resize",
            Self::Resize(Handle::West) => "w-resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HANDLE_HIT_RADIUS;

    #[test]
    fn components() {
        assert!(Handle::NorthWest.has_north() && Handle::NorthWest.has_west());
        assert!(!Handle::NorthWest.has_south() && !Handle::NorthWest.has_east());
        assert!(Handle::East.has_east());
        assert!(!Handle::East.has_north() && !Handle::East.has_south());
        assert!(Handle::SouthEast.is_corner());
        assert!(!Handle::South.is_corner());
    }

    #[test]
    fn corners_listed_before_edges() {
        let first_edge = Handle::ALL.iter().position(|h| !h.is_corner()).unwrap();
        assert!(Handle::ALL[first_edge..].iter().all(|h| !h.is_corner()));
        assert_eq!(first_edge, 4);
    }

    #[test]
    fn hit_exact_corner() {
        let r = PositionedRect::new(1000.0, 500.0, 200.0, 200.0);
        assert_eq!(
            Handle::hit(&r, Point::new(1000.0, 500.0), HANDLE_HIT_RADIUS),
            Some(Handle::NorthWest)
        );
        assert_eq!(
            Handle::hit(&r, Point::new(1210.0, 690.0), HANDLE_HIT_RADIUS),
            Some(Handle::SouthEast)
        );
        assert_eq!(
            Handle::hit(&r, Point::new(1100.0, 505.0), HANDLE_HIT_RADIUS),
            Some(Handle::North)
        );
    }

    #[test]
    fn hit_radius_is_strict() {
        let r = PositionedRect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(Handle::hit(&r, Point::new(120.0, 100.0), 20.0), None);
        assert_eq!(
            Handle::hit(&r, Point::new(119.9, 119.9), 20.0),
            Some(Handle::NorthWest)
        );
    }

    #[test]
    fn interior_misses_all_handles() {
        let r = PositionedRect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(Handle::hit(&r, Point::new(160.0, 160.0), 20.0), None);
    }

    #[test]
    fn small_rect_prefers_corner() {
        // On a 30px rect, the nw corner and the n midpoint are both in range
        // of (110, 100); the corner wins.
        let r = PositionedRect::new(100.0, 100.0, 30.0, 30.0);
        assert_eq!(
            Handle::hit(&r, Point::new(110.0, 100.0), 20.0),
            Some(Handle::NorthWest)
        );
    }

    #[test]
    fn str_round_trip() {
        for h in Handle::ALL {
            assert_eq!(h.as_str().parse::<Handle>(), Ok(h));
        }
        assert_eq!("north".parse::<Handle>(), Err(UnknownHandle));
    }

    #[test]
    fn cursor_names() {
        assert_eq!(CursorHint::default().css_name(), "default");
        assert_eq!(CursorHint::Move.css_name(), "move");
        assert_eq!(CursorHint::Resize(Handle::SouthWest).css_name(), "sw-resize");
        assert_eq!(CursorHint::Resize(Handle::East).css_name(), "e-resize");
    }
}
