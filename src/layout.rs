//! Thumbnail layouts and the default element rects each one installs.
//!
//! | layout     | headshot                      | screenshot                 |
//! |------------|-------------------------------|----------------------------|
//! | `classic`  | `(cw-250, ch-250, 200, 200)`  | `(500, 200, 400, 300)`     |
//! | `split`    | `(cw*0.6+50, 100, 180, 180)`  | `(cw*0.6+50, 300, 400, 300)` |
//! | `centered` | `(cw/2-100, ch-250, 200, 200)`| `(cw/2-200, 450, 400, 300)` |
//!
//! Defaults are translated inside the canvas before being returned, so an
//! installed default always satisfies the element invariants on canvases at
//! least as large as the element.

use core::fmt;
use core::str::FromStr;

use crate::controller::Target;
use crate::geometry::{CanvasSize, PositionedRect};

/// Visual arrangement of the thumbnail.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThumbnailLayout {
    /// Title left, screenshot center, headshot bottom-right.
    #[default]
    Classic,
    /// Text on the left 60%, images stacked on the right.
    Split,
    /// Everything centered under the logo.
    Centered,
}

impl ThumbnailLayout {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Split, Self::Centered];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Split => "split",
            Self::Centered => "centered",
        }
    }

    /// Default rect for `target` under this layout, kept inside `canvas`.
    pub fn default_rect(self, target: Target, canvas: CanvasSize) -> PositionedRect {
        let raw = self.raw_default(target, canvas);
        let fitted = raw.constrain_to(canvas);
        if fitted != raw {
            tracing::warn!(
                layout = self.as_str(),
                element = %target,
                x = raw.x,
                y = raw.y,
                "layout default moved inside canvas"
            );
        }
        fitted
    }

    fn raw_default(self, target: Target, canvas: CanvasSize) -> PositionedRect {
        let CanvasSize {
            width: cw,
            height: ch,
        } = canvas;
        match (self, target) {
            (Self::Classic, Target::Headshot) => {
                PositionedRect::new(cw - 250.0, ch - 250.0, 200.0, 200.0)
            }
            (Self::Classic, Target::Screenshot) => PositionedRect::new(500.0, 200.0, 400.0, 300.0),
            (Self::Split, Target::Headshot) => {
                PositionedRect::new(cw * 0.6 + 50.0, 100.0, 180.0, 180.0)
            }
            (Self::Split, Target::Screenshot) => {
                PositionedRect::new(cw * 0.6 + 50.0, 300.0, 400.0, 300.0)
            }
            (Self::Centered, Target::Headshot) => {
                PositionedRect::new(cw / 2.0 - 100.0, ch - 250.0, 200.0, 200.0)
            }
            (Self::Centered, Target::Screenshot) => {
                PositionedRect::new(cw / 2.0 - 200.0, 450.0, 400.0, 300.0)
            }
        }
    }
}

impl fmt::Display for ThumbnailLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbnailLayout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(LayoutParseError)
    }
}

/// A layout name other than `classic`, `split` or `centered`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout (expected classic, split or centered)")]
pub struct LayoutParseError;
