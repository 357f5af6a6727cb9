//! Thumbnail composition state: text settings, layout choice, image
//! presence, and the element geometry, packaged for a renderer.
//!
//! The composer holds no pixels. Image decoding, drawing and PNG export
//! belong to the host; the composer tells it *what* to draw through a
//! [`Frame`] and a [`Renderer`].
//!
//! # Example
//!
//! ```
//! use thumbcomposer::{Frame, Renderer, Target, ThumbnailComposer, ThumbnailLayout};
//!
//! struct Log(Vec<String>);
//! impl Renderer for Log {
//!     fn render(&mut self, frame: &Frame) {
//!         self.0.push(format!("{} {:?}", frame.settings.layout, frame.headshot));
//!     }
//! }
//!
//! let mut composer = ThumbnailComposer::new();
//! composer.set_layout(ThumbnailLayout::Split);
//! composer.attach_image(Target::Headshot);
//!
//! let mut log = Log(Vec::new());
//! composer.render_with(&mut log);
//! assert!(log.0[0].starts_with("split Some("));
//! assert_eq!(composer.export_filename(), "elixir-montreal-nov-2025-thumbnail.png");
//! ```

use alloc::format;
use alloc::string::String;

use crate::controller::{InteractionController, Target};
use crate::geometry::{CanvasSize, PositionedRect};
use crate::layout::ThumbnailLayout;

/// Text and style inputs for a thumbnail.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThumbnailSettings {
    pub layout: ThumbnailLayout,
    pub title: String,
    pub month: String,
    pub year: String,
    /// Title font size in pixels.
    pub font_size: u32,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            layout: ThumbnailLayout::Classic,
            title: String::new(),
            month: String::from("November"),
            year: String::from("2025"),
            font_size: 48,
        }
    }
}

/// Everything a renderer needs to draw one thumbnail.
///
/// Element rects are `None` when the element's image is absent.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub settings: ThumbnailSettings,
    pub canvas: CanvasSize,
    pub headshot: Option<PositionedRect>,
    pub screenshot: Option<PositionedRect>,
}

impl Frame {
    /// Rect of a present element.
    pub fn element(&self, target: Target) -> Option<PositionedRect> {
        match target {
            Target::Headshot => self.headshot,
            Target::Screenshot => self.screenshot,
        }
    }
}

/// Draws frames. Implemented by the host (canvas 2D, tiny-skia, SVG, ...).
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Owns the interaction controller plus the non-geometric settings, and
/// applies layout defaults when images arrive or the layout changes.
///
/// Every mutating call requests a redraw through the controller's callback.
#[derive(Debug, Default)]
pub struct ThumbnailComposer {
    controller: InteractionController,
    settings: ThumbnailSettings,
}

impl ThumbnailComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer around an existing controller.
    pub fn with_controller(controller: InteractionController) -> Self {
        Self {
            controller,
            settings: ThumbnailSettings::default(),
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Mutable access for pointer events and redraw registration.
    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    pub fn settings(&self) -> &ThumbnailSettings {
        &self.settings
    }

    /// Switch layout. Present elements are moved to the new layout's
    /// defaults; absent ones keep their rects.
    pub fn set_layout(&mut self, layout: ThumbnailLayout) {
        self.settings.layout = layout;
        for target in Target::ALL {
            if self.controller.has_image(target) {
                self.install_default(target);
            }
        }
        self.controller.request_redraw();
    }

    /// An image finished loading for `target`: mark it present and place it
    /// at the current layout's default.
    pub fn attach_image(&mut self, target: Target) {
        self.controller.set_image_present(target, true);
        self.install_default(target);
        self.controller.request_redraw();
    }

    /// Drop `target`'s image. Its rect is kept for the next upload.
    pub fn remove_image(&mut self, target: Target) {
        self.controller.set_image_present(target, false);
        self.controller.request_redraw();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.settings.title = title.into();
        self.controller.request_redraw();
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.settings.month = month.into();
        self.controller.request_redraw();
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.settings.year = year.into();
        self.controller.request_redraw();
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.settings.font_size = size;
        self.controller.request_redraw();
    }

    /// Snapshot for the renderer.
    pub fn frame(&self) -> Frame {
        let present = |t| self.controller.has_image(t).then(|| self.controller.rect(t));
        Frame {
            settings: self.settings.clone(),
            canvas: self.controller.canvas(),
            headshot: present(Target::Headshot),
            screenshot: present(Target::Screenshot),
        }
    }

    /// Hand the current frame to `renderer`.
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.frame());
    }

    /// Download name: `elixir-montreal-<mon>-<year>-thumbnail.png`, where
    /// `<mon>` is the first three characters of the month, lowercased.
    pub fn export_filename(&self) -> String {
        let month: String = self
            .settings
            .month
            .chars()
            .take(3)
            .flat_map(char::to_lowercase)
            .collect();
        format!("elixir-montreal-{month}-{}-thumbnail.png", self.settings.year)
    }

    fn install_default(&mut self, target: Target) {
        let canvas = self.controller.canvas();
        let rect = self.settings.layout.default_rect(target, canvas);
        tracing::debug!(
            layout = self.settings.layout.as_str(),
            element = %target,
            "installing layout default"
        );
        self.controller.set_rect(target, rect);
    }
}
