//! Interactive geometry for a thumbnail composer.
//!
//! Two movable images (a headshot and a screenshot) sit on a fixed-size
//! canvas. Hosts forward pointer events in canvas space; the controller
//! turns them into drags and resizes that respect canvas bounds, a minimum
//! element size, and an optional aspect-ratio lock.
//!
//! Pure geometry with no pixel operations. `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`geometry`]: Points, canvas size, element rects, display→canvas mapping
//! - [`handle`]: The eight resize handles, hit-testing order, cursor hints
//! - [`resize`]: Drag and resize computation
//! - [`controller`]: Pointer-driven drag/resize state machine
//! - [`layout`]: Thumbnail layouts and their default element rects
//! - [`composer`]: Settings, image presence, and frames for a renderer
//! - `svg`: SVG preview of a frame's geometry (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod composer;
pub mod controller;
pub mod geometry;
pub mod handle;
pub mod layout;
pub mod resize;
#[cfg(feature = "svg")]
pub mod svg;

pub use composer::{Frame, Renderer, ThumbnailComposer, ThumbnailSettings};
pub use controller::{ControllerConfig, Hit, InteractionController, InteractionSession, Target};
pub use geometry::{
    CanvasSize, DisplayMapping, HANDLE_HIT_RADIUS, MIN_ELEMENT_SIZE, MappingError, Point,
    PositionedRect, RectError,
};
pub use handle::{CursorHint, Handle, UnknownHandle};
pub use layout::{LayoutParseError, ThumbnailLayout};
pub use resize::{drag, resize};
