//! SVG preview of a composed thumbnail's geometry.
//!
//! Draws the canvas outline, the screenshot rect, the headshot circle the
//! renderer clips to (diameter `min(width, height)`, anchored at the rect's
//! top-left), and the eight resize handles of every present element. Useful
//! for docs, snapshots, and debugging layout defaults; it is not the
//! thumbnail renderer.
//!
//! # Example
//!
//! ```
//! use thumbcomposer::{Target, ThumbnailComposer, svg::render_frame_svg};
//!
//! let mut composer = ThumbnailComposer::new();
//! composer.attach_image(Target::Headshot);
//!
//! let svg = render_frame_svg(&composer.frame());
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::composer::Frame;
use crate::controller::Target;
use crate::geometry::PositionedRect;
use crate::handle::Handle;

/// Maximum pixel width of the canvas panel.
const MAX_PANEL_W: f64 = 640.0;
/// Maximum pixel height of the canvas panel.
const MAX_PANEL_H: f64 = 360.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top margin.
const MARGIN_TOP: f64 = 20.0;
/// Height of the label line above the panel.
const LABEL_H: f64 = 22.0;
/// Height of each annotation line below the panel.
const ANNOTATION_H: f64 = 16.0;
/// Side of a drawn handle square, in output pixels.
const HANDLE_SIDE: f64 = 6.0;

/// Render the frame's geometry as a complete SVG document.
pub fn render_frame_svg(frame: &Frame) -> String {
    let scale = (MAX_PANEL_W / frame.canvas.width).min(MAX_PANEL_H / frame.canvas.height);
    let pw = frame.canvas.width * scale;
    let ph = frame.canvas.height * scale;

    let annotations: Vec<String> = Target::ALL
        .into_iter()
        .filter_map(|t| frame.element(t).map(|r| annotate(t, &r)))
        .collect();

    let total_w = pw + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP
        + LABEL_H
        + ph
        + 8.0
        + ANNOTATION_H * annotations.len() as f64
        + MARGIN_TOP;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .canvas { fill: #3b1d55; stroke: #999; stroke-width: 1; }
  .screenshot { fill: #6ba3d6; stroke: #ffffff; stroke-width: 1.5; }
  .headshot { fill: #d6a36b; stroke: #ffffff; stroke-width: 2; }
  .bounds { fill: none; stroke: #ffffff; stroke-width: 0.75; stroke-dasharray: 4,2; }
  .handle { fill: #ffffff; stroke: #333; stroke-width: 0.75; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .canvas { stroke: #555; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    let label = format!(
        "{}  {}×{}",
        frame.settings.layout, frame.canvas.width as u32, frame.canvas.height as u32
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        y + 14.0,
        escape_xml(&label)
    ));
    svg.push('\n');
    y += LABEL_H;

    let ox = MARGIN_X;
    let oy = y;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="canvas"/>"#,
        ox, oy, pw, ph
    ));
    svg.push('\n');

    // Screenshot first: the renderer draws the headshot on top.
    if let Some(r) = frame.screenshot {
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="screenshot"/>"#,
            ox + r.x * scale,
            oy + r.y * scale,
            r.width * scale,
            r.height * scale
        ));
        svg.push('\n');
    }

    if let Some(r) = frame.headshot {
        let d = r.width.min(r.height) * scale;
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" class="headshot"/>"#,
            ox + r.x * scale + d / 2.0,
            oy + r.y * scale + d / 2.0,
            d / 2.0
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="bounds"/>"#,
            ox + r.x * scale,
            oy + r.y * scale,
            r.width * scale,
            r.height * scale
        ));
        svg.push('\n');
    }

    for target in Target::ALL {
        let Some(r) = frame.element(target) else {
            continue;
        };
        for handle in Handle::ALL {
            let p = r.handle_point(handle);
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" class="handle"><title>{} {}</title></rect>"#,
                ox + p.x * scale - HANDLE_SIDE / 2.0,
                oy + p.y * scale - HANDLE_SIDE / 2.0,
                HANDLE_SIDE,
                HANDLE_SIDE,
                target,
                handle
            ));
            svg.push('\n');
        }
    }

    y += ph + 8.0;
    for line in &annotations {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            y + 11.0,
            escape_xml(line)
        ));
        svg.push('\n');
        y += ANNOTATION_H;
    }

    svg.push_str("</svg>\n");
    svg
}

fn annotate(target: Target, r: &PositionedRect) -> String {
    format!(
        "{target} {}×{} at ({}, {})",
        r.width.round(),
        r.height.round(),
        r.x.round(),
        r.y.round()
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
