use glam::Vec2;

use crate::geometry::Rect;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
    pub const PURPLE: Rgba = Rgba::rgb(128, 0, 128);
    pub const DARK_VIOLET: Rgba = Rgba::rgb(148, 0, 211);
    pub const LIGHT_CYAN: Rgba = Rgba::rgb(224, 255, 255);
    pub const BUTTON_FACE: Rgba = Rgba::rgb(240, 240, 240);
}

/// Outline pen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba,
}

impl Stroke {
    pub const fn new(width: f32, color: Rgba) -> Self {
        Self { width, color }
    }
}

/// Font request; size is in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size_pt: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn regular(size_pt: f32) -> Self {
        Self { size_pt, bold: false }
    }

    pub const fn bold(size_pt: f32) -> Self {
        Self { size_pt, bold: true }
    }

    /// Pixel size at 96 DPI
    pub fn size_px(&self) -> f32 {
        self.size_pt * 96.0 / 72.0
    }
}

/// 2D drawing operations submitted to a surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Closed polygon through `points`
    Path {
        points: Vec<Vec2>,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },

    /// Axis-aligned rectangle
    Rect {
        rect: Rect,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },

    /// Ellipse inscribed in `rect`
    Ellipse {
        rect: Rect,
        fill: Option<Rgba>,
        stroke: Option<Stroke>,
    },

    /// Text centered on both axes within `rect`
    TextInRect {
        rect: Rect,
        text: String,
        font: FontSpec,
        color: Rgba,
    },

    /// Text with its top-left corner at `origin`
    Text {
        origin: Vec2,
        text: String,
        font: FontSpec,
        color: Rgba,
    },
}

/// Drawing target for one render pass
pub trait Surface {
    /// Draw a single operation
    fn draw(&mut self, op: DrawOp);

    /// Size of `text` as it would be rendered with `font`
    fn measure_text(&self, text: &str, font: &FontSpec) -> Vec2;
}

/// Surface that records operations instead of drawing them.
///
/// Text is measured with a fixed advance per character, which is enough for
/// layout arithmetic that only depends on the reported extent.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> Vec2 {
        let px = font.size_px();
        Vec2::new(text.chars().count() as f32 * px * 0.5, px * 1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_px() {
        assert!((FontSpec::regular(12.0).size_px() - 16.0).abs() < 1e-4);
        assert!((FontSpec::bold(13.0).size_px() - 17.3333).abs() < 1e-3);
    }

    #[test]
    fn test_recording_surface_keeps_order() {
        let mut surface = RecordingSurface::new();
        let first = DrawOp::Rect {
            rect: Rect::new(0, 0, 1, 1),
            fill: Some(Rgba::RED),
            stroke: None,
        };
        let second = DrawOp::Ellipse {
            rect: Rect::new(0, 0, 2, 2),
            fill: None,
            stroke: Some(Stroke::new(1.0, Rgba::BLUE)),
        };
        surface.draw(first.clone());
        surface.draw(second.clone());
        assert_eq!(surface.into_ops(), vec![first, second]);
    }

    #[test]
    fn test_recording_measure_scales_with_length() {
        let surface = RecordingSurface::new();
        let font = FontSpec::regular(22.0);
        let short = surface.measure_text("Hi", &font);
        let long = surface.measure_text("Hello, World!", &font);
        assert!(long.x > short.x);
        assert_eq!(long.y, short.y);
    }
}
