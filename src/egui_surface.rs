use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, StrokeKind};

use crate::core::{DrawOp, FontSpec, Rgba, Stroke, Surface};
use crate::geometry::Rect;

/// Horizontal offset of the second pass used to embolden text
const BOLD_OFFSET: f32 = 0.6;

/// [`Surface`] backed by an egui painter.
///
/// All shapes are tessellated by egui with anti-aliasing (feathering) on.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn to_stroke(stroke: Option<Stroke>) -> egui::Stroke {
    stroke
        .map(|s| egui::Stroke::new(s.width, to_color32(s.color)))
        .unwrap_or(egui::Stroke::NONE)
}

fn to_fill(fill: Option<Rgba>) -> Color32 {
    to_color32(fill.unwrap_or(Rgba::TRANSPARENT))
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    let origin = rect.origin().as_vec2();
    let size = rect.size().as_vec2();
    egui::Rect::from_min_size(egui::pos2(origin.x, origin.y), egui::vec2(size.x, size.y))
}

fn font_id(font: &FontSpec) -> FontId {
    FontId::proportional(font.size_px())
}

impl EguiSurface<'_> {
    fn text(&self, pos: Pos2, anchor: Align2, text: &str, font: &FontSpec, color: Rgba) {
        let color = to_color32(color);
        self.painter.text(pos, anchor, text, font_id(font), color);
        if font.bold {
            let shifted = pos + egui::vec2(BOLD_OFFSET, 0.0);
            self.painter.text(shifted, anchor, text, font_id(font), color);
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn draw(&mut self, op: DrawOp) {
        match op {
            DrawOp::Path { points, fill, stroke } => {
                let points = points.iter().map(|p| egui::pos2(p.x, p.y)).collect();
                self.painter
                    .add(Shape::convex_polygon(points, to_fill(fill), to_stroke(stroke)));
            }
            DrawOp::Rect { rect, fill, stroke } => {
                let rect = to_egui_rect(rect);
                if let Some(fill) = fill {
                    self.painter.rect_filled(rect, 0.0, to_color32(fill));
                }
                if stroke.is_some() {
                    self.painter
                        .rect_stroke(rect, 0.0, to_stroke(stroke), StrokeKind::Middle);
                }
            }
            DrawOp::Ellipse { rect, fill, stroke } => {
                let rect = to_egui_rect(rect);
                let radius = rect.size() / 2.0;
                if let Some(fill) = fill {
                    self.painter
                        .add(Shape::ellipse_filled(rect.center(), radius, to_color32(fill)));
                }
                if stroke.is_some() {
                    self.painter
                        .add(Shape::ellipse_stroke(rect.center(), radius, to_stroke(stroke)));
                }
            }
            DrawOp::TextInRect { rect, text, font, color } => {
                let center = to_egui_rect(rect).center();
                self.text(center, Align2::CENTER_CENTER, &text, &font, color);
            }
            DrawOp::Text { origin, text, font, color } => {
                let pos = egui::pos2(origin.x, origin.y);
                self.text(pos, Align2::LEFT_TOP, &text, &font, color);
            }
        }
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> glam::Vec2 {
        let galley = self
            .painter
            .layout_no_wrap(text.to_string(), font_id(font), Color32::BLACK);
        let size = galley.size();
        glam::Vec2::new(size.x, size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, LayerId, RawInput};

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(Rgba::RED), Color32::from_rgb(255, 0, 0));
        assert_eq!(to_color32(Rgba::TRANSPARENT), Color32::TRANSPARENT);
    }

    #[test]
    fn test_rect_conversion() {
        let rect = to_egui_rect(Rect::new(50, 1, 300, 30));
        assert_eq!(rect.min, egui::pos2(50.0, 1.0));
        assert_eq!(rect.max, egui::pos2(350.0, 31.0));
    }

    #[test]
    fn test_missing_fill_is_transparent() {
        assert_eq!(to_fill(None), Color32::TRANSPARENT);
        assert_eq!(to_fill(Some(Rgba::LIGHT_CYAN)), Color32::from_rgb(224, 255, 255));
    }

    #[test]
    fn test_measure_and_draw() {
        let ctx = Context::default();
        let mut short = glam::Vec2::ZERO;
        let mut long = glam::Vec2::ZERO;
        let output = ctx.run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::background());
            let mut surface = EguiSurface::new(&painter);
            let font = FontSpec::regular(22.0);
            short = surface.measure_text("Hi", &font);
            long = surface.measure_text("Hello, World!", &font);
            surface.draw(DrawOp::Ellipse {
                rect: Rect::new(0, 0, 20, 20),
                fill: Some(Rgba::BLUE),
                stroke: Some(Stroke::new(2.0, Rgba::DARK_VIOLET)),
            });
        });
        assert!(long.x > short.x);
        assert!(short.y > 0.0);
        assert_eq!(output.shapes.len(), 2);
    }
}
