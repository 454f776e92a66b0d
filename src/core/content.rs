use glam::IVec2;

use super::chrome::WindowState;
use super::surface::{DrawOp, FontSpec, Rgba, Surface};
use crate::geometry::Rect;

/// Content drawn inside the chrome, selected by the last clicked button
pub trait Content {
    /// Caption shown in the title bar
    fn caption(&self) -> &str;

    /// Labels for the action buttons, in display order
    fn button_labels(&self) -> Vec<String>;

    /// Draw the content; called after the chrome has been drawn
    fn render(&self, state: &WindowState, surface: &mut dyn Surface);
}

pub const FIGURE_CAPTION: &str = "My Frameless Window";
pub const FIGURE_LABELS: [&str; 3] = ["Circle", "Hello", "To Do"];

pub const CIRCLE_DIAMETER: i32 = 200;
pub const GREETING: &str = "Hello, World!";
pub const GREETING_FONT: FontSpec = FontSpec::regular(22.0);

/// Figure chosen by a button tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    None,
    Circle,
    Greeting,
    /// Third button; draws nothing yet
    Reserved,
}

impl Figure {
    pub fn from_index(index: usize) -> Figure {
        match index {
            1 => Figure::Circle,
            2 => Figure::Greeting,
            3 => Figure::Reserved,
            _ => Figure::None,
        }
    }
}

/// Draws a yellow circle or a greeting in the middle of the window
#[derive(Debug, Clone, Default)]
pub struct FigureContent;

impl FigureContent {
    pub fn new() -> Self {
        Self
    }

    fn draw_circle(client: IVec2, surface: &mut dyn Surface) {
        surface.draw(DrawOp::Ellipse {
            rect: Rect::new(
                (client.x - CIRCLE_DIAMETER) / 2,
                (client.y - CIRCLE_DIAMETER) / 2,
                CIRCLE_DIAMETER,
                CIRCLE_DIAMETER,
            ),
            fill: Some(Rgba::YELLOW),
            stroke: None,
        });
    }

    fn draw_greeting(client: IVec2, surface: &mut dyn Surface) {
        let extent = surface.measure_text(GREETING, &GREETING_FONT);
        let origin = (client.as_vec2() - extent) / 2.0;
        surface.draw(DrawOp::Text {
            origin,
            text: GREETING.to_string(),
            font: GREETING_FONT,
            color: Rgba::BLACK,
        });
    }
}

impl Content for FigureContent {
    fn caption(&self) -> &str {
        FIGURE_CAPTION
    }

    fn button_labels(&self) -> Vec<String> {
        FIGURE_LABELS.iter().map(|s| s.to_string()).collect()
    }

    fn render(&self, state: &WindowState, surface: &mut dyn Surface) {
        let client = state.client_size();
        match Figure::from_index(state.selected_figure()) {
            Figure::None => {}
            Figure::Circle => Self::draw_circle(client, surface),
            Figure::Greeting => Self::draw_greeting(client, surface),
            Figure::Reserved => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_from_index() {
        assert_eq!(Figure::from_index(0), Figure::None);
        assert_eq!(Figure::from_index(1), Figure::Circle);
        assert_eq!(Figure::from_index(2), Figure::Greeting);
        assert_eq!(Figure::from_index(3), Figure::Reserved);
        assert_eq!(Figure::from_index(9), Figure::None);
    }

    #[test]
    fn test_caption_and_labels() {
        let content = FigureContent::new();
        assert_eq!(content.caption(), "My Frameless Window");
        assert_eq!(content.button_labels(), vec!["Circle", "Hello", "To Do"]);
    }
}
