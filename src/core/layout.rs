use glam::IVec2;

use crate::geometry::Rect;

pub const BUTTON_WIDTH: i32 = 110;
pub const BUTTON_HEIGHT: i32 = 30;
pub const BUTTON_SPACING: i32 = 20;
/// Gap between the button row and the bottom edge of the client area
pub const BUTTON_BOTTOM_MARGIN: i32 = 10;

pub const CONTROL_SIZE: i32 = 20;
pub const CONTROL_INSET: i32 = 2;

/// One clickable action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub label: String,
    pub rect: Rect,
    /// 1-based position in the row
    pub tag: usize,
}

/// Total span of a row of `count` buttons including the gaps between them
pub fn row_width(count: usize) -> i32 {
    (BUTTON_WIDTH + BUTTON_SPACING) * count as i32 - BUTTON_SPACING
}

/// Lays out a centered row of buttons anchored above the bottom edge.
pub fn layout_buttons(labels: &[String], client: IVec2) -> Vec<ButtonDescriptor> {
    if labels.is_empty() {
        return Vec::new();
    }

    let start_x = (client.x - row_width(labels.len())) / 2;
    let start_y = client.y - BUTTON_HEIGHT - BUTTON_BOTTOM_MARGIN;

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| ButtonDescriptor {
            label: label.clone(),
            rect: Rect::new(
                start_x + i as i32 * (BUTTON_WIDTH + BUTTON_SPACING),
                start_y,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            tag: i + 1,
        })
        .collect()
}

/// Hit regions of the two circular window controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegions {
    /// Top-right corner
    pub close: Rect,
    /// Top-left corner
    pub maximize: Rect,
}

impl ControlRegions {
    pub fn for_client(client: IVec2) -> Self {
        Self {
            close: Rect::new(
                client.x - CONTROL_SIZE - CONTROL_INSET,
                CONTROL_INSET,
                CONTROL_SIZE,
                CONTROL_SIZE,
            ),
            maximize: Rect::new(CONTROL_INSET, CONTROL_INSET, CONTROL_SIZE, CONTROL_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_buttons_in_400x300() {
        let buttons = layout_buttons(&labels(&["A", "B"]), IVec2::new(400, 300));
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].rect, Rect::new(80, 260, 110, 30));
        assert_eq!(buttons[1].rect, Rect::new(210, 260, 110, 30));
        assert_eq!(buttons[0].tag, 1);
        assert_eq!(buttons[1].tag, 2);
        assert_eq!(buttons[1].rect.right() - buttons[0].rect.x, 240);
    }

    #[test]
    fn test_row_is_centered_for_many_widths() {
        for count in 1..=6 {
            let names: Vec<String> = (0..count).map(|i| format!("Button {}", i + 1)).collect();
            for width in [300, 401, 640, 799, 1920] {
                let buttons = layout_buttons(&names, IVec2::new(width, 500));
                let total = row_width(count);
                assert_eq!(total, 130 * count as i32 - 20);
                let first = buttons.first().map(|b| b.rect.x);
                let last = buttons.last().map(|b| b.rect.right());
                assert_eq!(first, Some((width - total) / 2));
                assert_eq!(last.zip(first).map(|(r, l)| r - l), Some(total));
            }
        }
    }

    #[test]
    fn test_labels_and_tags_follow_order() {
        let buttons = layout_buttons(&labels(&["Circle", "Hello", "To Do"]), IVec2::new(800, 600));
        let got: Vec<(&str, usize)> = buttons.iter().map(|b| (b.label.as_str(), b.tag)).collect();
        assert_eq!(got, vec![("Circle", 1), ("Hello", 2), ("To Do", 3)]);
    }

    #[test]
    fn test_empty_labels_produce_no_buttons() {
        assert!(layout_buttons(&[], IVec2::new(400, 300)).is_empty());
    }

    #[test]
    fn test_narrow_client_truncates_toward_zero() {
        // (100 - 370) / 2 = -135
        let buttons = layout_buttons(&labels(&["a", "b", "c"]), IVec2::new(100, 100));
        assert_eq!(buttons[0].rect.x, -135);
    }

    #[test]
    fn test_control_regions() {
        let regions = ControlRegions::for_client(IVec2::new(400, 300));
        assert_eq!(regions.close, Rect::new(378, 2, 20, 20));
        assert_eq!(regions.maximize, Rect::new(2, 2, 20, 20));
    }

    #[test]
    fn test_controls_never_overlap_buttons() {
        for (w, h) in [(400, 300), (800, 600), (1280, 200)] {
            let client = IVec2::new(w, h);
            let regions = ControlRegions::for_client(client);
            for button in layout_buttons(&labels(&["A", "B", "C"]), client) {
                assert!(!regions.close.intersects(&button.rect));
                assert!(!regions.maximize.intersects(&button.rect));
            }
        }
    }
}
