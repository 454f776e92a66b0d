use glam::{IVec2, Vec2};
use log::{debug, info};

use super::content::Content;
use super::host::HostWindow;
use super::layout::{layout_buttons, ButtonDescriptor, ControlRegions};
use super::surface::{DrawOp, FontSpec, Rgba, Stroke, Surface};
use crate::geometry::{arc_points, Rect, ARC_SEGMENTS};

pub const DEFAULT_CAPTION: &str = "My Window";
pub const DEFAULT_LABELS: [&str; 3] = ["Button 1", "Button 2", "Button 3"];

/// Distance of a normal-mode window from the top of the display
pub const TOP_OFFSET: i32 = 50;

/// Bounding box of each rounded panel corner
pub const CORNER_DIAMETER: i32 = 40;
/// Inset of the panel from the left, top and right edges
pub const PANEL_INSET: i32 = 16;
pub const PANEL_BOTTOM_INSET: i32 = 2;

pub const TITLE_WIDTH: i32 = 300;
pub const TITLE_HEIGHT: i32 = 30;
pub const TITLE_TOP: i32 = 1;

pub const BODY_COLOR: Rgba = Rgba::LIGHT_CYAN;
pub const CAPTION_FONT: FontSpec = FontSpec::bold(13.0);

/// Pointer event with its position in both coordinate spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Relative to the client area, in logical units
    pub client: IVec2,
    /// Relative to the screen, in pixels
    pub screen: IVec2,
}

impl PointerEvent {
    pub fn new(client: IVec2, screen: IVec2) -> Self {
        Self { client, screen }
    }
}

/// Pointer and window positions captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub pointer: IVec2,
    pub window: IVec2,
}

impl DragAnchor {
    /// Window position for the pointer at `pointer`, relative to the anchor
    pub fn window_position_for(&self, pointer: IVec2) -> IVec2 {
        self.window + (pointer - self.pointer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragAnchor),
}

/// State shared between the chrome and the content it hosts
#[derive(Debug, Clone)]
pub struct WindowState {
    client: IVec2,
    caption: String,
    labels: Vec<String>,
    selected_figure: usize,
    drag: DragState,
}

impl WindowState {
    pub fn client_size(&self) -> IVec2 {
        self.client
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Tag of the last clicked button, 0 when nothing is selected
    pub fn selected_figure(&self) -> usize {
        self.selected_figure
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }
}

/// Borderless window with custom chrome.
///
/// Owns the derived geometry (control hit regions, button row) and keeps it
/// in sync with the client size. Content drawing is delegated to an optional
/// [`Content`] that is rendered after the chrome.
pub struct FramelessWindow {
    state: WindowState,
    controls: ControlRegions,
    buttons: Vec<ButtonDescriptor>,
    restore_size: Option<IVec2>,
    content: Option<Box<dyn Content>>,
}

impl FramelessWindow {
    /// Create a window with the default caption and labels
    pub fn new(width: i32, height: i32) -> Self {
        let client = IVec2::new(width, height);
        let labels: Vec<String> = DEFAULT_LABELS.iter().map(|s| s.to_string()).collect();

        let mut window = Self {
            state: WindowState {
                client,
                caption: DEFAULT_CAPTION.to_string(),
                labels: Vec::new(),
                selected_figure: 0,
                drag: DragState::Idle,
            },
            controls: ControlRegions::for_client(client),
            buttons: Vec::new(),
            restore_size: None,
            content: None,
        };
        window.set_button_labels(labels);
        window
    }

    /// Create a window whose caption, labels and content drawing come from `content`
    pub fn with_content(width: i32, height: i32, content: Box<dyn Content>) -> Self {
        let mut window = Self::new(width, height);
        window.set_caption(content.caption());
        window.set_button_labels(content.button_labels());
        window.content = Some(content);
        window
    }

    /// Top-left position that centers a window of `width` horizontally
    pub fn initial_position(display: IVec2, width: i32) -> IVec2 {
        IVec2::new((display.x - width) / 2, TOP_OFFSET)
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn controls(&self) -> &ControlRegions {
        &self.controls
    }

    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.buttons
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.state.caption = caption.into();
    }

    /// Replace the button row with one button per label
    pub fn set_button_labels(&mut self, labels: Vec<String>) {
        self.buttons = layout_buttons(&labels, self.state.client);
        self.state.labels = labels;
        if self.state.selected_figure > self.buttons.len() {
            self.state.selected_figure = 0;
        }
        debug!(
            "Laid out {} buttons for client {}x{}",
            self.buttons.len(),
            self.state.client.x,
            self.state.client.y
        );
    }

    pub fn handle_resize(&mut self, client: IVec2) {
        self.state.client = client;
        self.controls = ControlRegions::for_client(client);
        self.state.selected_figure = 0;
        let labels = std::mem::take(&mut self.state.labels);
        self.set_button_labels(labels);
    }

    pub fn handle_pointer_down(&mut self, event: PointerEvent, host: &dyn HostWindow) {
        if self.controls.close.contains(event.client) {
            info!("Close control activated");
            host.exit();
        }

        if self.controls.maximize.contains(event.client) {
            self.toggle_maximized(host);
            host.request_redraw();
        }

        self.state.drag = DragState::Dragging(DragAnchor {
            pointer: event.screen,
            window: host.window_position(),
        });
    }

    pub fn handle_pointer_move(&mut self, event: PointerEvent, host: &dyn HostWindow) {
        if let DragState::Dragging(anchor) = self.state.drag {
            host.set_window_position(anchor.window_position_for(event.screen));
        }
    }

    pub fn handle_pointer_up(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// Select the figure for the button with `tag`.
    ///
    /// Returns false, leaving the selection unchanged, when no button carries `tag`.
    pub fn activate_button(&mut self, tag: usize, host: &dyn HostWindow) -> bool {
        if tag == 0 || tag > self.buttons.len() {
            return false;
        }
        debug!("Button {} activated", tag);
        self.state.selected_figure = tag;
        host.request_redraw();
        true
    }

    fn toggle_maximized(&mut self, host: &dyn HostWindow) {
        if host.is_maximized() {
            host.set_maximized(false);
            let width = self
                .restore_size
                .take()
                .map(|size| size.x)
                .unwrap_or_else(|| host.window_size().x);
            let position = Self::initial_position(host.display_size(), width);
            host.set_window_position(position);
            info!("Restored window at ({}, {})", position.x, position.y);
        } else {
            self.restore_size = Some(host.window_size());
            host.set_maximized(true);
            info!("Maximized window");
        }
    }

    /// Render the chrome followed by the content
    pub fn render(&self, surface: &mut dyn Surface) {
        self.render_chrome(surface);
        if let Some(content) = &self.content {
            content.render(&self.state, surface);
        }
    }

    pub fn render_chrome(&self, surface: &mut dyn Surface) {
        surface.draw(DrawOp::Path {
            points: panel_outline(self.state.client),
            fill: Some(BODY_COLOR),
            stroke: Some(Stroke::new(3.0, Rgba::DARK_VIOLET)),
        });

        let title = title_bar_rect(self.state.client);
        surface.draw(DrawOp::Rect {
            rect: title,
            fill: Some(BODY_COLOR),
            stroke: Some(Stroke::new(3.0, Rgba::PURPLE)),
        });
        surface.draw(DrawOp::TextInRect {
            rect: title,
            text: self.state.caption.clone(),
            font: CAPTION_FONT,
            color: Rgba::BLACK,
        });

        let control_stroke = Some(Stroke::new(2.0, Rgba::DARK_VIOLET));
        surface.draw(DrawOp::Ellipse {
            rect: self.controls.close,
            fill: Some(Rgba::RED),
            stroke: control_stroke,
        });
        surface.draw(DrawOp::Ellipse {
            rect: self.controls.maximize,
            fill: Some(Rgba::BLUE),
            stroke: control_stroke,
        });
    }
}

pub fn title_bar_rect(client: IVec2) -> Rect {
    Rect::new((client.x - TITLE_WIDTH) / 2, TITLE_TOP, TITLE_WIDTH, TITLE_HEIGHT)
}

/// Closed outline of the rounded body panel, clockwise from the top-left arc
pub fn panel_outline(client: IVec2) -> Vec<Vec2> {
    let right = client.x - PANEL_INSET - CORNER_DIAMETER;
    let bottom = client.y - PANEL_BOTTOM_INSET - CORNER_DIAMETER;
    let corner = |x, y| Rect::new(x, y, CORNER_DIAMETER, CORNER_DIAMETER);

    [
        (corner(PANEL_INSET, PANEL_INSET), 180.0),
        (corner(right, PANEL_INSET), 270.0),
        (corner(right, bottom), 0.0),
        (corner(PANEL_INSET, bottom), 90.0),
    ]
    .into_iter()
    .flat_map(|(bounds, start)| arc_points(bounds, start, 90.0, ARC_SEGMENTS))
    .collect()
}
