use std::cell::Cell;
use std::fmt::Display;

use glam::IVec2;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::core::{FramelessWindow, HostWindow};

/// Attributes for a borderless, transparent, manually positioned window
pub fn window_attributes(width: u32, height: u32, display: Option<(IVec2, f64)>) -> WindowAttributes {
    let mut attributes = Window::default_attributes()
        .with_title("Frameless Window")
        .with_decorations(false)
        .with_transparent(true)
        .with_inner_size(LogicalSize::new(width, height));

    if let Some((display_size, scale_factor)) = display {
        let outer_width = (width as f64 * scale_factor).round() as i32;
        let position = FramelessWindow::initial_position(display_size, outer_width);
        attributes = attributes.with_position(PhysicalPosition::new(position.x, position.y));
    }

    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::WindowAttributesExtWindows;
        attributes = attributes.with_skip_taskbar(true);
    }

    attributes
}

fn to_ivec2(size: PhysicalSize<u32>) -> IVec2 {
    IVec2::new(size.width as i32, size.height as i32)
}

/// Position from a platform query, or the origin when the platform cannot report it.
///
/// `warned` outlives a single dispatch so the failure is logged only once.
fn position_or_origin<E: Display>(
    position: Result<PhysicalPosition<i32>, E>,
    warned: &Cell<bool>,
) -> IVec2 {
    match position {
        Ok(position) => IVec2::new(position.x, position.y),
        Err(e) => {
            if !warned.replace(true) {
                log::warn!("Window position unavailable: {}", e);
            }
            IVec2::ZERO
        }
    }
}

/// [`HostWindow`] over a winit window, valid for one event dispatch
pub struct WinitHost<'a> {
    window: &'a Window,
    event_loop: &'a ActiveEventLoop,
    position_warned: &'a Cell<bool>,
}

impl<'a> WinitHost<'a> {
    pub fn new(
        window: &'a Window,
        event_loop: &'a ActiveEventLoop,
        position_warned: &'a Cell<bool>,
    ) -> Self {
        Self {
            window,
            event_loop,
            position_warned,
        }
    }
}

impl HostWindow for WinitHost<'_> {
    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn window_position(&self) -> IVec2 {
        position_or_origin(self.window.outer_position(), self.position_warned)
    }

    fn set_window_position(&self, position: IVec2) {
        self.window
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
    }

    fn window_size(&self) -> IVec2 {
        to_ivec2(self.window.outer_size())
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn set_maximized(&self, maximized: bool) {
        self.window.set_maximized(maximized);
    }

    fn display_size(&self) -> IVec2 {
        self.event_loop
            .primary_monitor()
            .or_else(|| self.window.current_monitor())
            .map(|monitor| to_ivec2(monitor.size()))
            .unwrap_or_else(|| self.window_size())
    }

    fn exit(&self) {
        self.event_loop.exit();
    }
}
