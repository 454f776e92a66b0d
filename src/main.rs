use std::cell::Cell;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use glam::IVec2;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use frameless_window::cli::Cli;
use frameless_window::core::{FigureContent, FramelessWindow, PointerEvent};
use frameless_window::renderer::Renderer;
use frameless_window::window::{window_attributes, WinitHost};

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frameless: FramelessWindow,
    cursor: Option<PhysicalPosition<f64>>,
    position_warned: Cell<bool>,
}

impl App {
    fn new(cli: Cli) -> Self {
        let frameless = FramelessWindow::with_content(
            cli.width as i32,
            cli.height as i32,
            Box::new(FigureContent::new()),
        );
        Self {
            cli,
            window: None,
            renderer: None,
            frameless,
            cursor: None,
            position_warned: Cell::new(false),
        }
    }

    /// Client area size in logical units
    fn client_size(window: &Window) -> IVec2 {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        IVec2::new(size.width as i32, size.height as i32)
    }

    fn pointer_event(window: &Window, cursor: PhysicalPosition<f64>) -> PointerEvent {
        let logical = cursor.to_logical::<f64>(window.scale_factor());
        let client = IVec2::new(logical.x as i32, logical.y as i32);
        let origin = window
            .inner_position()
            .map(|p| IVec2::new(p.x, p.y))
            .unwrap_or(IVec2::ZERO);
        let screen = origin + IVec2::new(cursor.x as i32, cursor.y as i32);
        PointerEvent::new(client, screen)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let display = event_loop.primary_monitor().map(|monitor| {
            let size = monitor.size();
            (
                IVec2::new(size.width as i32, size.height as i32),
                monitor.scale_factor(),
            )
        });
        let attributes = window_attributes(self.cli.width, self.cli.height, display);

        let window = match event_loop.create_window(attributes) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.frameless.handle_resize(Self::client_size(&window));
        log::info!(
            "Window created: {}x{} \"{}\"",
            self.cli.width,
            self.cli.height,
            self.frameless.state().caption()
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(renderer)) = (self.window.clone(), self.renderer.as_mut()) else {
            return;
        };

        let response = renderer.handle_event(&window, &event);
        if response.repaint {
            window.request_redraw();
        }
        let host = WinitHost::new(&window, event_loop, &self.position_warned);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(size);
                self.frameless.handle_resize(Self::client_size(&window));
                window.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                if !response.consumed {
                    let pointer = Self::pointer_event(&window, position);
                    self.frameless.handle_pointer_move(pointer, &host);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !response.consumed => {
                if let Some(cursor) = self.cursor {
                    let pointer = Self::pointer_event(&window, cursor);
                    self.frameless.handle_pointer_down(pointer, &host);
                }
            }
            // Released always ends a drag, even over a button
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.frameless.handle_pointer_up(),
            WindowEvent::RedrawRequested => match renderer.render(&window, &self.frameless) {
                Ok(Some(tag)) => {
                    self.frameless.activate_button(tag, &host);
                }
                Ok(None) => {}
                Err(e) => log::error!("Render error: {:#}", e),
            },
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
