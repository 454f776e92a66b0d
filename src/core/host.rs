use glam::IVec2;

/// Window-system services the frameless window depends on.
///
/// Positions and sizes here are in screen pixels. Implementations are only
/// ever called from the event-dispatch thread.
pub trait HostWindow {
    /// Schedule a repaint
    fn request_redraw(&self);

    /// Outer top-left corner of the window
    fn window_position(&self) -> IVec2;

    /// Move the window so its outer top-left corner is at `position`
    fn set_window_position(&self, position: IVec2);

    /// Outer size of the window
    fn window_size(&self) -> IVec2;

    fn is_maximized(&self) -> bool;

    fn set_maximized(&self, maximized: bool);

    /// Size of the primary display
    fn display_size(&self) -> IVec2;

    /// Terminate the application
    fn exit(&self);
}
