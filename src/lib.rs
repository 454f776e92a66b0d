pub mod cli;
pub mod core;
pub mod egui_surface;
pub mod geometry;
pub mod renderer;
pub mod window;

pub use crate::core::{Content, FigureContent, FramelessWindow, HostWindow};
