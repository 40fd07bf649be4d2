pub mod action;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod log;
pub mod monitor;
pub mod pid;
pub mod placement;
pub mod rect;
pub mod snap;
pub mod window;

pub use action::{Direction, MoveMode, SnapRequest};
pub use engine::SnapEngine;
pub use layout::Layout;
pub use monitor::MonitorGeometry;
pub use rect::Rect;
pub use window::{ShowCommand, WindowControl, WindowResult, WindowSnapshot, WindowState};
