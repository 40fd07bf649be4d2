//! Conversion from a destination section to OS placement coordinates.
//!
//! Two adjustments happen between "the section the resolver picked"
//! and "the rectangle handed to the OS": frame-padding compensation so
//! the visible window edge lands on the section boundary, and the
//! screen-to-workspace offset that `SetWindowPlacement` expects.

use crate::monitor::MonitorGeometry;
use crate::rect::Rect;

/// The frame padding to compensate for, in pixels.
///
/// Window rectangles include an invisible frame margin; half the
/// width difference between the window and client rectangles measures
/// it. `adjust_size` is the per-monitor user correction on top.
pub fn frame_padding(window: &Rect, client: &Rect, adjust_size: i32) -> i32 {
    (window.width - client.width) / 2 + adjust_size
}

/// Expands a section rectangle so the window's visible edges align
/// with the section boundary.
///
/// The horizontal extent widens by the padding on each side; the
/// height extends downward only, since the top frame is visible.
pub fn padded_rect(section: &Rect, pad: i32) -> Rect {
    Rect::new(
        section.x - pad,
        section.y,
        section.width + 2 * pad,
        section.height + pad,
    )
}

/// Translates a screen-coordinate rectangle into the workspace
/// coordinates `SetWindowPlacement` expects, by removing the offset
/// the reserved OS UI regions introduce between a monitor's bounds
/// and its work area.
pub fn to_workspace(rect: &Rect, monitor: &MonitorGeometry) -> Rect {
    let (dx, dy) = monitor.work_offset();
    rect.translated(-dx, -dy)
}
