use crate::Rect;

/// The geometry of one monitor, in virtual-desktop coordinates.
///
/// Produced by the platform crate at daemon startup and treated as a
/// read-only fact by the placement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    /// The monitor's full bounding rectangle.
    pub bounds: Rect,
    /// The usable area, excluding the taskbar and docked toolbars.
    pub work_area: Rect,
}

impl MonitorGeometry {
    pub fn new(bounds: Rect, work_area: Rect) -> Self {
        Self { bounds, work_area }
    }

    /// Offset of the work area relative to the monitor bounds.
    ///
    /// `SetWindowPlacement` takes workspace coordinates, which differ
    /// from screen coordinates by exactly this offset when the taskbar
    /// reserves space at the left or top edge.
    pub fn work_offset(&self) -> (i32, i32) {
        (
            self.work_area.x - self.bounds.x,
            self.work_area.y - self.bounds.y,
        )
    }
}
