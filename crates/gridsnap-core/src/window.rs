use crate::Rect;

/// A boxed error type for window operations.
///
/// Any error type that implements the `Error` trait can be boxed into
/// this, including the strings the platform crate produces for failed
/// Win32 calls.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The placement mode reported by the OS for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Normal,
    Minimized,
    Maximized,
}

/// A show-state change requested by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCommand {
    Maximize,
    Minimize,
    /// Return a minimized or maximized window to its normal placement.
    Restore,
}

/// The focused window's state, queried once per hotkey press.
#[derive(Debug, Clone, Copy)]
pub struct WindowSnapshot {
    /// Current bounding rectangle in screen coordinates.
    pub rect: Rect,
    /// The last normal-position rectangle from the placement record.
    pub normal_rect: Rect,
    pub state: WindowState,
}

impl WindowSnapshot {
    /// The rectangle used to match the window against sections.
    ///
    /// A minimized window's screen rectangle is its taskbar icon, which
    /// is meaningless for matching; its last normal position is used
    /// instead.
    pub fn effective_rect(&self) -> Rect {
        match self.state {
            WindowState::Minimized => self.normal_rect,
            _ => self.rect,
        }
    }
}

/// Platform-agnostic handle to the focused window.
///
/// The platform crate (`gridsnap-windows`) implements this over a Win32
/// `HWND`; tests implement it with an in-memory mock. All queries are
/// synchronous and map to fast local OS calls.
pub trait WindowControl {
    /// Bounding rectangle in screen coordinates, including the
    /// invisible frame margins.
    fn window_rect(&self) -> WindowResult<Rect>;

    /// Client-area rectangle. Only its size is meaningful; it is
    /// compared against the window rectangle to measure frame padding.
    fn client_rect(&self) -> WindowResult<Rect>;

    /// The placement record: last normal-position rectangle and the
    /// current show state.
    fn snapshot(&self) -> WindowResult<WindowSnapshot>;

    /// Sets the placement record to the given normal-position rectangle
    /// (in work-area-relative coordinates) with a Normal show state.
    ///
    /// This is the primary placement channel. It preserves the
    /// maximize/minimize bookkeeping that the low-level positioning
    /// channel would clobber.
    fn set_placement(&self, workspace_rect: &Rect) -> WindowResult<()>;

    /// Repositions the window without resizing or redrawing it.
    fn reposition(&self, rect: &Rect) -> WindowResult<()>;

    /// Resizes the window without moving it, redrawing once.
    fn resize(&self, rect: &Rect) -> WindowResult<()>;

    /// Forces the window to its normal show state, synchronously.
    /// Used before the low-level fallback positioning.
    fn show_normal(&self) -> WindowResult<()>;

    /// Posts a show-state change asynchronously (fire-and-forget).
    fn show(&self, command: ShowCommand) -> WindowResult<()>;
}
