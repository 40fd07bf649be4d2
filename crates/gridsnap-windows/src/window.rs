use std::mem;

use gridsnap_core::{
    Rect, ShowCommand, WindowControl, WindowResult, WindowSnapshot, WindowState,
};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, GetForegroundWindow, GetWindowPlacement, GetWindowRect, SW_RESTORE,
    SW_SHOWMAXIMIZED, SW_SHOWMINIMIZED, SW_SHOWNORMAL, SWP_NOMOVE, SWP_NOREDRAW, SWP_NOSIZE,
    SetWindowPlacement, SetWindowPos, ShowWindow, ShowWindowAsync, WINDOWPLACEMENT,
};

/// The focused window, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle identifying a window to the OS. This
/// struct captures the handle once per hotkey press and queries the OS
/// lazily for geometry.
#[derive(Debug, Clone, Copy)]
pub struct ForegroundWindow {
    hwnd: HWND,
}

impl ForegroundWindow {
    /// Captures the currently focused window.
    ///
    /// Returns `None` when no window has focus (e.g. the desktop or a
    /// secure screen is active), in which case the hotkey press is
    /// ignored.
    pub fn capture() -> Option<Self> {
        // SAFETY: GetForegroundWindow is a simple query with no
        // preconditions. A null handle means nothing has focus.
        let hwnd = unsafe { GetForegroundWindow() };

        if hwnd.is_invalid() {
            return None;
        }
        Some(Self { hwnd })
    }
}

impl WindowControl for ForegroundWindow {
    fn window_rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();

        // SAFETY: GetWindowRect fills the RECT for a valid HWND.
        unsafe { GetWindowRect(self.hwnd, &mut rect)? };

        Ok(to_rect(&rect))
    }

    fn client_rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();

        // SAFETY: GetClientRect fills the RECT for a valid HWND.
        unsafe { GetClientRect(self.hwnd, &mut rect)? };

        Ok(to_rect(&rect))
    }

    fn snapshot(&self) -> WindowResult<WindowSnapshot> {
        let placement = self.placement()?;

        let state = match placement.showCmd {
            c if c == SW_SHOWMINIMIZED.0 as u32 => WindowState::Minimized,
            c if c == SW_SHOWMAXIMIZED.0 as u32 => WindowState::Maximized,
            _ => WindowState::Normal,
        };

        Ok(WindowSnapshot {
            rect: self.window_rect()?,
            normal_rect: to_rect(&placement.rcNormalPosition),
            state,
        })
    }

    fn set_placement(&self, workspace_rect: &Rect) -> WindowResult<()> {
        // Read-modify-write: only the normal position and show state
        // change, the min/max bookkeeping stays intact.
        let mut placement = self.placement()?;
        placement.rcNormalPosition = RECT {
            left: workspace_rect.left(),
            top: workspace_rect.top(),
            right: workspace_rect.right(),
            bottom: workspace_rect.bottom(),
        };
        placement.showCmd = SW_SHOWNORMAL.0 as u32;

        // SAFETY: SetWindowPlacement reads the struct we just filled.
        unsafe { SetWindowPlacement(self.hwnd, &placement)? };
        Ok(())
    }

    fn reposition(&self, rect: &Rect) -> WindowResult<()> {
        // SAFETY: SetWindowPos with a valid HWND is safe. SWP_NOSIZE
        // ignores the size arguments; SWP_NOREDRAW defers painting to
        // the resize call that follows.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOSIZE | SWP_NOREDRAW,
            )?;
        }
        Ok(())
    }

    fn resize(&self, rect: &Rect) -> WindowResult<()> {
        // SAFETY: SetWindowPos with a valid HWND is safe. SWP_NOMOVE
        // ignores the position arguments and this call repaints.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOMOVE,
            )?;
        }
        Ok(())
    }

    fn show_normal(&self) -> WindowResult<()> {
        // SAFETY: ShowWindow is safe with a valid HWND. The synchronous
        // variant guarantees the window has left its maximized or
        // minimized state before the caller repositions it.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWNORMAL);
        }
        Ok(())
    }

    fn show(&self, command: ShowCommand) -> WindowResult<()> {
        let cmd = match command {
            ShowCommand::Maximize => SW_SHOWMAXIMIZED,
            ShowCommand::Minimize => SW_SHOWMINIMIZED,
            ShowCommand::Restore => SW_RESTORE,
        };

        // SAFETY: ShowWindowAsync posts the show command to the target
        // window's own thread, so a hung window cannot stall the
        // message pump.
        unsafe {
            let _ = ShowWindowAsync(self.hwnd, cmd);
        }
        Ok(())
    }
}

impl ForegroundWindow {
    fn placement(&self) -> WindowResult<WINDOWPLACEMENT> {
        let mut placement = WINDOWPLACEMENT {
            length: mem::size_of::<WINDOWPLACEMENT>() as u32,
            ..Default::default()
        };

        // SAFETY: GetWindowPlacement fills the struct. We set `length`
        // as required by the API.
        unsafe { GetWindowPlacement(self.hwnd, &mut placement)? };

        Ok(placement)
    }
}

fn to_rect(rc: &RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top)
}
