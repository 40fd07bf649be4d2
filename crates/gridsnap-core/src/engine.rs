//! Orchestration: resolve a hotkey press, translate the destination,
//! apply it through a [`WindowControl`], and verify the result.

use crate::action::{MoveMode, SnapRequest};
use crate::layout::Layout;
use crate::monitor::MonitorGeometry;
use crate::placement::{frame_padding, padded_rect, to_workspace};
use crate::snap::{self, MoveTarget, Resolution};
use crate::window::{WindowControl, WindowResult, WindowState};
use crate::{log_debug, log_warn};

/// The placement engine: one layout per monitor, consulted on every
/// hotkey press.
///
/// Monitors and layouts live for the whole session; sections are
/// materialized fresh inside each [`handle`](Self::handle) call.
pub struct SnapEngine {
    monitors: Vec<MonitorGeometry>,
    layouts: Vec<Layout>,
}

impl SnapEngine {
    /// Creates an engine for the given monitors.
    ///
    /// `layouts` pairs with `monitors` by index; monitors beyond the
    /// configured layouts get the default full-area layout.
    pub fn new(monitors: Vec<MonitorGeometry>, mut layouts: Vec<Layout>) -> Self {
        layouts.truncate(monitors.len());
        while layouts.len() < monitors.len() {
            layouts.push(Layout::default());
        }
        Self { monitors, layouts }
    }

    pub fn monitors(&self) -> &[MonitorGeometry] {
        &self.monitors
    }

    /// Replaces one monitor's section list.
    ///
    /// Returns an error (leaving the existing layout untouched) when
    /// the monitor index is unknown; malformed section input is
    /// rejected earlier, at parse time.
    pub fn set_sections(&mut self, monitor: usize, entries: &[[i32; 4]]) -> Result<(), String> {
        let layout = self
            .layouts
            .get_mut(monitor)
            .ok_or_else(|| format!("no monitor with index {monitor}"))?;
        layout.set_sections(entries);
        Ok(())
    }

    /// Handles one hotkey press against the focused window.
    ///
    /// Returns `Ok(false)` when there is no eligible destination; the
    /// window is left untouched.
    pub fn handle(&self, window: &impl WindowControl, request: SnapRequest) -> WindowResult<bool> {
        let snapshot = window.snapshot()?;

        let Some(resolution) = snap::resolve(&self.monitors, &self.layouts, &snapshot, request)
        else {
            log_debug!(
                "{:?} {:?}: no eligible destination",
                request.direction,
                request.mode
            );
            return Ok(false);
        };

        match resolution {
            Resolution::Show(command) => {
                log_debug!("{:?}: show {:?}", request.direction, command);
                window.show(command)?;
            }
            Resolution::Move(target) => {
                self.apply_move(window, &target, request.mode, snapshot.state)?;
            }
        }
        Ok(true)
    }

    /// Places the window at the target section, verifying the realized
    /// geometry and falling back to explicit move-then-resize calls.
    fn apply_move(
        &self,
        window: &impl WindowControl,
        target: &MoveTarget,
        mode: MoveMode,
        state: WindowState,
    ) -> WindowResult<()> {
        let monitor = &self.monitors[target.monitor];
        let adjust_size = self.layouts[target.monitor].adjust_size;

        let window_rect = window.window_rect()?;
        let client_rect = window.client_rect()?;
        let pad = frame_padding(&window_rect, &client_rect, adjust_size);
        let mut screen_rect = padded_rect(&target.section, pad);

        // Extend grows into the destination instead of jumping to it,
        // but only within one monitor and from a normal window.
        if mode == MoveMode::Extend && target.same_monitor && state == WindowState::Normal {
            screen_rect = window_rect.union(&screen_rect);
        }

        log_debug!(
            "placing at ({},{} {}x{}) pad={pad} on monitor {}",
            screen_rect.x,
            screen_rect.y,
            screen_rect.width,
            screen_rect.height,
            target.monitor
        );
        window.set_placement(&to_workspace(&screen_rect, monitor))?;

        // The placement channel can silently misplace a window that
        // crosses a scale-factor boundary. Re-query and compare sizes;
        // on mismatch, recompute the padding against the fresh
        // geometry and position the window through the low-level
        // channel: move without resizing or redrawing, then resize
        // without moving, redrawing once.
        let realized = window.window_rect()?;
        if realized.width != screen_rect.width || realized.height != screen_rect.height {
            log_warn!(
                "placement realized {}x{}, wanted {}x{}; retrying with SetWindowPos",
                realized.width,
                realized.height,
                screen_rect.width,
                screen_rect.height
            );

            let window_rect = window.window_rect()?;
            let client_rect = window.client_rect()?;
            let pad = frame_padding(&window_rect, &client_rect, adjust_size);
            let retry_rect = padded_rect(&target.section, pad);

            // The window may still be minimized or maximized; the
            // low-level channel only works on a normal window.
            window.show_normal()?;
            window.reposition(&retry_rect)?;
            window.resize(&retry_rect)?;
        }

        Ok(())
    }
}
