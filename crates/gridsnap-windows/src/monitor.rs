use std::mem;

use gridsnap_core::{MonitorGeometry, Rect, WindowResult};
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::core::BOOL;

/// Enumerates all attached monitors.
///
/// Each monitor contributes its full bounds and its work area (bounds
/// minus taskbar and docked toolbars). Enumeration order is the order
/// sections are assigned to `[[monitor]]` entries in the config file.
pub fn enumerate_monitors() -> WindowResult<Vec<MonitorGeometry>> {
    let mut monitors: Vec<MonitorGeometry> = Vec::new();

    // SAFETY: EnumDisplayMonitors invokes the callback once per monitor
    // on this thread before returning. The LPARAM smuggles a pointer to
    // the local Vec, which outlives the call.
    let success = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_proc),
            LPARAM(&mut monitors as *mut Vec<MonitorGeometry> as isize),
        )
    };

    if !success.as_bool() {
        return Err("Failed to enumerate monitors".into());
    }
    if monitors.is_empty() {
        return Err("No monitors found".into());
    }

    Ok(monitors)
}

unsafe extern "system" fn enum_proc(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    // SAFETY: `data` is the Vec pointer passed by enumerate_monitors,
    // still alive for the duration of the enumeration.
    let monitors = unsafe { &mut *(data.0 as *mut Vec<MonitorGeometry>) };

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with monitor
    // dimensions. We set cbSize as required by the API.
    if unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        monitors.push(MonitorGeometry {
            bounds: to_rect(&info.rcMonitor),
            work_area: to_rect(&info.rcWork),
        });
    }

    // Keep enumerating.
    BOOL(1)
}

fn to_rect(rc: &RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top)
}
