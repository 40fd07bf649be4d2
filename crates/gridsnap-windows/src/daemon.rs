use gridsnap_core::config::{self, Config};
use gridsnap_core::{SnapEngine, SnapRequest, WindowResult, log, log_error, log_info, pid};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use crate::hotkey::HotkeyManager;
use crate::window::ForegroundWindow;
use crate::{dpi, monitor};

/// Runs the Gridsnap daemon.
///
/// Registers the configured hotkeys on this thread and blocks in the
/// Win32 message pump. Each `WM_HOTKEY` is resolved and applied right
/// here; a snap is a handful of local OS calls, so one thread carries
/// the whole daemon.
pub fn run() -> WindowResult<()> {
    dpi::enable_dpi_awareness();

    let config = config::load();
    log::init(&config.log);

    pid::write_pid_file()?;
    eprintln!("Gridsnap daemon started.");

    let result = snap_loop(&config);

    let _ = pid::remove_pid_file();

    result
}

fn snap_loop(config: &Config) -> WindowResult<()> {
    let monitors = monitor::enumerate_monitors()?;
    log_info!("{} monitor(s) detected", monitors.len());

    let layouts = config.layouts(monitors.len());
    let engine = SnapEngine::new(monitors, layouts);

    let mut hotkeys = HotkeyManager::new();
    hotkeys.register_from_config(&config.keybindings());

    if hotkeys.is_empty() {
        return Err("no hotkeys could be registered".into());
    }
    log_info!("{} hotkey(s) registered", hotkeys.len());

    run_message_pump(&engine, &hotkeys);
    Ok(())
}

/// The Win32 message pump. Dispatches hotkey messages and blocks
/// until WM_QUIT is received.
fn run_message_pump(engine: &SnapEngine, hotkeys: &HotkeyManager) {
    let mut msg = MSG::default();

    // SAFETY: GetMessageW blocks on this thread's message queue and
    // fills `msg`. It returns false on WM_QUIT.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            if let Some(request) = hotkeys.dispatch(msg.wParam.0 as i32) {
                handle_press(engine, request);
            }
            continue;
        }

        // SAFETY: TranslateMessage and DispatchMessageW forward any
        // other message through normal processing.
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// Applies one hotkey press to whatever window currently has focus.
///
/// No focused window means nothing to snap. Failures are logged rather
/// than propagated so one misbehaving window never takes the daemon
/// down.
fn handle_press(engine: &SnapEngine, request: SnapRequest) {
    let Some(window) = ForegroundWindow::capture() else {
        return;
    };

    if let Err(e) = engine.handle(&window, request) {
        log_error!("{:?} {:?} failed: {e}", request.direction, request.mode);
    }
}
