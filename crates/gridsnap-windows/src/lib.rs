/// Daemon entry point and message pump.
pub mod daemon;

/// Per-monitor DPI awareness.
pub mod dpi;

/// Global hotkey registration.
pub mod hotkey;

/// Key-name to virtual-key-code mapping.
pub mod keys;

/// Monitor enumeration.
pub mod monitor;

/// Process utilities (alive check, kill).
pub mod process;

/// Window controller wrapping a Win32 `HWND`.
pub mod window;

pub use monitor::enumerate_monitors;
pub use window::ForegroundWindow;
