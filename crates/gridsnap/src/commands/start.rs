use std::os::windows::process::CommandExt;
use std::process::Command;

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200) — the daemon gets its own process
/// group, so Ctrl+C in the CLI terminal won't kill it.
///
/// `CREATE_NO_WINDOW` (0x08000000) — the daemon doesn't get a console
/// window. This also prevents inheriting the parent's console handles,
/// which avoids handle leaks that cause `cmd.output()` to hang in tests.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    // Refuse to start a second daemon; clean up a stale PID file from
    // a previous unclean shutdown.
    if let Ok(Some(pid)) = gridsnap_core::pid::read_pid_file() {
        if gridsnap_windows::process::is_process_alive(pid) {
            println!("Gridsnap is already running (PID: {pid}).");
            return;
        }
        let _ = gridsnap_core::pid::remove_pid_file();
    }

    // Get the path to the current executable so we can re-spawn it
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not determine executable path: {e}");
            std::process::exit(1);
        }
    };

    // Spawn the daemon as a fully detached background process.
    // We re-run ourselves with the hidden `daemon` subcommand.
    // DETACH_FLAGS prevent handle inheritance so the parent can exit
    // immediately without waiting for the daemon to finish.
    let child = Command::new(exe)
        .arg("daemon")
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    };

    let pid = child.id();

    // Detach: drop our handle so the daemon outlives the CLI process.
    // We call try_wait() to acknowledge the child without blocking.
    let _ = child.try_wait();

    println!("Gridsnap started (PID: {pid}).");
    println!("Snap the focused window with Ctrl+Alt+Arrow, extend with Ctrl+Alt+Shift+Arrow.");
    println!("Config: ~/.config/gridsnap/config.toml (run 'gridsnap init' to create it).");
}
