pub fn execute() {
    match gridsnap_core::pid::read_pid_file() {
        Ok(Some(pid)) => {
            if gridsnap_windows::process::is_process_alive(pid) {
                println!("Gridsnap is running (PID: {pid}).");
            } else {
                // Stale PID file from a daemon that was killed without
                // a clean shutdown.
                let _ = gridsnap_core::pid::remove_pid_file();
                println!("Gridsnap is not running (cleaned up stale PID file).");
            }
        }
        _ => {
            println!("Gridsnap is not running.");
        }
    }
}
