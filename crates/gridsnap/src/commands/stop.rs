pub fn execute() {
    match gridsnap_core::pid::read_pid_file() {
        Ok(Some(pid)) if gridsnap_windows::process::is_process_alive(pid) => {
            if gridsnap_windows::process::kill_process(pid) {
                let _ = gridsnap_core::pid::remove_pid_file();
                println!("Gridsnap stopped (PID: {pid}).");
            } else {
                eprintln!("Failed to stop process {pid}.");
                std::process::exit(1);
            }
        }
        Ok(Some(_)) => {
            // Stale PID file from an unclean shutdown.
            let _ = gridsnap_core::pid::remove_pid_file();
            println!("Gridsnap is not running (cleaned up stale PID file).");
        }
        _ => {
            println!("Gridsnap is not running.");
        }
    }
}
