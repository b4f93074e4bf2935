use spawnhere_core::ipc::Command;
use spawnhere_core::pid;
use spawnhere_windows::{ipc, process};

pub fn execute() {
    if ipc::is_daemon_running() {
        match ipc::send_command(&Command::Status) {
            Ok(response) => match response.tracked {
                Some(count) => println!("spawnhere is running ({count} windows tracked)."),
                None => println!("spawnhere is running."),
            },
            Err(e) => println!("spawnhere is running but did not answer: {e}"),
        }
        return;
    }

    // Pipe isn't responding: check for a PID file left behind by a
    // daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("spawnhere process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = pid::remove_pid_file();
            println!("spawnhere is not running (cleaned up stale PID file).");
        }
    } else {
        println!("spawnhere is not running.");
    }
}
