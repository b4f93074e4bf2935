use spawnhere_core::ipc::{Command, ResponseStatus};
use spawnhere_core::pid;
use spawnhere_windows::{ipc, process};

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if ipc::is_daemon_running() {
        match ipc::send_command(&Command::Stop) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("spawnhere stopped. {}", response.message.unwrap_or_default());
                let _ = pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the pipe is gone but the process may still be alive.
    match pid::read_pid_file() {
        Ok(Some(pid)) if process::is_process_alive(pid) => match process::kill_process(pid) {
            Ok(()) => {
                let _ = pid::remove_pid_file();
                println!("spawnhere stopped (killed PID {pid}).");
            }
            Err(e) => {
                eprintln!("Failed to kill process {pid}: {e}");
                std::process::exit(1);
            }
        },
        _ => {
            println!("spawnhere is not running.");
        }
    }
}
