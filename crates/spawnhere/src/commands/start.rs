use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

use spawnhere_core::pid;
use spawnhere_windows::{ipc, process};

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200): the daemon gets its own process
/// group, so Ctrl+C in the CLI terminal won't kill it.
///
/// `CREATE_NO_WINDOW` (0x08000000): the daemon gets no console window
/// and inherits none of the parent's console handles.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    if ipc::is_daemon_running() {
        println!("spawnhere is already running.");
        return;
    }

    // Clean up a stale PID file from a previous unclean shutdown.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("spawnhere process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the spawnhere executable: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand.
    let spawned = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    };

    let pid = child.id();

    // Acknowledge the child without blocking; the daemon outlives us.
    let _ = child.try_wait();

    println!("spawnhere started (PID: {pid}).");
    println!("Run 'spawnhere stop' to stop it.");
}
