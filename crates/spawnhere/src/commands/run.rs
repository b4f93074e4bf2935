/// Runs the watcher attached to this console until Ctrl+C.
///
/// Log lines go to the console; a failure has already been logged by
/// the time `run` returns.
pub fn execute() {
    if spawnhere_windows::ipc::is_daemon_running() {
        println!("spawnhere is already running in the background. Run 'spawnhere stop' first.");
        return;
    }

    println!("Watching for new windows (press Ctrl+C to stop)...");

    if spawnhere_windows::daemon::run().is_err() {
        std::process::exit(1);
    }
}
