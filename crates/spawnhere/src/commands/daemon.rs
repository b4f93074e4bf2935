/// Entry point of the detached process spawned by `start`.
///
/// Has no console; errors end up in the log file when file logging is
/// enabled.
pub fn execute() {
    if spawnhere_windows::daemon::run().is_err() {
        std::process::exit(1);
    }
}
