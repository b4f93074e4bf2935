mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spawnhere",
    version,
    about = "Opens new windows on the monitor under the mouse cursor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the watcher in this console (Ctrl+C to stop)
    Run,
    /// Start the watcher as a background daemon
    Start,
    /// Stop the background daemon
    Stop,
    /// Show whether the daemon is running
    Status,
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum DebugCommands {
    /// List visible windows and whether they would be relocated
    List,
    /// Watch window events in real time
    Events,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        #[cfg(windows)]
        Commands::Run => commands::run::execute(),
        #[cfg(windows)]
        Commands::Start => commands::start::execute(),
        #[cfg(windows)]
        Commands::Stop => commands::stop::execute(),
        #[cfg(windows)]
        Commands::Status => commands::status::execute(),
        #[cfg(windows)]
        Commands::Daemon => commands::daemon::execute(),
        #[cfg(windows)]
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
            DebugCommands::Events => commands::debug::events::execute(),
        },
        #[cfg(not(windows))]
        _ => {
            eprintln!("Error: this command is only supported on Windows.");
            std::process::exit(1);
        }
    }
}
