mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gridsnap",
    version,
    about = "Hotkey-driven window snapping for custom monitor grids"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Start the snapping daemon
    Start,
    /// Stop the snapping daemon
    Stop,
    /// Show whether the daemon is running
    Status,
    /// Run the daemon (internal — not for direct use)
    #[command(hide = true)]
    Daemon,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Daemon => commands::daemon::execute(),
    }
}
