use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifeasify-cli", version, about = "Lifeasify CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chore management
    Chore {
        #[command(subcommand)]
        action: commands::chore::ChoreAction,
    },
    /// Friends & connections
    Contact {
        #[command(subcommand)]
        action: commands::contact::ContactAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Chore { action } => commands::chore::run(action),
        Commands::Contact { action } => commands::contact::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
