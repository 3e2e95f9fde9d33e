use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "mentor")]
#[command(about = "Mentor CLI - learner-state store for learning assistants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script of JSON-lines operations against one session
    Run {
        /// Script file; each line is {"operation": ..., "args": {...}}
        script: PathBuf,
        /// Session the operations target
        #[arg(long, default_value = "default")]
        session: String,
        /// Config file (defaults to ~/.config/mentor/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print a session report after the script
        #[arg(long)]
        report: bool,
    },
    /// List the operations a script can name
    Operations,
    /// Print the effective configuration as TOML
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script,
            session,
            config,
            report,
        } => {
            let config = commands::utils::load_config(config)?;
            commands::utils::init_logging(&config);
            commands::run::execute(&script, &session, &config, report).await?;
        }
        Commands::Operations => commands::operations::list(),
        Commands::Config { config } => {
            let config = commands::utils::load_config(config)?;
            print!("{}", commands::config::render(&config)?);
        }
    }

    Ok(())
}
