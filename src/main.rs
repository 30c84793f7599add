use clap::{Parser, Subcommand};
use git_decorator::commands::*;
use git_decorator::core::{config::DecoratorConfig, error::Result, print_error};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "git-decorator")]
#[command(about = "Version-control decorations for commit files and branches")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to a config file (defaults to <config dir>/git-decorator/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the decoration of a virtual resource identifier
    Decorate {
        /// Identifier such as gitlens-view://branch/main?{"repoPath":"/repo"}
        uri: String,
        /// Print the decoration as JSON (null when there is none)
        #[arg(long)]
        json: bool,
    },
    /// List local branches with their sync decorations
    Branches,
    /// List files changed by a commit with their status decorations
    Commit {
        /// Revision to inspect
        #[arg(default_value = "HEAD")]
        rev: String,
    },
    /// Print virtual resource identifiers for the current repository
    Uri {
        #[command(subcommand)]
        target: UriTarget,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum UriTarget {
    /// Identifier of a local branch
    Branch {
        name: String,
    },
    /// Identifier of a file changed by a commit
    CommitFile {
        /// File path relative to the repository root
        file: String,
        /// Single-character git status code (M, A, D, R, C, ?, !)
        #[arg(long, short)]
        status: String,
        /// Commit the file belongs to
        #[arg(long, default_value = "HEAD")]
        rev: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn load_config(path: Option<&Path>) -> Result<DecoratorConfig> {
    match path {
        Some(path) => DecoratorConfig::load_from(path),
        None => DecoratorConfig::load(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Decorate { uri, json } => {
            execute_decorate(&load_config(config_path)?, &uri, json).await
        }
        Commands::Branches => execute_branches(&load_config(config_path)?).await,
        Commands::Commit { rev } => execute_commit(&load_config(config_path)?, &rev).await,
        Commands::Uri { target } => {
            let config = load_config(config_path)?;
            match target {
                UriTarget::Branch { name } => execute_uri_branch(&config, &name),
                UriTarget::CommitFile { file, status, rev } => {
                    execute_uri_commit_file(&config, &file, &status, &rev)
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => execute_config_show(&load_config(config_path)?),
            ConfigAction::Init { force } => execute_config_init(config_path, force),
        },
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag, RUST_LOG still wins when set
    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
