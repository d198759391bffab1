use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_shell::cli::{
    handle_config, handle_parse, handle_run, handle_shell, join_args, open_session,
};
use budget_shell::config::{ShellPaths, Settings};
use budget_shell::parse::Grammar;
use budget_shell::session::Session;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Interactive budgeting shell with live autocomplete",
    long_about = "Budget Shell reads budgeting commands such as \
                  'new account Groceries --balance 50', suggests what may \
                  be typed next while a command is incomplete, and runs \
                  the command once it is complete."
)]
struct Cli {
    /// Directory holding settings and the audit log
    #[arg(long, global = true, env = "BUDGET_SHELL_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (the default)
    Shell,

    /// Show what a line parses to and what may be typed next
    Parse {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
        /// The command line to parse
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Parse and execute a single line
    Run {
        /// The command line to run
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ShellPaths::with_base_dir(dir),
        None => ShellPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let session = open_session(&paths, settings)?;
            handle_shell(Grammar::new()?, session)?;
        }
        Commands::Parse { json, line } => {
            let session = Session::new(settings);
            handle_parse(&Grammar::new()?, &session, &join_args(&line)?, json)?;
        }
        Commands::Run { line } => {
            let session = open_session(&paths, settings)?;
            handle_run(&Grammar::new()?, &session, &join_args(&line)?)?;
        }
        Commands::Config => handle_config(&paths, &settings),
    }

    Ok(())
}
