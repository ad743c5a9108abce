//! # todomark CLI
//!
//! Command-line interface for todomark.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use flexi_logger::LoggerHandle;
use owo_colors::OwoColorize;

use todomark::{
    commands::{self, ListArgs, SetArgs},
    constants::DEFAULT_LOG_LEVEL,
    logging::{self, LogTarget},
    Config,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/todomark/config    Global configuration (statuses, keys, logging)
  .todomark                    Project configuration (found in parent directories)

Status Markers:
  - ( ) undone     - (-) pending    - (x) done
  - (=) on_hold    - (_) cancelled  - (!) important
  - (+) recurring  - (?) ambiguous  - (>) ongoing

Getting Started:
  todomark set done notes.md --line 3    Mark line 3 as done
  todomark show notes.md                 Print the file with status icons
  todomark list .                        List todo lines below the current directory
  todomark edit notes.md                 Open the interactive editor

Learn more:
  todomark <COMMAND> --help              Show detailed help for a command";

#[derive(Parser)]
#[command(name = "todomark")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Todo status markers for markdown bullets and headings")]
#[command(
    long_about = "todomark manages todo status markers in markdown files. A bullet \
or heading line gets a marker right after its lead token, e.g. '- (x) write tests' \
or '## (-) Release'. Markers are shown as status icons when a file is displayed \
or edited, and can be listed across a whole directory tree."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Log level filter (overrides the config; RUST_LOG overrides both)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the status of a line
    #[command(
        long_about = "Set the todo status of one line in a markdown file.\n\n\
The line must start with a lead token (a bullet '-' or a heading '#' to '######'). \
An existing marker is replaced and normalized to '(X)'; otherwise a new marker is \
inserted after the lead token. The file is only written when its text changes.",
        after_help = "Examples:\n  \
todomark set done notes.md --line 3\n  \
todomark set on-hold notes.md -l 12\n  \
todomark set undone README.md --line 1"
    )]
    Set {
        /// Status name (see `todomark statuses`)
        status: String,

        /// Markdown file to modify
        file: PathBuf,

        /// Line number (1-based)
        #[arg(short, long)]
        line: usize,
    },

    /// Print a file with status icons
    #[command(
        long_about = "Print a markdown file the way the editor displays it.\n\n\
Every marker is drawn as its status icon, colored by the status's highlight group \
when stdout is a terminal."
    )]
    Show {
        /// Markdown file to print
        file: PathBuf,
    },

    /// List todo lines
    #[command(
        long_about = "List the lines carrying a status marker.\n\n\
PATH may be a file or a directory; directories are searched recursively for \
*.md files, skipping hidden entries. Each line is printed as 'path:line: icon name text'.",
        after_help = "Examples:\n  \
todomark list                     List todo lines below the current directory\n  \
todomark list notes.md            List todo lines of one file\n  \
todomark list docs --status done  Only show done items"
    )]
    List {
        /// File or directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only show lines with this status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// List the available statuses
    Statuses,

    /// Open a file in the interactive editor
    #[command(
        long_about = "Open a markdown file in the interactive editor.\n\n\
Normal mode:\n  \
status keys   Set the status of the cursor line (see `todomark statuses`)\n  \
j/k, arrows   Move the cursor\n  \
i             Enter insert mode\n  \
s             Save\n  \
q             Quit (press twice to discard unsaved changes)\n\n\
Insert mode:\n  \
Esc           Back to normal mode\n\n\
While the cursor edits a marker in insert mode, its icon is hidden."
    )]
    Edit {
        /// Markdown file to edit
        file: PathBuf,
    },

    /// Write the global config and install shell completions
    #[command(
        long_about = "One-time setup.\n\n\
Creates ~/.config/todomark/config with every option commented, then installs \
completions for your shell (detected from $SHELL unless --shell is given)."
    )]
    Setup {
        /// Shell to install completions for
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(&cli)?;

    match cli.command {
        Commands::Set { status, file, line } => commands::set(&SetArgs { status, file, line }),

        Commands::Show { file } => commands::show(&file),

        Commands::List { path, status } => commands::list(&ListArgs { path, status }),

        Commands::Statuses => commands::statuses(),

        Commands::Edit { file } => commands::edit(&file),

        Commands::Setup { shell } => commands::setup(&mut Cli::command(), shell),

        Commands::Completions { shell } => {
            commands::completions::execute(shell, &mut Cli::command())
        }
    }
}

/// Starts logging for the chosen command.
///
/// The editor owns the screen, so it only logs when a log directory is set.
/// Setup and completions run before any config may exist.
fn init_logging(cli: &Cli) -> Result<LoggerHandle> {
    if matches!(cli.command, Commands::Setup { .. } | Commands::Completions { .. }) {
        let level = cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
        return logging::init(level, LogTarget::Stderr);
    }

    let config = Config::load()?;
    let level = cli.log_level.as_deref().unwrap_or_else(|| config.log_level());
    let log_dir = config.log_dir();

    let target = match (&cli.command, log_dir.as_deref()) {
        (_, Some(dir)) => LogTarget::Directory(dir),
        (Commands::Edit { .. }, None) => LogTarget::Off,
        (_, None) => LogTarget::Stderr,
    };
    logging::init(level, target)
}
