// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Notes directory (overrides the config file, default: ./notes)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Path to config file (default: <config dir>/bambam/config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, most recently modified first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a note and open the preview in the browser
    View {
        /// Note file to render
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print the rendered HTML fragment instead of opening the browser
        #[arg(long)]
        html: bool,
    },

    /// Search all notes for a term (case-insensitive regular expression)
    Search {
        #[arg(value_name = "TERM")]
        term: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Save text read from stdin as a note
    Write {
        /// Destination file; its parent directory must exist
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
