// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Data directory holding the persisted slots (optional)
    #[arg(short, long, value_name = "DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Save a new postcard into the photobook
    Add {
        /// Image for the front of the card: a data URI or external reference
        #[arg(long, value_name = "IMAGE")]
        image: String,

        /// Free-text note for the back of the card
        #[arg(long, value_name = "NOTE", default_value = "")]
        note: String,

        /// Mood token for the entry
        #[arg(long, value_name = "MOOD", default_value = "")]
        mood: String,

        /// Where the photo was taken
        #[arg(long, value_name = "LOCATION", default_value = "")]
        location: String,
    },

    /// List saved postcards, newest first
    List {
        /// Optional substring filter over note, mood and location
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Output entries as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Delete a postcard from the photobook
    Delete {
        /// Postcard id to delete
        #[arg(value_name = "POSTCARD_ID")]
        id: String,
    },

    /// Show today's remaining chat requests
    Quota {
        /// Record one request before reporting
        #[arg(long)]
        consume: bool,
    },

    /// Simulate a drag gesture on the flip card and settle it
    Flip {
        /// Comma-separated horizontal move deltas in pixels, e.g. "40,80,-15"
        #[arg(long, value_name = "DELTAS", allow_hyphen_values = true)]
        deltas: String,
    },
}
