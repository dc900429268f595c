//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Local mood journal store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a journal entry
    Add {
        /// Entry date (YYYY-MM-DD or RFC 3339; default: now)
        #[arg(short, long)]
        date: Option<String>,

        /// Entry text body
        #[arg(short, long, default_value = "")]
        content: String,

        /// Mood label (e.g. happy, neutral, sad)
        #[arg(short, long)]
        mood: Option<String>,

        /// Free-form elaboration on the mood
        #[arg(long)]
        mood_note: Option<String>,

        /// Reflection prompt as QUESTION=ANSWER (repeatable)
        #[arg(long = "prompt", value_name = "QUESTION=ANSWER")]
        prompts: Vec<String>,

        /// Tag label (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Voice note file to import
        #[arg(long, value_name = "FILE")]
        voice: Option<PathBuf>,

        /// Image file to import (repeatable)
        #[arg(long = "image", value_name = "FILE")]
        images: Vec<PathBuf>,

        /// Drawing file to import (repeatable)
        #[arg(long = "drawing", value_name = "FILE")]
        drawings: Vec<PathBuf>,

        /// Sentiment annotation
        #[arg(long)]
        sentiment: Option<String>,
    },

    /// Show entries for a date (prefix match, so a bare day matches
    /// timestamped entries)
    Show {
        /// Date or timestamp prefix (YYYY-MM-DD or RFC 3339)
        date: String,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id (printed by 'moodlog add')
        id: String,

        /// New entry date
        #[arg(long)]
        date: Option<String>,

        /// New text body
        #[arg(short, long)]
        content: Option<String>,

        /// New mood label
        #[arg(short, long)]
        mood: Option<String>,

        /// New mood note
        #[arg(long)]
        mood_note: Option<String>,

        /// New sentiment annotation
        #[arg(long)]
        sentiment: Option<String>,

        /// Additional tag (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id
        id: String,
    },

    /// Mood statistics over an inclusive date range
    Stats {
        /// Range start (YYYY-MM-DD or RFC 3339)
        start: String,

        /// Range end (YYYY-MM-DD or RFC 3339)
        end: String,
    },

    /// View configuration
    Config {
        /// Config key to read (created, format_version)
        key: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
