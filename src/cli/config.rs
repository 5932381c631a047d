// CLI configuration
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use trixtag::tagger::metaflac::DEFAULT_PROGRAM;
use trixtag::DEFAULT_GENRE;

/// trixtag - Hunter's Trix tagging tool
#[derive(Parser, Debug)]
#[command(name = "trixtag")]
#[command(about = "Tags Hunter's Trix FLAC downloads from their metadata file and cover art", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// metaflac executable
    #[arg(long, env = "TRIXTAG_METAFLAC", default_value = DEFAULT_PROGRAM, global = true)]
    pub metaflac: PathBuf,

    /// Show what would be written without touching any file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

/// Where to find one album and how to describe it
#[derive(Args, Debug, Clone)]
pub struct AlbumArgs {
    /// Album directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// File containing the metadata
    #[arg(short, long)]
    pub metadata: Option<PathBuf>,

    /// File to be used as cover art
    #[arg(short, long)]
    pub cover: Option<PathBuf>,

    /// Artist to be used in the metadata
    #[arg(short, long)]
    pub artist: Option<String>,

    /// Volume number of Hunter's Trix
    #[arg(short, long)]
    pub volume: Option<String>,

    /// Genre to be used in the metadata
    #[arg(short, long, default_value = DEFAULT_GENRE)]
    pub genre: String,

    /// Fail instead of asking when the volume can't be found
    #[arg(long)]
    pub no_prompt: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag one album directory
    Tag {
        #[command(flatten)]
        album: AlbumArgs,

        /// Rename the directory to the album title
        #[arg(short, long)]
        rename: bool,

        /// Read the tags back after writing them
        #[arg(long)]
        verify: bool,
    },

    /// Tag every untouched download directory inside a parent directory
    Batch {
        /// Parent directory
        #[arg(value_name = "DIR")]
        parent: PathBuf,

        /// Rename each directory to its album title
        #[arg(short, long)]
        rename: bool,

        /// Genre to be used in the metadata
        #[arg(short, long, default_value = DEFAULT_GENRE)]
        genre: String,

        /// Exit with an error status if any album failed
        #[arg(long)]
        strict: bool,
    },

    /// Check that an album's files carry the expected tags
    Verify {
        #[command(flatten)]
        album: AlbumArgs,
    },
}
