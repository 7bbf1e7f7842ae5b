use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shelfsort")]
#[command(author, version, about = "Collection organizer for scan-release names")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort manga folders into per-author directories with canonical names
    Manga {
        /// Source directories holding manga folders
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Destination library root
        #[arg(short, long, required = true)]
        destination: PathBuf,

        /// Archive each organized folder instead of moving it
        #[arg(long)]
        archive: bool,

        /// Remove sources after archiving or copy instead of move
        #[arg(long)]
        remove: bool,

        /// Show what would be done without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Clean bracketed noise and date stamps out of file names in place
    Rename {
        /// Directories whose entries get renamed
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Show what would be done without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Normalize video file names in place
    Video {
        /// Directories scanned recursively for video files
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Show what would be done without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Zip every folder inside the sources
    Zip {
        /// Directories whose subfolders get archived
        #[arg(required = true)]
        sources: Vec<PathBuf>,

        /// Destination for the archives (defaults to each folder's parent)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Show what would be done without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
