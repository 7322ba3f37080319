use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinesort")]
#[command(author, version, about = "Confirm movie releases against TMDB and move them into a library directory")]
pub struct Cli {
    /// TMDB API key
    #[arg(long)]
    pub token: String,

    /// Source directory to scan
    #[arg(long)]
    pub src: PathBuf,

    /// Destination directory for confirmed movies
    #[arg(long)]
    pub dst: PathBuf,

    /// Log intended moves without touching the filesystem
    #[arg(long)]
    pub dryrun: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
