use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import publication bundles from a BibTeX database
    Import {
        /// Path to the BibTeX file to import
        #[arg(long, value_name = "FILE")]
        bibtex: PathBuf,
        /// Directory under `content/` that publications are stored in
        #[arg(long, value_name = "DIR", default_value = "publication")]
        publication_dir: String,
        /// Flag imported publications as featured
        #[arg(long)]
        featured: bool,
        /// Overwrite existing publication bundles
        #[arg(long)]
        overwrite: bool,
        /// Normalize each keyword to lowercase with an uppercase first letter
        #[arg(long)]
        normalize: bool,
        /// Derive `publishDate` from the bibliographic date instead of the import time
        #[arg(long)]
        publish_date_from_bibtex: bool,
        /// Report everything an import would do without touching the filesystem
        #[arg(long)]
        dry_run: bool,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}
