use clap::Parser;

use crate::{
    cli::{Cli, Command},
    mapper::ImportOptions,
};

mod authors;
mod cli;
mod date;
mod front_matter;
mod import;
mod mapper;
mod options;
mod pubtype;
mod slug;
mod tags;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    match args.command {
        Command::Import {
            bibtex,
            publication_dir,
            featured,
            overwrite,
            normalize,
            publish_date_from_bibtex,
            dry_run,
            verbose,
        } => {
            init_logger(verbose)?;
            let opts = ImportOptions {
                publication_dir,
                featured,
                overwrite,
                normalize,
                publish_date_from_bibtex,
                dry_run,
            };
            import::import_bibtex(&bibtex, &opts)
        }
    }
}

fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()?;
    Ok(())
}
