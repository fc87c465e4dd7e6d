use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use biblatex::{Bibliography, Entry};
use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};

use crate::{
    front_matter::FrontMatter,
    mapper::{self, ImportOptions},
    slug::slugify,
};

const MARKDOWN_FILE: &str = "index.md";
const CITE_FILE: &str = "cite.bib";

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Written,
    Skipped,
}

/// Import every entry of a BibTeX database as a publication bundle.
///
/// The source file failing to load or parse is the only error that aborts the
/// run; anything going wrong with a single entry is reported and the batch
/// moves on.
pub fn import_bibtex(bibtex: &Path, opts: &ImportOptions) -> Result<()> {
    let source = fs::read_to_string(bibtex).with_context(|| {
        format!(
            "failed to read BibTeX file `{}`; check the path and re-run",
            bibtex.display()
        )
    })?;
    let bibliography = Bibliography::parse(&source)
        .map_err(|e| anyhow!("failed to parse `{}`: {e}", bibtex.display()))?;

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let (mut written, mut skipped, mut failed) = (0usize, 0usize, 0usize);
    for entry in bibliography.iter() {
        match import_entry(entry, opts, &timestamp) {
            Ok(Outcome::Written) => written += 1,
            Ok(Outcome::Skipped) => skipped += 1,
            Err(err) => {
                failed += 1;
                error!("entry `{}` not imported: {err:#}", entry.key);
            }
        }
    }
    info!("imported {written} bundle(s), skipped {skipped}, {failed} failure(s)");
    Ok(())
}

fn import_entry(entry: &Entry, opts: &ImportOptions, timestamp: &str) -> Result<Outcome> {
    info!("parsing entry `{}`", entry.key);

    let bundle_path = bundle_path(entry, opts);
    if !opts.overwrite && bundle_path.is_dir() {
        warn!(
            "skipping creation of {} as it already exists; pass --overwrite to replace it",
            bundle_path.display()
        );
        return Ok(Outcome::Skipped);
    }

    let fm = mapper::front_matter_for(entry, opts, timestamp)?;
    write_bundle(entry, fm, &bundle_path, opts)?;
    Ok(Outcome::Written)
}

fn bundle_path(entry: &Entry, opts: &ImportOptions) -> PathBuf {
    Path::new("content")
        .join(&opts.publication_dir)
        .join(slugify(&entry.key, true))
}

/// Persist one bundle: the citation record and the front-matter document.
///
/// In dry-run mode every step short of touching the filesystem still happens,
/// the existing-document lookup included.
fn write_bundle(
    entry: &Entry,
    mut fm: FrontMatter,
    bundle_path: &Path,
    opts: &ImportOptions,
) -> Result<()> {
    let markdown_path = bundle_path.join(MARKDOWN_FILE);
    let cite_path = bundle_path.join(CITE_FILE);

    // Never move an already-published entry's publish date on re-import.
    match FrontMatter::load(&markdown_path) {
        Ok(Some(existing)) => fm.keep_publish_date(&existing),
        Ok(None) => {}
        Err(err) => warn!(
            "replacing unreadable front matter in {}: {err:#}",
            markdown_path.display()
        ),
    }
    let rendered = fm.render()?;

    info!("creating bundle {}", bundle_path.display());
    if !opts.dry_run {
        fs::create_dir_all(bundle_path)
            .with_context(|| format!("failed to create {}", bundle_path.display()))?;
    }

    info!("saving citation to {}", cite_path.display());
    if !opts.dry_run {
        fs::write(&cite_path, entry.to_biblatex_string())
            .with_context(|| format!("failed to write {}", cite_path.display()))?;
    }

    info!("saving front matter to {}", markdown_path.display());
    if !opts.dry_run {
        fs::write(&markdown_path, rendered)
            .with_context(|| format!("failed to write {}", markdown_path.display()))?;
    }

    Ok(())
}
