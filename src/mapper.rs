use anyhow::{Context, Result, anyhow};
use biblatex::{ChunksExt, Entry};
use log::{error, warn};

use crate::{
    authors, date,
    front_matter::FrontMatter,
    options,
    pubtype::PublicationType,
    tags,
};

/// Behaviour switches for one import run, as resolved from the CLI.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub publication_dir: String,
    pub featured: bool,
    pub overwrite: bool,
    pub normalize: bool,
    pub publish_date_from_bibtex: bool,
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            publication_dir: "publication".to_string(),
            featured: false,
            overwrite: false,
            normalize: false,
            publish_date_from_bibtex: false,
            dry_run: false,
        }
    }
}

/// Build the complete front-matter document for one citation record.
///
/// Pure with respect to the filesystem: `timestamp` is the import time already
/// rendered as RFC 3339, and any previously written document is merged in by
/// the writer afterwards. An unresolvable year is reported but still yields a
/// best-effort document; an unrecognisable month fails the entry.
pub fn front_matter_for(
    entry: &Entry,
    opts: &ImportOptions,
    timestamp: &str,
) -> Result<FrontMatter> {
    let mut fm = FrontMatter::new();

    let title = entry
        .get("title")
        .ok_or_else(|| anyhow!("entry `{}` has no title", entry.key))?
        .format_verbatim();
    fm.set("title", title);

    let date = date::resolve_date(entry)
        .with_context(|| format!("invalid date for entry `{}`", entry.key))?;
    if date.year.is_empty() {
        error!("invalid date for entry `{}`", entry.key);
    }
    fm.set("date", date.iso());

    let publish_date = if opts.publish_date_from_bibtex {
        date.iso()
    } else {
        timestamp.to_string()
    };
    fm.set("publishDate", publish_date);

    if let Some(chunks) = entry.get("author").or_else(|| entry.get("editor")) {
        let names = authors::clean_authors(chunks)
            .with_context(|| format!("invalid name list for entry `{}`", entry.key))?;
        fm.set("authors", names);
    }

    let kind = entry.entry_type.to_string();
    fm.set("publication_types", vec![
        PublicationType::from_entry_type(&kind).code().to_string(),
    ]);

    let abstract_text = entry
        .get("abstract")
        .map(|c| c.format_verbatim())
        .unwrap_or_default();
    fm.set("abstract", abstract_text);

    fm.set("featured", resolve_featured(entry, opts.featured));

    fm.set("publication", venue(entry));

    if let Some(keywords) = entry.get("keywords") {
        fm.set(
            "tags",
            tags::clean_tags(&keywords.format_verbatim(), opts.normalize),
        );
    }

    if let Some(url) = entry.get("url") {
        fm.set("url_pdf", url.format_verbatim());
    }
    if let Some(doi) = entry.get("doi") {
        fm.set("doi", doi.format_verbatim());
    }

    Ok(fm)
}

// Per-entry override beats the run-wide default; a malformed options field is
// reported with its raw value and ignored rather than failing the entry.
fn resolve_featured(entry: &Entry, default: bool) -> bool {
    let Some(raw) = entry.get("options").map(|c| c.format_verbatim()) else {
        return default;
    };
    match options::featured_override(&raw) {
        Ok(Some(explicit)) => explicit,
        Ok(None) => default,
        Err(err) => {
            warn!("could not parse options field `{raw}`: {err:#}");
            default
        }
    }
}

// First venue-ish field wins, wrapped for emphasis.
fn venue(entry: &Entry) -> String {
    ["booktitle", "journal", "publisher", "institution"]
        .iter()
        .find_map(|field| entry.get(field))
        .map(|chunks| format!("*{}*", chunks.format_verbatim()))
        .unwrap_or_default()
}
