use std::{fs, path::Path};

use anyhow::{Context, Result};
use toml::{Table, Value};

/// Ordered front-matter document for one publication bundle.
///
/// Keys serialize in insertion order, so the mapper controls the on-disk
/// layout purely by the order it sets them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter(Table);

impl FrontMatter {
    pub fn new() -> Self {
        Self(Table::new())
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Carry the `publishDate` of a previously written document over this one.
    ///
    /// A re-import must never move an entry's publish date, so the on-disk
    /// value wins over whatever the mapper derived.
    pub fn keep_publish_date(&mut self, existing: &FrontMatter) {
        if let Some(date) = existing.get("publishDate") {
            self.0.insert("publishDate".to_string(), date.clone());
        }
    }

    /// Render the document as a fenced TOML front-matter block.
    pub fn render(&self) -> Result<String> {
        let body = toml::to_string(&self.0).context("failed to serialise front matter")?;
        Ok(format!("+++\n{body}+++\n\n"))
    }

    /// Load the front-matter block of an existing document, if there is one.
    ///
    /// `Ok(None)` means no file; a file whose front matter does not parse is
    /// an error the caller gets to decide about.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let table = parse_fenced(&content)
            .with_context(|| format!("no valid front matter in {}", path.display()))?;
        Ok(Some(Self(table)))
    }
}

fn parse_fenced(content: &str) -> Result<Table> {
    let stripped = content
        .strip_prefix("+++")
        .context("missing opening fence")?;
    let end = stripped.find("+++").context("missing closing fence")?;
    stripped[..end]
        .parse::<Table>()
        .context("front matter is not valid TOML")
}
