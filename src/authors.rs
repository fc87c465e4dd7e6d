use anyhow::{Result, anyhow};
use biblatex::{ChunksRef, Person, Type};

/// Convert a BibTeX name list into display names, one per person, in source
/// order.
///
/// Splitting each name into given/particle/family/suffix parts is delegated to
/// `biblatex`; this only reassembles them as `first von last` with any suffix
/// appended as `, suffix`.
pub fn clean_authors(chunks: ChunksRef) -> Result<Vec<String>> {
    let people =
        Vec::<Person>::from_chunks(chunks).map_err(|e| anyhow!("malformed name list: {e}"))?;
    Ok(people.iter().map(display_name).collect())
}

fn display_name(person: &Person) -> String {
    let mut name = [
        person.given_name.as_str(),
        person.prefix.as_str(),
        person.name.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ");
    if !person.suffix.is_empty() {
        name.push_str(", ");
        name.push_str(&person.suffix);
    }
    name
}
