use anyhow::{Result, bail};
use biblatex::{ChunksExt, Entry};

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A publication date split into its components. Month and day default to `01`
/// and stay zero-padded; the year is carried verbatim and may be empty when no
/// field resolved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateParts {
    pub fn iso(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Reconcile the `date`, `month` and `year` fields of an entry into one triple.
///
/// A structured `date` wins. A standalone `month` only applies while the month
/// still holds its default, and a standalone `year` only while the year is
/// still unset. An unrecognisable month name fails the entry; a missing year
/// does not, and the caller decides how loudly to report it.
pub fn resolve_date(entry: &Entry) -> Result<DateParts> {
    let mut year = String::new();
    let mut month = String::from("01");
    let mut day = String::from("01");

    if let Some(date) = entry.get("date").map(|c| c.format_verbatim()) {
        match date.split('-').collect::<Vec<_>>().as_slice() {
            [y, m, d] => {
                year = y.to_string();
                month = m.to_string();
                day = d.to_string();
            }
            [y, m] => {
                year = y.to_string();
                month = m.to_string();
            }
            [y] => year = y.to_string(),
            _ => {}
        }
    }

    if month == "01"
        && let Some(raw) = entry.get("month").map(|c| c.format_verbatim())
    {
        month = month_number(&raw)?;
    }

    if year.is_empty()
        && let Some(raw) = entry.get("year").map(|c| c.format_verbatim())
    {
        year = raw;
    }

    Ok(DateParts { year, month, day })
}

/// Convert a BibTeX or BibLaTeX month to its zero-padded numeric form.
///
/// One or two characters are taken to be an already-numeric month; anything
/// longer is matched by its three-letter abbreviation.
pub fn month_number(month: &str) -> Result<String> {
    if month.chars().count() <= 2 {
        return Ok(format!("{month:0>2}"));
    }
    let abbr: String = month
        .trim()
        .chars()
        .take(3)
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    match MONTH_ABBR.iter().position(|m| *m == abbr) {
        Some(idx) => Ok(format!("{:02}", idx + 1)),
        None => bail!("unrecognised month `{month}`"),
    }
}
