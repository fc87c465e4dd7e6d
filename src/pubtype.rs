/// Publication categories understood by the site theme, with the numeric codes
/// its templates expect as discriminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationType {
    Uncategorized = 0,
    ConferencePaper = 1,
    JournalArticle = 2,
    Preprint = 3,
    Report = 4,
    Book = 5,
    BookSection = 6,
    Thesis = 7,
    Patent = 8,
}

impl PublicationType {
    /// Map a BibTeX entry-type keyword onto a category. The keyword is matched
    /// exactly (parsers hand them over lowercased); anything unknown falls
    /// back to `Uncategorized`.
    pub fn from_entry_type(kind: &str) -> Self {
        match kind {
            "article" => Self::JournalArticle,
            "book" => Self::Book,
            "conference" => Self::ConferencePaper,
            "inbook" => Self::BookSection,
            "incollection" => Self::BookSection,
            "inproceedings" => Self::ConferencePaper,
            "manual" => Self::Report,
            "mastersthesis" => Self::Thesis,
            "misc" => Self::Uncategorized,
            "patent" => Self::Patent,
            "phdthesis" => Self::Thesis,
            "proceedings" => Self::Uncategorized,
            "report" => Self::Report,
            "thesis" => Self::Thesis,
            "techreport" => Self::Report,
            "unpublished" => Self::Preprint,
            _ => Self::Uncategorized,
        }
    }

    /// The theme-facing numeric code.
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thesis_keywords() {
        for kind in ["phdthesis", "mastersthesis", "thesis"] {
            assert_eq!(PublicationType::from_entry_type(kind), PublicationType::Thesis);
        }
        assert_eq!(PublicationType::from_entry_type("phdthesis").code(), 7);
    }

    #[test]
    fn report_keywords() {
        for kind in ["report", "techreport", "manual"] {
            assert_eq!(PublicationType::from_entry_type(kind), PublicationType::Report);
        }
    }

    #[test]
    fn conference_keywords() {
        for kind in ["conference", "inproceedings"] {
            assert_eq!(
                PublicationType::from_entry_type(kind),
                PublicationType::ConferencePaper
            );
        }
    }

    #[test]
    fn unknown_keyword_is_uncategorized() {
        assert_eq!(
            PublicationType::from_entry_type("foobar"),
            PublicationType::Uncategorized
        );
        assert_eq!(PublicationType::from_entry_type("foobar").code(), 0);
    }

    #[test]
    fn case_matters() {
        assert_eq!(
            PublicationType::from_entry_type("PhdThesis"),
            PublicationType::Uncategorized
        );
    }

    #[test]
    fn codes_match_the_theme_contract() {
        assert_eq!(PublicationType::JournalArticle.code(), 2);
        assert_eq!(PublicationType::Preprint.code(), 3);
        assert_eq!(PublicationType::Book.code(), 5);
        assert_eq!(PublicationType::BookSection.code(), 6);
        assert_eq!(PublicationType::Patent.code(), 8);
    }
}
