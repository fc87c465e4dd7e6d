/// Split a comma-separated keyword list into trimmed tags, in order.
///
/// With `normalize` set, each tag is lowercased and given a leading capital
/// (single-word style, not per-word title case).
pub fn clean_tags(keywords: &str, normalize: bool) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .map(|tag| {
            if normalize {
                capitalize(tag)
            } else {
                tag.to_string()
            }
        })
        .collect()
}

fn capitalize(tag: &str) -> String {
    let lower = tag.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(clean_tags("one, two ,  three", false), vec![
            "one", "two", "three"
        ]);
    }

    #[test]
    fn keeps_original_casing_without_normalize() {
        assert_eq!(clean_tags("Tag1, MixedCase", false), vec![
            "Tag1",
            "MixedCase"
        ]);
    }

    #[test]
    fn normalize_capitalizes_first_letter_only() {
        assert_eq!(clean_tags("tag1, tag with spaces, MIXEDcase", true), vec![
            "Tag1",
            "Tag with spaces",
            "Mixedcase"
        ]);
    }

    #[test]
    fn single_keyword() {
        assert_eq!(clean_tags("deep learning", true), vec!["Deep learning"]);
    }
}
