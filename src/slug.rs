use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\D+)(\d+)").unwrap());
static DIGIT_ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(\D+)").unwrap());
static HYPHEN_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Derive a filesystem-safe bundle name from a citation key.
///
/// `Smith2020FooBar` becomes `smith-2020-foo-bar`: separator punctuation turns
/// into hyphens, digit runs and camel-case humps are split apart, everything
/// else non-alphanumeric is dropped. The output only ever contains
/// alphanumerics and single hyphens, so the function is idempotent.
pub fn slugify(key: &str, lower: bool) -> String {
    let s = key.replace(['.', '_', ':'], "-");

    let s = ALPHA_DIGIT_RE.replace_all(&s, "${1}-${2}");
    let s = DIGIT_ALPHA_RE.replace_all(&s, "${1}-${2}");
    let s = split_camel_case(&s);

    let s: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect();
    let s = HYPHEN_RUN_RE.replace_all(&s, "-");

    if lower { s.to_lowercase() } else { s.into_owned() }
}

// The camel-case rule needs look-around, which the regex crate doesn't do, so
// scan by hand: hyphenate before an uppercase letter that follows a lowercase
// one, or that precedes a lowercase one anywhere past the start.
fn split_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_ascii_lowercase();
            let before_lower = i > 0 && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if after_lower || before_lower {
                out.push('-');
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_camel_case_and_digits() {
        assert_eq!(slugify("Smith2020FooBar", true), "smith-2020-foo-bar");
        assert_eq!(slugify("Doe2020", true), "doe-2020");
    }

    #[test]
    fn collapses_separator_punctuation() {
        assert_eq!(slugify("a..b__c", true), "a-b-c");
        assert_eq!(slugify("key:with.every_separator", true), "key-with-every-separator");
    }

    #[test]
    fn strips_unsafe_characters() {
        assert_eq!(slugify("we/ird (key)!", true), "weirdkey");
        assert_eq!(slugify("smith&jones:2020", true), "smithjones-2020");
    }

    #[test]
    fn preserves_case_when_asked() {
        assert_eq!(slugify("Smith2020FooBar", false), "Smith-2020-Foo-Bar");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(slugify("", true), "");
    }

    #[test]
    fn idempotent_on_arbitrary_keys() {
        proptest::proptest!(|(key in "[A-Za-z0-9._:-]{0,40}")| {
            let once = slugify(&key, true);
            proptest::prop_assert_eq!(slugify(&once, true), once);
        })
    }

    #[test]
    fn output_is_always_safe() {
        proptest::proptest!(|(key in "[ -~]{0,40}")| {
            let slug = slugify(&key, true);
            proptest::prop_assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '-'));
            proptest::prop_assert!(!slug.contains("--"));
        })
    }
}
