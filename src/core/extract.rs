// src/core/extract.rs
//
// The one place that knows where the view count hides in a watch page.
// The page data is undocumented and changes without notice; when it does,
// only PATTERNS below should need touching.

use std::sync::LazyLock;

use regex::Regex;

use super::error::Failure;
use super::html::script_blocks;

/// A known spot for the count. Capture group 1 = digits with optional thousands commas.
pub struct ViewPattern {
    pub name: &'static str,
    re: Regex,
}

impl ViewPattern {
    fn new(name: &'static str, re: &str) -> Self {
        Self { name, re: Regex::new(re).expect("static regex") }
    }

    /// Digits of the first match in `text`, separators still in.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
    }
}

/// Ordered fallback chain. Earlier patterns win across all script blocks.
///
/// The renderer pattern is not limited to the `var ytInitialData` script:
/// a renderer count anywhere on the page beats a `videoDetails` count.
pub static PATTERNS: LazyLock<[ViewPattern; 2]> = LazyLock::new(|| {
    [
        ViewPattern::new(
            "videoViewCountRenderer",
            r#""viewCount":\{"videoViewCountRenderer":\{"viewCount":\{"simpleText":"([0-9,]+)"#,
        ),
        ViewPattern::new("videoDetails", r#""viewCount":"([0-9,]+)""#),
    ]
});

/// View count from a watch page body.
///
/// Script blocks are searched first, pattern by pattern; the whole document is
/// the last resort. `ExtractionFailed` when nothing matches.
pub fn extract_view_count(doc: &str) -> Result<u64, Failure> {
    let blocks: Vec<&str> = script_blocks(doc).collect();

    for pat in PATTERNS.iter() {
        if let Some(digits) = blocks.iter().find_map(|b| pat.find(b)) {
            logd!("Extract: matched pattern={} in script", pat.name);
            return parse_count(digits);
        }
    }

    for pat in PATTERNS.iter() {
        if let Some(digits) = pat.find(doc) {
            logd!("Extract: matched pattern={} outside scripts", pat.name);
            return parse_count(digits);
        }
    }

    Err(Failure::ExtractionFailed)
}

/// "1,234,567" → 1234567
pub fn parse_count(text: &str) -> Result<u64, Failure> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<u64>()
        .map_err(|e| Failure::Unexpected(format!("bad view count {text:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(scripts: &[&str]) -> String {
        let mut doc = s!("<html><head><title>t</title></head><body>");
        for s in scripts {
            doc.push_str("<script nonce=\"n\">");
            doc.push_str(s);
            doc.push_str("</script>");
        }
        doc.push_str("</body></html>");
        doc
    }

    const RENDERER: &str = r#"var ytInitialData = {"contents":{"viewCount":{"videoViewCountRenderer":{"viewCount":{"simpleText":"1,234 views"}}}}};"#;
    const DETAILS: &str = r#"var ytInitialPlayerResponse = {"videoDetails":{"videoId":"x","viewCount":"98765","author":"a"}};"#;

    #[test]
    fn renderer_pattern_strips_commas() {
        assert_eq!(extract_view_count(&page(&[RENDERER])), Ok(1234));
    }

    #[test]
    fn details_pattern_is_the_fallback() {
        assert_eq!(extract_view_count(&page(&[DETAILS])), Ok(98765));
    }

    #[test]
    fn first_pattern_wins_even_in_a_later_block() {
        assert_eq!(extract_view_count(&page(&[DETAILS, RENDERER])), Ok(1234));
    }

    #[test]
    fn renderer_outside_initial_data_still_beats_details() {
        let other = r#"window.cache = {"viewCount":{"videoViewCountRenderer":{"viewCount":{"simpleText":"5"}}}};"#;
        let details = r#"var ytInitialPlayerResponse = {"videoDetails":{"viewCount":"7"}};"#;
        assert_eq!(extract_view_count(&page(&[details, other])), Ok(5));
    }

    #[test]
    fn pattern_outside_scripts_still_counts() {
        let doc = r#"<div data='"viewCount":{"videoViewCountRenderer":{"viewCount":{"simpleText":"1,234"'></div>"#;
        assert_eq!(extract_view_count(doc), Ok(1234));
    }

    #[test]
    fn nothing_found() {
        let doc = page(&[r#"var ytInitialData = {"viewCount":{"runs":[{"text":"1.2K"}]}};"#]);
        assert_eq!(extract_view_count(&doc), Err(Failure::ExtractionFailed));
        assert_eq!(extract_view_count(""), Err(Failure::ExtractionFailed));
    }

    #[test]
    fn overflow_is_unexpected() {
        let doc = page(&[r#"{"viewCount":"99,999,999,999,999,999,999,999"}"#]);
        assert!(matches!(extract_view_count(&doc), Err(Failure::Unexpected(_))));
    }

    #[test]
    fn parse_count_edge_cases() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("1,000,000"), Ok(1_000_000));
        assert!(matches!(parse_count(",,,"), Err(Failure::Unexpected(_))));
    }
}
