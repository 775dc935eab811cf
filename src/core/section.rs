use regex::{NoExpand, Regex};
use std::sync::LazyLock;
use thiserror::Error;

pub const START_COMMENT: &str = "<!--START_SECTION:stack-->";
pub const END_COMMENT: &str = "<!--END_SECTION:stack-->";

// 從第一個 START 到其後第一個 END（含兩端）
static SECTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s){}.*?{}",
        regex::escape(START_COMMENT),
        regex::escape(END_COMMENT)
    ))
    .expect("section pattern is a valid regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("found {count} start markers, expected one badge section")]
    MultipleRegions { count: usize },

    #[error("start marker has no matching end marker")]
    Unterminated,
}

/// How to treat documents whose markers are not a single clean pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionPolicy {
    /// Replace the first START..END span and leave everything else alone.
    #[default]
    FirstMatch,
    /// Reject repeated or unterminated sections.
    Strict,
}

pub fn render_section(markdown: &str) -> String {
    format!("{}\n{}\n{}", START_COMMENT, markdown, END_COMMENT)
}

/// Replaces the badge section of `document` with `markdown`.
///
/// Empty markdown and documents without the marker pair come back unchanged.
pub fn replace_section(markdown: &str, document: &str) -> String {
    if markdown.is_empty() {
        return document.to_string();
    }
    SECTION_PATTERN
        .replacen(document, 1, NoExpand(&render_section(markdown)))
        .into_owned()
}

fn check_markers(document: &str) -> Result<(), SectionError> {
    let count = document.matches(START_COMMENT).count();
    if count > 1 {
        return Err(SectionError::MultipleRegions { count });
    }
    if let Some(start) = document.find(START_COMMENT) {
        let rest = &document[start + START_COMMENT.len()..];
        if !rest.contains(END_COMMENT) {
            return Err(SectionError::Unterminated);
        }
    }
    Ok(())
}

pub fn replace_section_with_policy(
    markdown: &str,
    document: &str,
    policy: SectionPolicy,
) -> Result<String, SectionError> {
    if markdown.is_empty() {
        return Ok(document.to_string());
    }
    if policy == SectionPolicy::Strict {
        check_markers(document)?;
    }
    Ok(replace_section(markdown, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn readme(inner: &str) -> String {
        format!(
            "# Hello\n\nMy stack:\n{}{}{}\n\nThanks for visiting!\n",
            START_COMMENT, inner, END_COMMENT
        )
    }

    #[test]
    fn test_inserts_into_empty_section() {
        let doc = readme("\n");
        let updated = replace_section("![Python](url)", &doc);
        assert_eq!(
            updated,
            format!(
                "# Hello\n\nMy stack:\n{}\n![Python](url)\n{}\n\nThanks for visiting!\n",
                START_COMMENT, END_COMMENT
            )
        );
    }

    #[test]
    fn test_adjacent_markers_are_replaced() {
        let doc = readme("");
        let updated = replace_section("x", &doc);
        assert!(updated.contains(&render_section("x")));
    }

    #[test]
    fn test_empty_markdown_is_a_noop() {
        let doc = readme("\nold badges\n");
        assert_eq!(replace_section("", &doc), doc);
    }

    #[test]
    fn test_missing_markers_is_a_noop() {
        let doc = "# Hello\nNo section here\n";
        assert_eq!(replace_section("![Go](go)", doc), doc);
        assert_eq!(
            replace_section_with_policy("![Go](go)", doc, SectionPolicy::Strict),
            Ok(doc.to_string())
        );
    }

    #[test]
    fn test_text_outside_span_is_untouched() {
        let doc = readme("\nold\nlines\n");
        let updated = replace_section("new", &doc);
        assert!(updated.starts_with("# Hello\n\nMy stack:\n"));
        assert!(updated.ends_with("\n\nThanks for visiting!\n"));
        assert!(!updated.contains("old"));
    }

    #[test]
    fn test_replacement_is_idempotent() {
        let doc = readme("\nold\n");
        let once = replace_section("a\nb", &doc);
        let twice = replace_section("a\nb", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dollar_signs_are_inserted_literally() {
        let doc = readme("\n");
        let updated = replace_section("![$$](https://x/$1)", &doc);
        assert!(updated.contains("![$$](https://x/$1)"));
    }

    #[test]
    fn test_first_match_only_touches_first_pair() {
        let doc = format!("{}\n{}", readme("\none\n"), readme("\ntwo\n"));
        let updated = replace_section("new", &doc);
        assert!(updated.contains("\ntwo\n"));
        assert!(!updated.contains("\none\n"));
        assert_eq!(updated.matches(START_COMMENT).count(), 2);
    }

    #[test]
    fn test_strict_rejects_multiple_regions() {
        let doc = format!("{}\n{}", readme("\none\n"), readme("\ntwo\n"));
        assert_eq!(
            replace_section_with_policy("new", &doc, SectionPolicy::Strict),
            Err(SectionError::MultipleRegions { count: 2 })
        );
    }

    #[test]
    fn test_unterminated_section() {
        let doc = format!("intro\n{}\ndangling\n", START_COMMENT);
        assert_eq!(replace_section("new", &doc), doc);
        assert_eq!(
            replace_section_with_policy("new", &doc, SectionPolicy::Strict),
            Err(SectionError::Unterminated)
        );
    }

    #[test]
    fn test_end_before_start_is_unterminated() {
        let doc = format!("{}\n{}\n", END_COMMENT, START_COMMENT);
        assert_eq!(
            replace_section_with_policy("new", &doc, SectionPolicy::Strict),
            Err(SectionError::Unterminated)
        );
    }
}
