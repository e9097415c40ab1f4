use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(-|\*|\d+\.)\s+").unwrap());

/// Block-level classification of a single line, decided after inline
/// substitution. Exactly one kind applies; heading wins over list, list
/// over paragraph, and only the empty line is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading { level: usize },
    List { ordered: bool },
    Paragraph,
    Blank,
}

/// Classify a line by its block-level marker.
pub fn classify(line: &str) -> BlockKind {
    if line.is_empty() {
        return BlockKind::Blank;
    }
    if let Some(caps) = HEADING.captures(line) {
        return BlockKind::Heading {
            level: caps[1].len(),
        };
    }
    if let Some(caps) = LIST.captures(line) {
        return BlockKind::List {
            ordered: !matches!(&caps[1], "-" | "*"),
        };
    }
    BlockKind::Paragraph
}

/// Wrap an inline-substituted line in its block-level HTML element.
pub fn wrap(line: String) -> String {
    match classify(&line) {
        BlockKind::Blank => line,
        BlockKind::Heading { level } => {
            format!("<h{level}>{}</h{level}>", heading_text(&line))
        }
        BlockKind::List { ordered } => {
            let tag = if ordered { "ol" } else { "ul" };
            let text = &line[LIST.find(&line).unwrap().end()..];
            format!("<{tag} style=\"margin-bottom: 0;\"><li>{text}</li></{tag}>")
        }
        BlockKind::Paragraph => format!("<p>{line}</p>"),
    }
}

/// Heading text is found by re-scanning the whole line for the first
/// character that is neither `#` nor whitespace, taken verbatim to the end.
/// A line with no such character yields an empty heading.
fn heading_text(line: &str) -> &str {
    match line.find(|c: char| c != '#' && !c.is_whitespace()) {
        Some(start) => &line[start..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{BlockKind, classify, wrap};

    #[test]
    fn heading_levels() {
        assert_eq!(wrap("# Hello".to_string()), "<h1>Hello</h1>");
        assert_eq!(wrap("## World".to_string()), "<h2>World</h2>");
        assert_eq!(wrap("### Deep".to_string()), "<h3>Deep</h3>");
    }

    #[test]
    fn heading_level_is_not_clamped() {
        assert_eq!(wrap("####### Seven".to_string()), "<h7>Seven</h7>");
    }

    #[test]
    fn heading_text_runs_to_end_of_line() {
        assert_eq!(wrap("# Hello # Bye".to_string()), "<h1>Hello # Bye</h1>");
    }

    #[test]
    fn heading_with_no_text_is_empty() {
        assert_eq!(wrap("# ".to_string()), "<h1></h1>");
        assert_eq!(wrap("## #".to_string()), "<h2></h2>");
    }

    #[test]
    fn hash_without_whitespace_is_a_paragraph() {
        assert_eq!(wrap("#tag".to_string()), "<p>#tag</p>");
        assert_eq!(wrap("###".to_string()), "<p>###</p>");
    }

    #[test]
    fn unordered_list_markers() {
        assert_eq!(
            wrap("- programming".to_string()),
            "<ul style=\"margin-bottom: 0;\"><li>programming</li></ul>"
        );
        assert_eq!(
            wrap("* reading".to_string()),
            "<ul style=\"margin-bottom: 0;\"><li>reading</li></ul>"
        );
    }

    #[test]
    fn ordered_list_marker() {
        assert_eq!(
            wrap("12. twelfth".to_string()),
            "<ol style=\"margin-bottom: 0;\"><li>twelfth</li></ol>"
        );
    }

    #[test]
    fn list_marker_allows_leading_whitespace() {
        assert_eq!(
            wrap("  - indented".to_string()),
            "<ul style=\"margin-bottom: 0;\"><li>indented</li></ul>"
        );
    }

    #[test]
    fn digits_without_dot_are_a_paragraph() {
        assert_eq!(wrap("1 item".to_string()), "<p>1 item</p>");
    }

    #[test]
    fn heading_wins_over_list() {
        assert_eq!(classify("# - both"), BlockKind::Heading { level: 1 });
        assert_eq!(wrap("# - both".to_string()), "<h1>- both</h1>");
    }

    #[test]
    fn plain_text_is_a_paragraph() {
        assert_eq!(classify("plain text"), BlockKind::Paragraph);
        assert_eq!(wrap("plain text".to_string()), "<p>plain text</p>");
    }

    #[test]
    fn whitespace_only_line_is_a_paragraph() {
        assert_eq!(wrap("   ".to_string()), "<p>   </p>");
    }

    #[test]
    fn empty_line_is_blank() {
        assert_eq!(classify(""), BlockKind::Blank);
        assert_eq!(wrap(String::new()), "");
    }
}
