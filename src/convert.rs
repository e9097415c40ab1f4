use crate::block;
use crate::inline;

/// Convert one Markdown line into one line of HTML.
///
/// The empty line passes through untouched, keeping blank separator lines
/// blank in the output. Every other line goes through the inline passes
/// (bold, italic, link) and then gets exactly one block-level wrapper.
pub fn convert_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }
    block::wrap(inline::substitute(line.to_string()))
}

/// Convert a full Markdown document into HTML, line by line.
///
/// Lines are independent: no state carries from one to the next, and the
/// output has exactly as many lines as the input. A trailing newline in the
/// input survives as a trailing newline in the output.
pub fn convert_document(markdown: &str) -> String {
    markdown
        .split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("\n")
}
