mod block;
mod config;
mod convert;
mod inline;
mod page;

pub use block::BlockKind;
pub use config::{Config, PageConfig};

/// Convert Markdown text to HTML, one line at a time.
pub fn convert_document(markdown: &str) -> String {
    convert::convert_document(markdown)
}

/// Convert a single Markdown line to a single line of HTML.
pub fn convert_line(line: &str) -> String {
    convert::convert_line(line)
}

/// Convert Markdown and wrap the result in a standalone HTML page.
pub fn markdown_to_page(markdown: &str, title: &str, config: &Config) -> String {
    let body = convert::convert_document(markdown);
    page::render(title, &body, config)
}
