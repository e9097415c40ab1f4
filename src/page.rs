use crate::config::Config;

/// Wrap a converted HTML body in a minimal standalone page.
///
/// The body is interpolated as-is; the converter does no HTML escaping, so
/// the same trust assumptions apply here.
pub fn render(title: &str, body: &str, config: &Config) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    if let Some(href) = &config.page.stylesheet {
        out.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{href}\">\n"
        ));
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");

    out
}
