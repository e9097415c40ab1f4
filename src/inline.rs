use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Compiled once; the patterns are stateless so sharing them is safe.
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*{2}(.+?)\*{2}").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// Apply the inline substitutions (bold, italic, link) to one line.
///
/// Each pattern is exhausted before the next one runs. Bold goes first so a
/// double-asterisk run claims its span before the single-asterisk pattern
/// can see it; whatever single asterisks survive the bold pass are fair game
/// for italic.
pub fn substitute(line: String) -> String {
    let line = replace_each(&BOLD, line, |caps| format!("<b>{}</b>", &caps[1]));
    let line = replace_each(&ITALIC, line, |caps| format!("<i>{}</i>", &caps[1]));
    replace_each(&LINK, line, |caps| {
        format!("<a href=\"{}\">{}</a>", &caps[2], &caps[1])
    })
}

/// Replace matches of `re` one at a time: find the leftmost match, splice in
/// the replacement, rescan from the start of the line, until none remain.
///
/// Terminates by construction: a match consumes its delimiters and the
/// replacement re-emits only the captured interior, so every iteration
/// strictly decreases the number of delimiter characters left in the line.
fn replace_each(re: &Regex, mut line: String, render: impl Fn(&Captures) -> String) -> String {
    while let Some(caps) = re.captures(&line) {
        let range = caps.get(0).unwrap().range();
        let replacement = render(&caps);
        line.replace_range(range, &replacement);
    }
    line
}
