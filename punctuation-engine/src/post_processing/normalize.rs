use regex::Regex;
use std::sync::OnceLock;

fn re_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

/// Any mix of sentence terminators: `?!`, `...`, `!?.`
fn re_terminal_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminal run pattern"))
}

fn re_separator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,;]+").expect("separator run pattern"))
}

/// Collapse whitespace and redundant punctuation.
///
/// - whitespace runs become a single space, ends are trimmed
/// - runs of `.`, `!`, `?` become a single `.`
/// - runs of `,`, `;` become a single `,`
pub fn normalize(text: &str) -> String {
    let text = re_whitespace().replace_all(text, " ");
    let text = text.trim();
    let text = re_terminal_run().replace_all(text, ".");
    re_separator_run().replace_all(&text, ",").into_owned()
}
