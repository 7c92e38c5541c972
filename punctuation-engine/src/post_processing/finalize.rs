use super::classify::SentenceCategory;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn re_space_before_mark() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+([.,!?:;])").expect("space before mark pattern"))
}

fn re_mark_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.,!?:;]+").expect("mark run pattern"))
}

fn re_comma_spacing() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*").expect("comma spacing pattern"))
}

fn re_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

fn is_trailing_mark(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | ',' | ';' | ':') || ch.is_whitespace()
}

/// Drop the trailing run of terminators, separators and whitespace.
///
/// Separators go too: a dangling comma would otherwise swallow the
/// terminal mark when [`final_cleanup`] collapses the run.
pub fn strip_terminal_marks(sentence: &str) -> &str {
    sentence.trim_end_matches(is_trailing_mark)
}

/// Uppercase the first alphabetic character, passing anything before it
/// through unchanged.
pub fn capitalize_first_letter(sentence: &str) -> String {
    match sentence.char_indices().find(|(_, ch)| ch.is_alphabetic()) {
        None => sentence.to_string(),
        Some((idx, ch)) => {
            let mut result = String::with_capacity(sentence.len() + 2);
            result.push_str(&sentence[..idx]);
            result.extend(ch.to_uppercase());
            result.push_str(&sentence[idx + ch.len_utf8()..]);
            result
        }
    }
}

/// Replace any trailing marks with the category's terminal mark and
/// capitalize. Returns `None` when nothing but punctuation is left.
pub fn finalize_sentence(sentence: &str, category: SentenceCategory) -> Option<String> {
    let body = strip_terminal_marks(sentence);
    if body.is_empty() {
        return None;
    }

    let mut finished = String::with_capacity(body.len() + 1);
    finished.push_str(body);
    finished.push(category.terminal_mark());

    Some(capitalize_first_letter(&finished))
}

/// Spacing and punctuation cleanup over the joined output.
///
/// - no whitespace before `. , ! ? : ;`
/// - a run of those marks keeps only its first character
/// - exactly one space after each comma
/// - whitespace runs collapse to one space, ends trimmed
pub fn final_cleanup(text: &str) -> String {
    let text = re_space_before_mark().replace_all(text, "$1");
    // Marks are ASCII, so the first byte is the first character
    let text = re_mark_run().replace_all(&text, |caps: &Captures<'_>| caps[0][..1].to_string());
    let text = re_comma_spacing().replace_all(&text, ", ");
    let text = re_whitespace().replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_terminal_marks() {
        assert_eq!(strip_terminal_marks("ми тут?!."), "ми тут");
        assert_eq!(strip_terminal_marks("ні, так,"), "ні, так");
        assert_eq!(strip_terminal_marks("ми тут"), "ми тут");
        assert_eq!(strip_terminal_marks(", ."), "");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("ґанок"), "Ґанок");
        assert_eq!(capitalize_first_letter("«їжак» тут"), "«Їжак» тут");
        assert_eq!(capitalize_first_letter("2 яблука"), "2 Яблука");
        assert_eq!(capitalize_first_letter("123"), "123");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_finalize_sentence() {
        assert_eq!(
            finalize_sentence("що ти робиш", SentenceCategory::Question).as_deref(),
            Some("Що ти робиш?")
        );
        assert_eq!(
            finalize_sentence("закрий двері.", SentenceCategory::Command).as_deref(),
            Some("Закрий двері!")
        );
        assert_eq!(
            finalize_sentence("ми прийшли так,", SentenceCategory::Statement).as_deref(),
            Some("Ми прийшли так.")
        );
    }

    #[test]
    fn test_finalize_punctuation_only() {
        assert_eq!(finalize_sentence(",", SentenceCategory::Statement), None);
        assert_eq!(finalize_sentence("", SentenceCategory::Question), None);
    }

    #[test]
    fn test_cleanup_space_before_marks() {
        assert_eq!(final_cleanup("Привіт , світ ."), "Привіт, світ.");
    }

    #[test]
    fn test_cleanup_collapses_mark_runs() {
        assert_eq!(final_cleanup("Так,. ні!?"), "Так, ні!");
        assert_eq!(final_cleanup("Ну:; добре."), "Ну: добре.");
    }

    #[test]
    fn test_cleanup_comma_spacing() {
        assert_eq!(final_cleanup("Отже,ми тут,   так."), "Отже, ми тут, так.");
    }

    #[test]
    fn test_cleanup_is_fixed_point() {
        let once = final_cleanup("  Отже ,ми  тут ,, так .  Що? ");
        assert_eq!(once, "Отже, ми тут, так. Що?");
        assert_eq!(final_cleanup(&once), once);
    }

    #[test]
    fn test_cleanup_empty() {
        assert_eq!(final_cleanup(""), "");
    }
}
