use regex::Regex;
use std::sync::OnceLock;

fn re_sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence break pattern"))
}

/// Split text into sentence candidates on runs of `.`, `!`, `?`.
///
/// The terminators themselves are dropped; the finalizer derives a fresh
/// one per sentence. Candidates come out trimmed, non-empty and in their
/// original order.
pub fn segment(text: &str) -> impl Iterator<Item = &str> {
    re_sentence_break()
        .split(text)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_without_marks() {
        let sentences: Vec<_> = segment("ми закінчили роботу").collect();
        assert_eq!(sentences, vec!["ми закінчили роботу"]);
    }

    #[test]
    fn test_splits_and_preserves_order() {
        let sentences: Vec<_> = segment("перше. друге?! третє").collect();
        assert_eq!(sentences, vec!["перше", "друге", "третє"]);
    }

    #[test]
    fn test_drops_empty_fragments() {
        let sentences: Vec<_> = segment(". .. ! перше .  . ").collect();
        assert_eq!(sentences, vec!["перше"]);
    }

    #[test]
    fn test_only_punctuation() {
        assert_eq!(segment("...!?").count(), 0);
        assert_eq!(segment("").count(), 0);
    }

    #[test]
    fn test_keeps_commas_inside_candidate() {
        let sentences: Vec<_> = segment("отже, ми тут. ").collect();
        assert_eq!(sentences, vec!["отже, ми тут"]);
    }
}
