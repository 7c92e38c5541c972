use super::classify::{Classifier, SentenceCategory};
use super::commas::CommaInserter;
use super::finalize::{final_cleanup, finalize_sentence};
use super::normalize::normalize;
use super::segment::segment;
use super::TextProcessor;
use crate::lexicon::Lexicon;
use anyhow::Result;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// What happened to one sentence candidate.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    /// Candidate as produced by the segmenter.
    pub candidate: String,
    pub category: SentenceCategory,
    /// Name of the classifier rule that fired, `None` for the statement default.
    pub rule: Option<&'static str>,
    /// Finalized sentence before the joint cleanup pass.
    pub sentence: String,
}

/// Rule-based punctuation and capitalization for Ukrainian transcriptions.
///
/// Runs normalize → segment → (classify, insert commas, finalize) per
/// sentence → join → cleanup. Lookup tables are built in [`new`](Self::new)
/// and never mutated, so one instance can be shared across threads.
pub struct PunctuationProcessor {
    classifier: Classifier,
    commas: CommaInserter,
}

impl PunctuationProcessor {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
            commas: CommaInserter::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.commas.lexicon()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Punctuate a whole transcription.
    ///
    /// Empty or whitespace-only input is returned as is.
    pub fn process_text(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        debug!("Punctuating: '{}'", text);

        let joined = self
            .reports(text)
            .into_iter()
            .map(|report| report.sentence)
            .collect::<Vec<_>>()
            .join(" ");
        let result = final_cleanup(&joined);

        debug!("Punctuated: '{}'", result);
        result
    }

    /// Per-sentence breakdown of what [`process_text`](Self::process_text) does.
    pub fn analyze(&self, text: &str) -> Vec<SentenceReport> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.reports(text)
    }

    fn reports(&self, text: &str) -> Vec<SentenceReport> {
        let normalized = normalize(text);
        segment(&normalized)
            .filter_map(|candidate| self.process_sentence(candidate))
            .collect()
    }

    fn process_sentence(&self, candidate: &str) -> Option<SentenceReport> {
        let rule = self.classifier.matching_rule(candidate);
        let category = rule
            .map(|rule| rule.category)
            .unwrap_or(SentenceCategory::Statement);

        let with_commas = self.commas.insert_commas(candidate);
        let sentence = finalize_sentence(&with_commas, category)?;

        trace!(
            "Sentence '{}' -> {} ({})",
            candidate,
            category,
            rule.map_or("default", |rule| rule.name)
        );

        Some(SentenceReport {
            candidate: candidate.to_string(),
            category,
            rule: rule.map(|rule| rule.name),
            sentence,
        })
    }
}

impl Default for PunctuationProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor for PunctuationProcessor {
    fn process(&self, text: &str) -> Result<String> {
        Ok(self.process_text(text))
    }
}

/// Punctuate with a process-wide engine built on first use.
pub fn improve_ukrainian_text(text: &str) -> String {
    static ENGINE: OnceLock<PunctuationProcessor> = OnceLock::new();
    ENGINE.get_or_init(PunctuationProcessor::new).process_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text(""), "");
    }

    #[test]
    fn test_whitespace_only_returned_unchanged() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("  \n\t "), "  \n\t ");
    }

    #[test]
    fn test_question() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("що ти робиш"), "Що ти робиш?");
    }

    #[test]
    fn test_exclamation() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("ура ми перемогли"), "Ура ми перемогли!");
    }

    #[test]
    fn test_command() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("закрий двері"), "Закрий двері!");
    }

    #[test]
    fn test_statement() {
        let processor = PunctuationProcessor::new();
        assert_eq!(
            processor.process_text("сьогодні гарна погода"),
            "Сьогодні гарна погода."
        );
    }

    #[test]
    fn test_comma_after() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("отже ми закінчили"), "Отже, ми закінчили.");
    }

    #[test]
    fn test_multiple_sentences() {
        let processor = PunctuationProcessor::new();
        assert_eq!(
            processor.process_text("сьогодні гарна погода. закрий двері?? що ти робиш"),
            "Сьогодні гарна погода. Закрий двері! Що ти робиш?"
        );
    }

    #[test]
    fn test_trailing_comma_word_keeps_terminal_mark() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("ми прийшли так"), "Ми прийшли так.");
    }

    #[test]
    fn test_only_punctuation() {
        let processor = PunctuationProcessor::new();
        assert_eq!(processor.process_text("...!?"), "");
        assert_eq!(processor.process_text(",,;"), "");
    }

    #[test]
    fn test_analyze_reports_rules() {
        let processor = PunctuationProcessor::new();
        let reports = processor.analyze("ой болить. сьогодні тепло");

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].candidate, "ой болить");
        assert_eq!(reports[0].category, SentenceCategory::Exclamation);
        assert_eq!(reports[0].rule, Some("exclamation.interjection"));
        assert_eq!(reports[0].sentence, "Ой болить!");
        assert_eq!(reports[1].category, SentenceCategory::Statement);
        assert_eq!(reports[1].rule, None);
    }

    #[test]
    fn test_analyze_blank() {
        let processor = PunctuationProcessor::new();
        assert!(processor.analyze("   ").is_empty());
    }

    #[test]
    fn test_as_text_processor() {
        let processor: Box<dyn TextProcessor> = Box::new(PunctuationProcessor::new());
        assert_eq!(processor.process("закрий двері").unwrap(), "Закрий двері!");
    }

    #[test]
    fn test_improve_ukrainian_text() {
        assert_eq!(improve_ukrainian_text("що ти робиш"), "Що ти робиш?");
        assert_eq!(improve_ukrainian_text(""), "");
    }
}
