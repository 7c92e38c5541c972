//! Cleanup of raw recognizer output before punctuation.
//!
//! Recognizers and chat clients occasionally leak control characters,
//! zero-width marks and typographic apostrophes into the text. The lexicon
//! spells apostrophes as ASCII `'`, so "по-п’яте" must become "по-п'яте"
//! to be found.

use super::TextProcessor;
use anyhow::Result;
use tracing::debug;

/// Which cleanup steps run.
#[derive(Debug, Clone)]
pub struct SanitizationRules {
    /// Strip control characters (0x00-0x1F, 0x7F) except whitespace
    pub strip_control_chars: bool,
    /// Strip zero-width, bidi and other invisible format characters
    pub strip_invisible: bool,
    /// Map typographic apostrophes to ASCII `'`
    pub unify_apostrophes: bool,
}

impl Default for SanitizationRules {
    fn default() -> Self {
        Self {
            strip_control_chars: true,
            strip_invisible: true,
            unify_apostrophes: true,
        }
    }
}

/// Processor that normalizes character-level noise in transcriptions
pub struct SanitizationProcessor {
    rules: SanitizationRules,
}

impl SanitizationProcessor {
    /// All cleanup steps enabled
    pub fn new() -> Self {
        Self::with_rules(SanitizationRules::default())
    }

    pub fn with_rules(rules: SanitizationRules) -> Self {
        Self { rules }
    }
}

impl Default for SanitizationProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor for SanitizationProcessor {
    fn process(&self, text: &str) -> Result<String> {
        let mut removed = 0usize;

        let result: String = text
            .chars()
            .filter(|&ch| {
                let drop = (self.rules.strip_control_chars && is_stray_control(ch))
                    || (self.rules.strip_invisible && is_invisible(ch));
                if drop {
                    removed += 1;
                }
                !drop
            })
            .map(|ch| {
                if self.rules.unify_apostrophes && is_apostrophe_variant(ch) {
                    '\''
                } else {
                    ch
                }
            })
            .collect();

        if removed > 0 {
            debug!("Sanitized transcription: removed {} characters", removed);
        }

        Ok(result)
    }
}

/// Control characters other than the whitespace the normalizer collapses
fn is_stray_control(ch: char) -> bool {
    ch.is_control() && !ch.is_whitespace()
}

fn is_invisible(ch: char) -> bool {
    matches!(
        ch,
        // Zero-width space/joiners, word joiner, BOM, soft hyphen
        '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{00AD}'
        // Bidirectional formatting
        | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{061C}'
        | '\u{200E}' | '\u{200F}'
        // Variation selectors, Mongolian vowel separator
        | '\u{FE00}'..='\u{FE0F}' | '\u{180E}'
    )
}

fn is_apostrophe_variant(ch: char) -> bool {
    // right single quote, modifier letter apostrophe, left single quote
    matches!(ch, '\u{2019}' | '\u{02BC}' | '\u{2018}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let processor = SanitizationProcessor::new();
        assert_eq!(processor.process("").unwrap(), "");
    }

    #[test]
    fn test_strip_control_chars() {
        let processor = SanitizationProcessor::new();
        assert_eq!(processor.process("при\x00віт").unwrap(), "привіт");
        assert_eq!(processor.process("при\x07віт\x7F").unwrap(), "привіт");
    }

    #[test]
    fn test_whitespace_passes_through() {
        let processor = SanitizationProcessor::new();
        assert_eq!(processor.process("так\tні\nможе\r\n").unwrap(), "так\tні\nможе\r\n");
    }

    #[test]
    fn test_strip_invisible() {
        let processor = SanitizationProcessor::new();
        let marks = [
            '\u{200B}', // zero-width space
            '\u{200D}', // zero-width joiner
            '\u{FEFF}', // BOM
            '\u{00AD}', // soft hyphen
            '\u{202E}', // RLO
            '\u{2066}', // LRI
            '\u{200E}', // LRM
            '\u{FE0F}', // variation selector
        ];

        for mark in marks {
            let input = format!("що{}це", mark);
            assert_eq!(processor.process(&input).unwrap(), "щоце", "Failed to strip {:?}", mark);
        }
    }

    #[test]
    fn test_unify_apostrophes() {
        let processor = SanitizationProcessor::new();
        assert_eq!(processor.process("по-п’яте").unwrap(), "по-п'яте");
        assert_eq!(processor.process("мʼята").unwrap(), "м'ята");
    }

    #[test]
    fn test_rules_can_be_disabled() {
        let processor = SanitizationProcessor::with_rules(SanitizationRules {
            strip_control_chars: false,
            strip_invisible: false,
            unify_apostrophes: false,
        });
        let input = "п’ять\u{200B}\x07";
        assert_eq!(processor.process(input).unwrap(), input);
    }

    #[test]
    fn test_cyrillic_and_emoji_passthrough() {
        let processor = SanitizationProcessor::new();
        let input = "Ґанок, їжак і 👋 «лапки»";
        assert_eq!(processor.process(input).unwrap(), input);
    }
}
