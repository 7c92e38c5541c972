//! Sentence type inference.
//!
//! Classification walks an ordered list of rules and stops at the first one
//! whose pattern matches. Questions are checked before exclamations, and
//! exclamations before commands; anything left is a statement.

use serde::Serialize;
use std::fmt;

const INTERROGATIVES: &[&str] = &[
    "що", "хто", "де", "коли", "чому", "як", "чи", "куди", "звідки", "скільки",
    "який", "яка", "яке", "які", "чий", "чия", "чиє", "чиї",
];
const CHY: &[&str] = &["чи"];
const CHY_FOLLOWERS: &[&str] = &[
    "не", "ж", "то", "може", "правда", "дійсно", "справді", "точно",
];
const CONDITIONALS: &[&str] = &["якщо", "якби"];
const EPISTEMIC: &[&str] = &["можливо", "може", "напевно", "напевне", "звичайно", "звісно"];
const DEICTIC: &[&str] = &["це", "так", "воно"];

const INTERJECTIONS: &[&str] = &[
    "вау", "о", "ах", "ой", "ух", "фух", "боже", "господи", "чорт", "блин",
];
const PRAISE: &[&str] = &[
    "ура", "браво", "молодець", "чудово", "відмінно", "супер",
    "фантастично", "неймовірно", "дивовижно", "прекрасно",
];
const PERMISSIVE: &[&str] = &["нехай", "хай", "давай", "давайте"];
const HALT: &[&str] = &[
    "стоп", "стій", "зачекай", "почекай", "тримай", "лови", "біжи", "лети",
];

const ACTION_VERBS: &[&str] = &[
    "зроби", "зробіть", "напиши", "напишіть", "покажи", "покажіть",
    "дай", "дайте", "принеси", "принесіть",
];
const MOTION_VERBS: &[&str] = &[
    "йди", "йдіть", "іди", "ідіть", "біжи", "біжіть", "лети", "летіть", "їдь", "їдьте",
];
const TOGGLE_VERBS: &[&str] = &[
    "закрий", "закрийте", "відкрий", "відкрийте", "вимкни", "вимкніть",
    "увімкни", "увімкніть",
];

/// Closed set of sentence types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceCategory {
    Question,
    Exclamation,
    Command,
    Statement,
}

impl SentenceCategory {
    /// The mark a finalized sentence of this type ends with.
    pub fn terminal_mark(self) -> char {
        match self {
            SentenceCategory::Question => '?',
            SentenceCategory::Exclamation | SentenceCategory::Command => '!',
            SentenceCategory::Statement => '.',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentenceCategory::Question => "question",
            SentenceCategory::Exclamation => "exclamation",
            SentenceCategory::Command => "command",
            SentenceCategory::Statement => "statement",
        }
    }
}

impl fmt::Display for SentenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of word characters inside the lowercased sentence.
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Split into whole words. Apostrophes, hyphens and punctuation separate words.
fn words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start = None;

    for (idx, ch) in text.char_indices() {
        match (is_word_char(ch), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                words.push(Word { text: &text[s..idx], start: s, end: idx });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(Word { text: &text[s..], start: s, end: text.len() });
    }

    words
}

/// What a rule looks for in the lowercased sentence.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Any whole word from the list.
    AnyWord(&'static [&'static str]),
    /// A word from `first` followed by a word from `second` with only
    /// whitespace between them.
    Sequence {
        first: &'static [&'static str],
        second: &'static [&'static str],
    },
    /// The sentence opens with a word from the list.
    Leading(&'static [&'static str]),
}

impl Pattern {
    fn matches(&self, text: &str, words: &[Word<'_>]) -> bool {
        match self {
            Pattern::AnyWord(list) => words.iter().any(|w| list.contains(&w.text)),
            Pattern::Sequence { first, second } => words.windows(2).any(|pair| {
                let gap = &text[pair[0].end..pair[1].start];
                first.contains(&pair[0].text)
                    && second.contains(&pair[1].text)
                    && gap.chars().all(char::is_whitespace)
            }),
            Pattern::Leading(list) => words.first().is_some_and(|w| list.contains(&w.text)),
        }
    }
}

/// One entry of the ordered rule table.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub category: SentenceCategory,
    pub pattern: Pattern,
}

impl ClassificationRule {
    const fn new(name: &'static str, category: SentenceCategory, pattern: Pattern) -> Self {
        Self { name, category, pattern }
    }

    /// Check the rule against a single sentence, independent of its position
    /// in the table.
    pub fn matches(&self, sentence: &str) -> bool {
        let lowered = sentence.to_lowercase();
        self.pattern.matches(&lowered, &words(&lowered))
    }
}

/// First-match-wins sentence classifier.
pub struct Classifier {
    rules: Vec<ClassificationRule>,
}

impl Classifier {
    pub fn new() -> Self {
        use SentenceCategory::*;

        let rules = vec![
            ClassificationRule::new("question.interrogative", Question, Pattern::AnyWord(INTERROGATIVES)),
            ClassificationRule::new(
                "question.chy-particle",
                Question,
                Pattern::Sequence { first: CHY, second: CHY_FOLLOWERS },
            ),
            ClassificationRule::new("question.conditional", Question, Pattern::Leading(CONDITIONALS)),
            ClassificationRule::new(
                "question.epistemic",
                Question,
                Pattern::Sequence { first: EPISTEMIC, second: DEICTIC },
            ),
            ClassificationRule::new("exclamation.interjection", Exclamation, Pattern::AnyWord(INTERJECTIONS)),
            ClassificationRule::new("exclamation.praise", Exclamation, Pattern::AnyWord(PRAISE)),
            ClassificationRule::new("exclamation.permissive", Exclamation, Pattern::AnyWord(PERMISSIVE)),
            ClassificationRule::new("exclamation.halt", Exclamation, Pattern::AnyWord(HALT)),
            ClassificationRule::new("command.action", Command, Pattern::AnyWord(ACTION_VERBS)),
            ClassificationRule::new("command.motion", Command, Pattern::AnyWord(MOTION_VERBS)),
            ClassificationRule::new("command.toggle", Command, Pattern::AnyWord(TOGGLE_VERBS)),
        ];

        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// The first rule matching the sentence, if any.
    pub fn matching_rule(&self, sentence: &str) -> Option<&ClassificationRule> {
        let lowered = sentence.to_lowercase();
        let words = words(&lowered);
        self.rules.iter().find(|rule| rule.pattern.matches(&lowered, &words))
    }

    pub fn classify(&self, sentence: &str) -> SentenceCategory {
        self.matching_rule(sentence)
            .map(|rule| rule.category)
            .unwrap_or(SentenceCategory::Statement)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
