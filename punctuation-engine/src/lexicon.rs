//! Fixed Ukrainian word lists driving comma placement and sentence typing.
//!
//! Every entry is lowercase and trimmed. Lookups normalize the query with
//! [`bare_form`] first, so membership is case-insensitive and ignores
//! punctuation glued to the token.

use std::collections::HashSet;
use std::fmt;

/// Characters stripped from both ends of a token to get its bare form.
pub const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Words after which a comma is conventionally written.
const COMMA_AFTER: &[&str] = &[
    "так", "ні", "можливо", "звичайно", "звісно", "авжеж", "безумовно",
    "нарешті", "наприклад", "тобто", "отже", "однак", "проте", "зате",
    "по-перше", "по-друге", "по-третє", "по-четверте", "по-п'яте",
    "по-шосте", "по-сьоме", "по-восьме", "по-дев'яте", "по-десяте",
    // Vocatives
    "друже", "брате", "сестро", "мамо", "тату", "бабусю", "дідусю",
    "дівчино", "хлопче", "сину", "дочко", "друзі", "колеги",
    "на жаль", "на щастя", "на диво", "на превеликий жаль",
    "чесно кажучи", "правду кажучи", "взагалі-то", "власне кажучи",
    "між іншим", "до речі", "до слова", "до того ж", "крім того",
    "більше того", "тим більше", "тим паче", "особливо", "головне",
    "найголовніше", "насамперед", "спочатку", "потім", "далі",
    "врешті-решт", "в кінці кінців", "в підсумку",
    "коротше кажучи", "одним словом", "словом", "значить",
    "виходить", "от і все", "ось і все",
];

/// Conjunctions and relative pronouns that take a comma before them.
const COMMA_BEFORE_CONJUNCTION: &[&str] = &[
    "але", "проте", "однак", "зате", "а", "і", "або", "чи",
    "якщо", "якби", "хоч", "хоча", "незважаючи на те що",
    "попри те що", "замість того щоб", "замість того аби",
    "щоб", "аби", "поки", "доки", "коли", "як", "як тільки",
    "щойно", "лише", "тільки", "лишень", "тільки що",
    "тому що", "бо", "оскільки", "адже", "аджеж",
    "що", "який", "яка", "яке", "які", "хто", "де",
    "куди", "звідки", "чому", "скільки",
];

const QUESTION_WORDS: &[&str] = &[
    "що", "хто", "де", "коли", "чому", "як", "чи", "куди", "звідки",
    "скільки", "який", "яка", "яке", "які", "чий", "чия", "чиє", "чиї",
    "якщо", "якби", "чи не", "чи ж", "чи то", "чи може", "чи можливо",
    "чи правда", "чи дійсно", "чи справді", "чи точно", "чи точно що",
];

const EXCLAMATION_WORDS: &[&str] = &[
    "вау", "о", "ах", "ой", "ух", "фух", "боже", "господи", "чорт",
    "блин", "нехай", "хай", "давай", "давайте", "стоп", "стій",
    "зачекай", "почекай", "тримай", "лови", "біжи", "лети",
    "ура", "браво", "молодець", "чудово", "відмінно", "супер",
    "фантастично", "неймовірно", "дивовижно", "прекрасно",
];

/// Closing-phrase markers. Not consulted by any rule yet.
const ENDING_WORDS: &[&str] = &[
    "все", "ось і все", "от і все", "от так", "ось так", "так ось",
    "от і все тут", "ось і все тут", "більше нічого", "нічого більше",
    "все це", "це все", "все тут", "тут все", "все добре", "добре все",
];

/// Multi-word discourse phrases matched as contiguous token windows.
const INTRODUCTORY_PHRASES: &[&str] = &[
    "чесно кажучи", "правду кажучи", "взагалі то", "власне кажучи",
    "між іншим", "до речі", "до слова", "до того ж", "крім того",
    "більше того", "тим більше", "тим паче", "на жаль", "на щастя",
    "на диво", "на превеликий жаль", "коротше кажучи", "одним словом",
    "в кінці кінців", "в підсумку", "виходить", "отже", "от і все",
    "ось і все", "незважаючи на те що", "попри те що", "замість того щоб",
];

/// Strip glued punctuation and lowercase a token.
pub fn bare_form(token: &str) -> String {
    token.trim_matches(TOKEN_PUNCTUATION).to_lowercase()
}

/// Which fixed table a word or phrase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalClass {
    CommaAfter,
    CommaBeforeConjunction,
    QuestionWord,
    ExclamationWord,
    EndingWord,
    IntroductoryPhrase,
    /// First word of some introductory phrase.
    IntroductoryMarker,
}

impl LexicalClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalClass::CommaAfter => "comma-after",
            LexicalClass::CommaBeforeConjunction => "comma-before-conjunction",
            LexicalClass::QuestionWord => "question-word",
            LexicalClass::ExclamationWord => "exclamation-word",
            LexicalClass::EndingWord => "ending-word",
            LexicalClass::IntroductoryPhrase => "introductory-phrase",
            LexicalClass::IntroductoryMarker => "introductory-marker",
        }
    }
}

impl fmt::Display for LexicalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only lexical tables, built once per engine.
pub struct Lexicon {
    comma_after: HashSet<&'static str>,
    comma_before_conjunction: HashSet<&'static str>,
    question_words: HashSet<&'static str>,
    exclamation_words: HashSet<&'static str>,
    ending_words: HashSet<&'static str>,
    introductory_phrases: Vec<Vec<&'static str>>,
    introductory_markers: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        let introductory_phrases: Vec<Vec<&'static str>> = INTRODUCTORY_PHRASES
            .iter()
            .map(|phrase| phrase.split_whitespace().collect())
            .collect();

        let introductory_markers = introductory_phrases
            .iter()
            .filter_map(|words| words.first().copied())
            .collect();

        Self {
            comma_after: COMMA_AFTER.iter().copied().collect(),
            comma_before_conjunction: COMMA_BEFORE_CONJUNCTION.iter().copied().collect(),
            question_words: QUESTION_WORDS.iter().copied().collect(),
            exclamation_words: EXCLAMATION_WORDS.iter().copied().collect(),
            ending_words: ENDING_WORDS.iter().copied().collect(),
            introductory_phrases,
            introductory_markers,
        }
    }

    /// `word` must already be in bare form.
    pub fn takes_comma_after(&self, word: &str) -> bool {
        self.comma_after.contains(word)
    }

    /// `word` must already be in bare form.
    pub fn takes_comma_before(&self, word: &str) -> bool {
        self.comma_before_conjunction.contains(word)
    }

    /// `word` must already be in bare form.
    pub fn is_introductory_marker(&self, word: &str) -> bool {
        self.introductory_markers.contains(word)
    }

    /// Whether an introductory phrase starts at `tokens[index]`.
    ///
    /// Each phrase is compared word by word against the lowercased token
    /// window of the same length. Windows running past the end never match.
    pub fn starts_introductory_phrase(&self, tokens: &[&str], index: usize) -> bool {
        self.introductory_phrases.iter().any(|phrase| {
            let end = index + phrase.len();
            end <= tokens.len()
                && tokens[index..end]
                    .iter()
                    .zip(phrase)
                    .all(|(token, word)| token.to_lowercase() == *word)
        })
    }

    /// Every table the word or phrase belongs to.
    ///
    /// The query is trimmed of glued punctuation, lowercased and has its
    /// inner whitespace collapsed before lookup.
    pub fn classes_of(&self, query: &str) -> Vec<LexicalClass> {
        let key = query
            .split_whitespace()
            .map(bare_form)
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let key = key.as_str();

        let mut classes = Vec::new();
        if self.comma_after.contains(key) {
            classes.push(LexicalClass::CommaAfter);
        }
        if self.comma_before_conjunction.contains(key) {
            classes.push(LexicalClass::CommaBeforeConjunction);
        }
        if self.question_words.contains(key) {
            classes.push(LexicalClass::QuestionWord);
        }
        if self.exclamation_words.contains(key) {
            classes.push(LexicalClass::ExclamationWord);
        }
        if self.ending_words.contains(key) {
            classes.push(LexicalClass::EndingWord);
        }
        if INTRODUCTORY_PHRASES.contains(&key) {
            classes.push(LexicalClass::IntroductoryPhrase);
        }
        if self.introductory_markers.contains(key) {
            classes.push(LexicalClass::IntroductoryMarker);
        }
        classes
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
