use crate::lexicon::{bare_form, Lexicon};

/// Words that mark a sentence as a question when it opens with one.
const QUESTION_STARTERS: &[&str] = &[
    "що", "хто", "де", "коли", "чому", "як", "чи", "куди", "звідки", "скільки",
    "який", "яка", "яке", "які",
];

/// Question heuristic used only to suppress the comma before "що".
///
/// True when the first token is an interrogative starter or the bare token
/// "чи" appears anywhere. This is deliberately separate from the
/// [`Classifier`](super::Classifier) and can disagree with it.
pub fn is_question_start(sentence: &str) -> bool {
    let mut tokens = sentence.split_whitespace().map(bare_form);

    match tokens.next() {
        None => false,
        Some(first) if QUESTION_STARTERS.contains(&first.as_str()) => true,
        Some(_) => tokens.any(|token| token == "чи"),
    }
}

fn append_comma(token: &mut String) {
    if !token.ends_with(',') {
        token.push(',');
    }
}

/// Single left-to-right comma pass over one sentence candidate.
///
/// Per token, first matching rule wins:
/// 1. comma-after word: comma after the token
/// 2. conjunction (not first): comma after the previously emitted token,
///    except before "що" in a sentence that [`is_question_start`]
/// 3. introductory phrase start or marker (not first): comma after the token
pub struct CommaInserter {
    lexicon: Lexicon,
}

impl CommaInserter {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn insert_commas(&self, sentence: &str) -> String {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        if tokens.len() <= 1 {
            return sentence.to_string();
        }

        let mut emitted: Vec<String> = Vec::with_capacity(tokens.len());
        let mut question_start = None;

        for (i, &token) in tokens.iter().enumerate() {
            let word = bare_form(token);
            let mut current = token.to_string();

            if self.lexicon.takes_comma_after(&word) {
                append_comma(&mut current);
            } else if i > 0 && self.lexicon.takes_comma_before(&word) {
                let suppressed = word == "що"
                    && *question_start.get_or_insert_with(|| is_question_start(sentence));
                if !suppressed {
                    if let Some(previous) = emitted.last_mut() {
                        append_comma(previous);
                    }
                }
            } else if i > 0
                && (self.lexicon.starts_introductory_phrase(&tokens, i)
                    || self.lexicon.is_introductory_marker(&word))
            {
                append_comma(&mut current);
            }

            emitted.push(current);
        }

        emitted.join(" ")
    }
}

impl Default for CommaInserter {
    fn default() -> Self {
        Self::new()
    }
}
