//! Punctuation, sentence boundaries and capitalization for unpunctuated
//! Ukrainian speech-to-text output.
//!
//! ```
//! use punctuation_engine::PunctuationProcessor;
//!
//! let engine = PunctuationProcessor::new();
//! assert_eq!(engine.process_text("отже ми закінчили"), "Отже, ми закінчили.");
//! ```

pub mod config;
pub mod lexicon;
pub mod post_processing;

pub use config::{load_config, Config, InputFormat, PipelineConfig};
pub use lexicon::{LexicalClass, Lexicon};
pub use post_processing::{
    analyze_with_config, improve_ukrainian_text, Pipeline, PunctuationProcessor, SentenceCategory,
    SentenceReport, TextProcessor,
};
