mod classify;
mod commas;
mod finalize;
mod normalize;
mod punctuation;
mod sanitize;
mod segment;

use crate::config::PipelineConfig;
use anyhow::Result;

pub use classify::{ClassificationRule, Classifier, Pattern, SentenceCategory};
pub use commas::{is_question_start, CommaInserter};
pub use finalize::{capitalize_first_letter, final_cleanup, finalize_sentence, strip_terminal_marks};
pub use normalize::normalize;
pub use punctuation::{improve_ukrainian_text, PunctuationProcessor, SentenceReport};
pub use sanitize::{SanitizationProcessor, SanitizationRules};
pub use segment::segment;

/// Trait for text post-processors.
///
/// Processors transform recognized text by cleaning it up, restoring
/// punctuation, or applying other transformations.
pub trait TextProcessor: Send + Sync {
    /// Process the input text and return the transformed result.
    fn process(&self, text: &str) -> Result<String>;
}

/// Pipeline that orchestrates multiple text processors.
///
/// Processors are applied in sequence, with each processor
/// receiving the output of the previous one.
pub struct Pipeline {
    processors: Vec<Box<dyn TextProcessor>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Add a processor to the pipeline.
    pub fn add_processor(&mut self, processor: Box<dyn TextProcessor>) {
        self.processors.push(processor);
    }

    /// Create a pipeline from configuration.
    ///
    /// Processors are applied in order: sanitize → punctuation.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut pipeline = Self::new();

        // Recognizer output may carry control or zero-width characters
        if config.sanitize {
            pipeline.add_processor(Box::new(SanitizationProcessor::new()));
        }

        if config.punctuation {
            pipeline.add_processor(Box::new(PunctuationProcessor::new()));
        }

        pipeline
    }

    /// Process text through all processors in the pipeline.
    ///
    /// Returns the original text if no processors are enabled.
    pub fn process(&self, text: &str) -> Result<String> {
        let mut result = text.to_string();

        for processor in &self.processors {
            result = processor.process(&result)?;
        }

        Ok(result)
    }

    /// Check if the pipeline has any processors.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

/// Per-sentence reports for `text` as the configured pipeline sees it.
///
/// The stages ahead of punctuation run first. Nothing is reported when
/// punctuation is disabled, matching a pipeline that never punctuates.
pub fn analyze_with_config(config: &PipelineConfig, text: &str) -> Result<Vec<SentenceReport>> {
    if !config.punctuation {
        return Ok(Vec::new());
    }

    let prepared = Pipeline::from_config(&PipelineConfig {
        punctuation: false,
        ..config.clone()
    })
    .process(text)?;

    Ok(PunctuationProcessor::new().analyze(&prepared))
}
