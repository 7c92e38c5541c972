//! Input acquisition for the command line: argument, file or stdin, as plain
//! text or recognizer result JSON.

use anyhow::{Context, Result};
use punctuation_engine::InputFormat;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// One recognizer result object. Final results carry `text`, streaming
/// partial results carry `partial`.
#[derive(Debug, Deserialize)]
struct RecognizerResult {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    partial: Option<String>,
}

impl RecognizerResult {
    fn into_transcription(self) -> Option<String> {
        self.text
            .filter(|text| !text.trim().is_empty())
            .or(self.partial)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
    }
}

/// Take text from the argument, else the file, else stdin.
pub fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}

/// Pull the transcription out of raw input.
///
/// Recognizer JSON may hold several concatenated result objects (one per
/// utterance); their texts are joined with a space. Results without text
/// are skipped, so the outcome can be empty.
pub fn extract_transcription(raw: &str, format: InputFormat) -> Result<String> {
    match format {
        InputFormat::Plain => Ok(raw.to_string()),
        InputFormat::VoskJson => {
            let mut parts = Vec::new();
            for result in serde_json::Deserializer::from_str(raw).into_iter::<RecognizerResult>() {
                let result = result.context("Invalid recognizer JSON")?;
                parts.extend(result.into_transcription());
            }
            Ok(parts.join(" "))
        }
    }
}
