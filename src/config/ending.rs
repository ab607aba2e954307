//! Sentence endings and the yield that hands the floor to the next sign.
//!
//! Endings are resolved once at load time for every sign type, so that the
//! "following X" templates can pick the block matching whichever sign was
//! emitted last.

use super::file::EndingFile;
use crate::sign::SignType;

const INTERROGATIVE_END_MARKER: &str = "?";
const STATEMENT_END_MARKER: &str = ".";
const INTERRUPT_MARKER: &str = " --";
const YIELD_MARKER: &str = "\n";

/// How the previous sentence finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Interrogative,
    Statement,
    Interrupt,
}

/// A fully resolved set of ending markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endings {
    pub interrogative: String,
    pub statement: String,
    pub interrupt: String,
    pub yield_marker: String,
}

impl Default for Endings {
    fn default() -> Self {
        Self {
            interrogative: INTERROGATIVE_END_MARKER.to_string(),
            statement: STATEMENT_END_MARKER.to_string(),
            interrupt: INTERRUPT_MARKER.to_string(),
            yield_marker: YIELD_MARKER.to_string(),
        }
    }
}

impl Endings {
    /// Fill the gaps in `overrides` from `self`.
    fn overlay(&self, overrides: &EndingFile) -> Self {
        Self {
            interrogative: pick(&overrides.interrogative, &self.interrogative),
            statement: pick(&overrides.statement, &self.statement),
            interrupt: pick(&overrides.interrupt, &self.interrupt),
            yield_marker: pick(&overrides.yield_marker, &self.yield_marker),
        }
    }

    pub fn end(&self, ending: Ending) -> &str {
        match ending {
            Ending::Interrogative => &self.interrogative,
            Ending::Statement => &self.statement,
            Ending::Interrupt => &self.interrupt,
        }
    }

    /// The ending marker followed by the yield marker.
    pub fn yielding(&self, ending: Ending) -> String {
        format!("{}{}", self.end(ending), self.yield_marker)
    }
}

fn pick(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}

/// Endings per sign type, falling back to the shared block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SentenceEndings {
    shared: Endings,
    question: Endings,
    answer: Endings,
    speaker: Endings,
}

impl SentenceEndings {
    pub fn resolve(
        shared: &EndingFile,
        question: &EndingFile,
        answer: &EndingFile,
        speaker: &EndingFile,
    ) -> Self {
        let shared = Endings::default().overlay(shared);
        Self {
            question: shared.overlay(question),
            answer: shared.overlay(answer),
            speaker: shared.overlay(speaker),
            shared,
        }
    }

    pub fn for_sign(&self, current_sign_type: Option<SignType>) -> &Endings {
        match current_sign_type {
            None => &self.shared,
            Some(SignType::Question) => &self.question,
            Some(SignType::Answer) => &self.answer,
            Some(SignType::Speaker) => &self.speaker,
        }
    }

    /// Markers that close the sentence before a sign, across every block.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        [&self.shared, &self.question, &self.answer, &self.speaker]
            .into_iter()
            .flat_map(|endings| {
                [
                    endings.interrogative.as_str(),
                    endings.statement.as_str(),
                    endings.interrupt.as_str(),
                ]
            })
            .filter(|marker| !marker.is_empty())
    }
}
