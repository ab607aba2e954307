//! The `set_name_prompt` template shown while a speaker name is captured.

use regex::RegexSet;

use crate::error::{QAndAError, Result};
use crate::speaker::SpeakerType;

const DEFAULT_SET_NAME_PROMPT: &str = "[Set {speaker_type} ({current_speaker_name}) =>] ";
const SPEAKER_TYPE_PLACEHOLDER: &str = "{speaker_type}";
const CURRENT_SPEAKER_NAME_PLACEHOLDER: &str = "{current_speaker_name}";

/// Prompt shown while a speaker name is being captured.
///
/// The template must mention both placeholders, otherwise the user would not
/// be able to tell which speaker they are renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNamePrompt(String);

impl Default for SetNamePrompt {
    fn default() -> Self {
        Self(DEFAULT_SET_NAME_PROMPT.to_string())
    }
}

impl SetNamePrompt {
    pub fn parse(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let placeholders = RegexSet::new([
            regex::escape(SPEAKER_TYPE_PLACEHOLDER),
            regex::escape(CURRENT_SPEAKER_NAME_PLACEHOLDER),
        ])
        .map_err(|e| QAndAError::validation(e.to_string()))?;

        if !placeholders.matches(&template).matched_all() {
            return Err(QAndAError::validation(
                "Both {speaker_type} and {current_speaker_name} must be present in the set_name_prompt.",
            ));
        }

        Ok(Self(template))
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    pub fn render(&self, speaker_type: SpeakerType, current_speaker_name: &str) -> String {
        self.0
            .replace(SPEAKER_TYPE_PLACEHOLDER, speaker_type.as_str())
            .replace(CURRENT_SPEAKER_NAME_PLACEHOLDER, current_speaker_name)
    }
}
