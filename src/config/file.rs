//! Shape of the `q_and_a.json` override file. Every field is optional; the
//! loader fills in anything missing.

use serde::Deserialize;

use crate::speaker::SpeakerType;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub question: SignSection,
    pub answer: SignSection,
    pub byline: BylineSection,
    pub speaker: SpeakerSection,
    /// Endings used when no sign-specific override applies.
    pub ending: EndingFile,
    pub sentence_space: Option<String>,
    pub set_name_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SignSection {
    pub marker: MarkerFile,
    pub ending: EndingFile,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BylineSection {
    pub marker: MarkerFile,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarkerFile {
    pub pre: Option<String>,
    pub text: Option<String>,
    pub post: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndingFile {
    pub interrogative: Option<String>,
    pub statement: Option<String>,
    pub interrupt: Option<String>,
    #[serde(rename = "yield")]
    pub yield_marker: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakerSection {
    pub formatting: SpeakerFormattingFile,
    pub names: SpeakerNamesFile,
    pub ending: EndingFile,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakerFormattingFile {
    pub pre: Option<String>,
    pub post: Option<String>,
    pub upcase: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakerNamesFile {
    pub defense_1: Option<String>,
    pub defense_2: Option<String>,
    pub plaintiff_1: Option<String>,
    pub plaintiff_2: Option<String>,
    pub bailiff: Option<String>,
    pub clerk: Option<String>,
    pub court: Option<String>,
    pub court_reporter: Option<String>,
    pub videographer: Option<String>,
    pub witness: Option<String>,
}

impl SpeakerNamesFile {
    pub fn get(&self, speaker_type: SpeakerType) -> Option<&str> {
        let name = match speaker_type {
            SpeakerType::Defense1 => &self.defense_1,
            SpeakerType::Defense2 => &self.defense_2,
            SpeakerType::Plaintiff1 => &self.plaintiff_1,
            SpeakerType::Plaintiff2 => &self.plaintiff_2,
            SpeakerType::Bailiff => &self.bailiff,
            SpeakerType::Clerk => &self.clerk,
            SpeakerType::Court => &self.court,
            SpeakerType::CourtReporter => &self.court_reporter,
            SpeakerType::Videographer => &self.videographer,
            SpeakerType::Witness => &self.witness,
        };
        name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_all_defaults() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn test_nested_fields_deserialize() {
        let file: ConfigFile = serde_json::from_str(
            r#"{
                "question": { "marker": { "text": "QUESTION" } },
                "answer": { "ending": { "yield": "\n\n" } },
                "speaker": {
                    "formatting": { "upcase": false },
                    "names": { "plaintiff_1": "Ms. Jones" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(file.question.marker.text.as_deref(), Some("QUESTION"));
        assert_eq!(file.question.marker.pre, None);
        assert_eq!(file.answer.ending.yield_marker.as_deref(), Some("\n\n"));
        assert_eq!(file.speaker.formatting.upcase, Some(false));
        assert_eq!(
            file.speaker.names.get(SpeakerType::Plaintiff1),
            Some("Ms. Jones")
        );
        assert_eq!(file.speaker.names.get(SpeakerType::Witness), None);
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let result = serde_json::from_str::<ConfigFile>(r#"{ "sentence_space": 3 }"#);
        assert!(result.is_err());
    }
}
