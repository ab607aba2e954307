//! Reads the `q_and_a.json` override file and munges it into the templates
//! the sign formatter works with.

mod ending;
mod file;
mod prompt;

pub use ending::{Ending, Endings, SentenceEndings};
pub use file::{
    BylineSection, ConfigFile, EndingFile, MarkerFile, SignSection, SpeakerFormattingFile,
    SpeakerNamesFile, SpeakerSection,
};
pub use prompt::SetNamePrompt;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::sign::SignType;
use crate::speaker::SpeakerType;

const QUESTION_MARKER: (&str, &str, &str) = ("\t", "Q", "\t");
const ANSWER_MARKER: (&str, &str, &str) = ("\t", "A", "\t");
const BYLINE_MARKER: (&str, &str, &str) = ("", "BY ", ":\n");

const SPEAKER_NAME_PRE_FORMATTING: &str = "\t";
const SPEAKER_NAME_POST_FORMATTING: &str = ":  ";
const SPEAKER_NAME_UPCASE_FORMATTING: bool = true;

const SENTENCE_SPACE: &str = " ";

/// Display names keyed by speaker type. The only part of the config that
/// changes after load.
pub type SpeakerNames = BTreeMap<SpeakerType, String>;

/// Application-wide sign templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    question_marker: String,
    answer_marker: String,
    byline: Marker,
    speaker: Marker,
    endings: SentenceEndings,
    sentence_space: String,
    set_name_prompt: SetNamePrompt,
    speaker_upcase: bool,
    pub speaker_names: SpeakerNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    pre: String,
    text: String,
    post: String,
}

impl Marker {
    fn resolve(file: &MarkerFile, defaults: (&str, &str, &str)) -> Self {
        let (pre, text, post) = defaults;
        Self {
            pre: file.pre.clone().unwrap_or_else(|| pre.to_string()),
            text: file.text.clone().unwrap_or_else(|| text.to_string()),
            post: file.post.clone().unwrap_or_else(|| post.to_string()),
        }
    }

    fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}{}", self.pre, self.text, inner, self.post)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::build(&ConfigFile::default(), SetNamePrompt::default())
    }
}

impl Config {
    /// Read the config file at `path`, falling back to defaults for anything
    /// it does not specify. A missing file means "all defaults".
    pub fn load(path: &Path) -> Result<Self> {
        let file = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str::<ConfigFile>(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Config file not found at {:?}, using defaults", path);
                ConfigFile::default()
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::from_file(&file)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Like [`Config::load`], but speaker names edited during the session
    /// win over whatever the file says.
    pub fn reload(path: &Path, current: &Config) -> Result<Self> {
        let mut config = Self::load(path)?;
        for (speaker_type, name) in &current.speaker_names {
            config.speaker_names.insert(*speaker_type, name.clone());
        }
        info!(
            "Reloaded config, keeping {} in-memory speaker names",
            current.speaker_names.len()
        );
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(content)?;
        Self::from_file(&file)
    }

    pub fn from_file(file: &ConfigFile) -> Result<Self> {
        let set_name_prompt = match &file.set_name_prompt {
            Some(template) => SetNamePrompt::parse(template.clone())?,
            None => SetNamePrompt::default(),
        };
        Ok(Self::build(file, set_name_prompt))
    }

    fn build(file: &ConfigFile, set_name_prompt: SetNamePrompt) -> Self {
        let formatting = &file.speaker.formatting;
        let speaker_upcase = formatting.upcase.unwrap_or(SPEAKER_NAME_UPCASE_FORMATTING);

        let speaker_names = SpeakerType::ALL
            .into_iter()
            .map(|speaker_type| {
                let name = file
                    .speaker
                    .names
                    .get(speaker_type)
                    .unwrap_or(speaker_type.default_name());
                let name = if speaker_upcase {
                    name.to_uppercase()
                } else {
                    name.to_string()
                };
                (speaker_type, name)
            })
            .collect();

        Self {
            question_marker: Marker::resolve(&file.question.marker, QUESTION_MARKER).wrap(""),
            answer_marker: Marker::resolve(&file.answer.marker, ANSWER_MARKER).wrap(""),
            byline: Marker::resolve(&file.byline.marker, BYLINE_MARKER),
            speaker: Marker {
                pre: formatting
                    .pre
                    .clone()
                    .unwrap_or_else(|| SPEAKER_NAME_PRE_FORMATTING.to_string()),
                text: String::new(),
                post: formatting
                    .post
                    .clone()
                    .unwrap_or_else(|| SPEAKER_NAME_POST_FORMATTING.to_string()),
            },
            endings: SentenceEndings::resolve(
                &file.ending,
                &file.question.ending,
                &file.answer.ending,
                &file.speaker.ending,
            ),
            sentence_space: file
                .sentence_space
                .clone()
                .unwrap_or_else(|| SENTENCE_SPACE.to_string()),
            set_name_prompt,
            speaker_upcase,
            speaker_names,
        }
    }

    fn yielding(&self, ending: Ending, current_sign_type: Option<SignType>) -> String {
        self.endings.for_sign(current_sign_type).yielding(ending)
    }

    /// The question marker on its own, e.g. `"\tQ\t"`.
    pub fn question(&self) -> &str {
        &self.question_marker
    }

    pub fn question_following(&self, ending: Ending, current_sign_type: Option<SignType>) -> String {
        self.yielding(ending, current_sign_type) + &self.question_marker
    }

    pub fn answer(&self) -> &str {
        &self.answer_marker
    }

    pub fn answer_following(&self, ending: Ending, current_sign_type: Option<SignType>) -> String {
        self.yielding(ending, current_sign_type) + &self.answer_marker
    }

    /// A byline always finishes by opening a question.
    pub fn byline_for(&self, speaker_name: &str) -> String {
        self.byline.wrap(speaker_name) + &self.question_marker
    }

    pub fn byline_following_for(
        &self,
        ending: Ending,
        current_sign_type: Option<SignType>,
        speaker_name: &str,
    ) -> String {
        self.yielding(ending, current_sign_type) + &self.byline_for(speaker_name)
    }

    pub fn speaker_for(&self, speaker_name: &str) -> String {
        self.speaker.wrap(speaker_name)
    }

    pub fn speaker_following_for(
        &self,
        ending: Ending,
        current_sign_type: Option<SignType>,
        speaker_name: &str,
    ) -> String {
        self.yielding(ending, current_sign_type) + &self.speaker_for(speaker_name)
    }

    /// Closes a sentence without handing over, so the same speaker carries on.
    pub fn statement_elaborate(&self, current_sign_type: Option<SignType>) -> String {
        format!(
            "{}{}",
            self.endings.for_sign(current_sign_type).statement,
            self.sentence_space
        )
    }

    pub fn set_name_prompt(&self) -> &SetNamePrompt {
        &self.set_name_prompt
    }

    pub fn speaker_upcase(&self) -> bool {
        self.speaker_upcase
    }

    pub fn speaker_name(&self, speaker_type: SpeakerType) -> Option<&str> {
        self.speaker_names.get(&speaker_type).map(String::as_str)
    }

    /// Whether `text` starts by closing the previous sentence, in which case
    /// it must attach to the word before it.
    pub fn closes_previous_sentence(&self, text: &str) -> bool {
        self.endings.markers().any(|marker| text.starts_with(marker))
    }
}
