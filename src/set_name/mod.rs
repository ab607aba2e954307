//! Two-phase capture of a new speaker name:
//!
//! - `SET_NAME:PLAINTIFF_1` writes a prompt and remembers where it is.
//! - The user writes the new name straight after the prompt.
//! - `SET_NAME:DONE` reads back everything written since the prompt, stores
//!   it as the speaker's name and erases prompt and name from the output.

mod parts;

pub use parts::LastParts;

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{QAndAError, Result};
use crate::host::{Action, ActionContext, ActionId};
use crate::sign::normalize;
use crate::speaker::SpeakerType;

const DONE: &str = "DONE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetNameCommand {
    Begin(SpeakerType),
    Done,
}

impl SetNameCommand {
    pub fn parse(args: &[&str]) -> Result<Self> {
        let command = args.first().map(|arg| normalize(arg)).unwrap_or_default();

        if command.is_empty() {
            return Err(QAndAError::invalid_command(
                "No SET_NAME command arguments provided",
            ));
        }

        if command == DONE {
            return Ok(Self::Done);
        }

        SpeakerType::parse(&command).map(Self::Begin).ok_or_else(|| {
            QAndAError::invalid_command(format!(
                "Unknown SET_NAME command provided: {}",
                command
            ))
        })
    }
}

/// Prompts written by `SET_NAME:<speaker>` that are still waiting for their
/// `SET_NAME:DONE`, keyed by the action that carries the prompt.
#[derive(Debug, Default)]
pub struct NameCapture {
    prompts: HashMap<ActionId, SpeakerType>,
}

impl NameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &mut self,
        ctx: &mut impl ActionContext,
        args: &[&str],
        config: &mut Config,
    ) -> Result<Action> {
        match SetNameCommand::parse(args)? {
            SetNameCommand::Begin(speaker_type) => Ok(self.begin(ctx, speaker_type, config)),
            SetNameCommand::Done => Ok(self.done(ctx, config)),
        }
    }

    /// Write the prompt for `speaker_type`. Whatever is written next attaches
    /// to it and becomes the candidate name.
    pub fn begin(
        &mut self,
        ctx: &mut impl ActionContext,
        speaker_type: SpeakerType,
        config: &Config,
    ) -> Action {
        let current_name = config.speaker_name(speaker_type).unwrap_or_default();
        let prompt = config.set_name_prompt().render(speaker_type, current_name);

        let mut action = ctx.new_action().with_text(prompt);
        action.next_attach = true;

        self.prompts.insert(action.id, speaker_type);
        debug!("Capturing name for {} after action {:?}", speaker_type, action.id);
        action
    }

    /// Commit the text written since the most recent prompt as the new name
    /// and return an action that erases prompt and name. Without a pending
    /// prompt this does nothing; with nothing written after the prompt the
    /// prompt is erased and the name is kept.
    pub fn done(&mut self, ctx: &mut impl ActionContext, config: &mut Config) -> Action {
        let Some(capture) = self.find_capture(&*ctx) else {
            warn!("SET_NAME:DONE without a pending SET_NAME prompt, ignoring");
            return ctx.new_action();
        };
        self.prompts.remove(&capture.prompt_id);

        if capture.name.is_empty() {
            warn!(
                "No name written for {}, keeping {:?}",
                capture.speaker_type,
                config.speaker_name(capture.speaker_type)
            );
        } else {
            let name = if config.speaker_upcase() {
                capture.name.to_uppercase()
            } else {
                capture.name
            };
            info!("Setting {} speaker name to {:?}", capture.speaker_type, name);
            config.speaker_names.insert(capture.speaker_type, name);
        }

        let mut action = ctx.new_action();
        action.text = Some(String::new());
        action.prev_attach = true;
        action.prev_replace = capture.erased;
        action
    }

    pub fn pending(&self) -> usize {
        self.prompts.len()
    }

    pub fn clear(&mut self) {
        self.prompts.clear();
    }

    /// Walk back to the nearest pending prompt.
    fn find_capture(&self, ctx: &impl ActionContext) -> Option<Capture> {
        let mut written = String::new();
        let mut parts = LastParts::new(ctx.iter_last_actions());

        while let Some((action, part)) = parts.next() {
            let Some(speaker_type) = self.prompts.get(&action.id) else {
                written.insert_str(0, &part);
                continue;
            };

            // The space the host put before the prompt goes with it.
            let space_before = match parts.next() {
                Some((_, earlier))
                    if !action.prev_attach && earlier.ends_with(action.space_char.as_str()) =>
                {
                    action.space_char.as_str()
                }
                _ => "",
            };

            return Some(Capture {
                prompt_id: action.id,
                speaker_type: *speaker_type,
                name: written.trim().to_string(),
                erased: format!("{}{}{}", space_before, part, written),
            });
        }

        None
    }
}

/// A prompt found on the way back, with what was written after it.
struct Capture {
    prompt_id: ActionId,
    speaker_type: SpeakerType,
    name: String,
    /// On-screen text from the space before the prompt to the end.
    erased: String,
}
