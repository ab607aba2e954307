//! The object the host talks to: turns `Q_AND_A` command arguments into
//! actions and keeps the state that has to survive between commands.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{QAndAError, Result};
use crate::global;
use crate::host::{Action, ActionContext, Case, MachineState};
use crate::set_name::NameCapture;
use crate::sign::{self, SignType, ARGUMENT_DIVIDER};

const SET_NAME: &str = "SET_NAME";
const RESET_CONFIG: &str = "RESET_CONFIG";
const SET_CONFIG: &str = "SET_CONFIG";

pub struct QAndA {
    config_path: PathBuf,
    config: Config,
    current_sign_type: Option<SignType>,
    name_capture: NameCapture,
}

impl QAndA {
    pub fn new(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();
        let config = Config::load(&config_path)?;

        Ok(Self {
            config_path,
            config,
            current_sign_type: None,
            name_capture: NameCapture::new(),
        })
    }

    /// Use `q_and_a.json` from the host's config directory.
    pub fn from_host_config_dir() -> anyhow::Result<Self> {
        let path = global::config_file()?;
        Self::new(&path).with_context(|| format!("Failed to load config from {:?}", path))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn current_sign_type(&self) -> Option<SignType> {
        self.current_sign_type
    }

    /// Handle one command, e.g. `QUESTION:FOLLOWING_STATEMENT` or
    /// `SET_NAME:DONE`. A failed command leaves the plugin as it was.
    pub fn command(&mut self, ctx: &mut impl ActionContext, args: &str) -> Result<Action> {
        if args.trim().is_empty() {
            return Err(QAndAError::invalid_command("No command provided"));
        }

        let args: Vec<&str> = args.split(ARGUMENT_DIVIDER).collect();
        match sign::normalize(args[0]).as_str() {
            SET_NAME => self.name_capture.run(ctx, &args[1..], &mut self.config),
            RESET_CONFIG => self.reset_config(ctx),
            _ => self.sign(ctx, &args),
        }
    }

    fn sign(&mut self, ctx: &mut impl ActionContext, args: &[&str]) -> Result<Action> {
        let (sign_type, text) = sign::format(self.current_sign_type, args, &self.config)?;
        self.current_sign_type = Some(sign_type);

        let mut action = ctx.new_action();
        action.prev_attach = self.config.closes_previous_sentence(&text);
        action.text = Some(text);
        action.next_attach = true;
        action.next_case = Some(Case::CapFirstWord);
        Ok(action)
    }

    /// Start over from the file: name edits and the sign state are dropped.
    fn reset_config(&mut self, ctx: &mut impl ActionContext) -> Result<Action> {
        self.config = Config::load(&self.config_path)?;
        self.current_sign_type = None;
        self.name_capture.clear();
        info!("Reset config from {:?}", self.config_path);
        Ok(ctx.new_action())
    }

    /// Re-read the file, keeping speaker names set during the session.
    pub fn reload_config(&mut self) -> anyhow::Result<()> {
        self.config = Config::reload(&self.config_path, &self.config)
            .with_context(|| format!("Failed to reload config from {:?}", self.config_path))?;
        Ok(())
    }

    /// Reconnecting the machine picks up config edits.
    pub fn machine_state_changed(&mut self, state: MachineState) {
        if state == MachineState::Running {
            self.reload_with_warning();
        }
    }

    /// The host applying its settings picks up config edits too.
    pub fn translated(&mut self, new_actions: &[Action]) {
        let set_config = new_actions.iter().any(|action| {
            action
                .command
                .as_deref()
                .and_then(|command| command.split(ARGUMENT_DIVIDER).next())
                .is_some_and(|name| sign::normalize(name) == SET_CONFIG)
        });

        if set_config {
            self.reload_with_warning();
        }
    }

    fn reload_with_warning(&mut self) {
        if let Err(e) = self.reload_config() {
            warn!("{:#}, keeping previous config", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ActionId, Transcript};
    use crate::speaker::SpeakerType;
    use std::fs;
    use tempfile::TempDir;

    fn plugin(dir: &TempDir, content: Option<&str>) -> QAndA {
        let path = dir.path().join("q_and_a.json");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        QAndA::new(path).unwrap()
    }

    #[test]
    fn test_blank_command() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);
        let mut transcript = Transcript::new();

        let err = q_and_a.command(&mut transcript, "  ").unwrap_err();
        assert_eq!(err.to_string(), "No command provided");
    }

    #[test]
    fn test_sign_action_flags() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);
        let mut transcript = Transcript::new();

        let action = q_and_a.command(&mut transcript, "QUESTION:INITIAL").unwrap();
        assert_eq!(action.text.as_deref(), Some("\tQ\t"));
        assert!(!action.prev_attach);
        assert!(action.next_attach);
        assert_eq!(action.next_case, Some(Case::CapFirstWord));
        assert_eq!(q_and_a.current_sign_type(), Some(SignType::Question));

        let action = q_and_a
            .command(&mut transcript, "ANSWER:FOLLOWING_INTERROGATIVE")
            .unwrap();
        assert_eq!(action.text.as_deref(), Some("?\n\tA\t"));
        assert!(action.prev_attach);
        assert_eq!(q_and_a.current_sign_type(), Some(SignType::Answer));
    }

    #[test]
    fn test_failed_sign_keeps_state() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);
        let mut transcript = Transcript::new();

        q_and_a.command(&mut transcript, "QUESTION:INITIAL").unwrap();
        let err = q_and_a.command(&mut transcript, "ANSWER:INITIAL").unwrap_err();
        assert_eq!(err.to_string(), "Unknown answer type provided: INITIAL");
        assert_eq!(q_and_a.current_sign_type(), Some(SignType::Question));
    }

    #[test]
    fn test_reset_config_drops_name_edits() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);
        let mut transcript = Transcript::new();

        q_and_a.command(&mut transcript, "QUESTION:INITIAL").unwrap();
        q_and_a
            .config
            .speaker_names
            .insert(SpeakerType::Court, "JUDGE JUDY".to_string());

        let action = q_and_a.command(&mut transcript, "reset_config").unwrap();
        assert_eq!(action.text, None);
        assert_eq!(q_and_a.current_sign_type(), None);
        assert_eq!(q_and_a.config().speaker_name(SpeakerType::Court), Some("THE COURT"));
    }

    #[test]
    fn test_running_machine_reloads_and_keeps_name_edits() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);
        q_and_a
            .config
            .speaker_names
            .insert(SpeakerType::Court, "JUDGE JUDY".to_string());

        fs::write(q_and_a.config_path(), r#"{ "sentence_space": "  " }"#).unwrap();
        q_and_a.machine_state_changed(MachineState::Running);

        assert_eq!(q_and_a.config().statement_elaborate(None), ".  ");
        assert_eq!(q_and_a.config().speaker_name(SpeakerType::Court), Some("JUDGE JUDY"));
    }

    #[test]
    fn test_other_machine_states_do_not_reload() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);

        fs::write(q_and_a.config_path(), r#"{ "sentence_space": "  " }"#).unwrap();
        q_and_a.machine_state_changed(MachineState::Disconnected);

        assert_eq!(q_and_a.config().statement_elaborate(None), ". ");
    }

    #[test]
    fn test_set_config_translation_reloads() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, None);

        fs::write(q_and_a.config_path(), r#"{ "sentence_space": "  " }"#).unwrap();
        q_and_a.translated(&[Action::new(ActionId(7)).with_text("hello")]);
        assert_eq!(q_and_a.config().statement_elaborate(None), ". ");

        q_and_a.translated(&[Action::new(ActionId(8)).with_command("set_config")]);
        assert_eq!(q_and_a.config().statement_elaborate(None), ".  ");
    }

    #[test]
    fn test_failed_reload_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        let mut q_and_a = plugin(&dir, Some(r#"{ "sentence_space": "  " }"#));

        fs::write(q_and_a.config_path(), "{ not json").unwrap();
        assert!(q_and_a.reload_config().is_err());
        q_and_a.machine_state_changed(MachineState::Running);

        assert_eq!(q_and_a.config().statement_elaborate(None), ".  ");
    }
}
