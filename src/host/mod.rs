//! The slice of the host application the plugin talks to: output units
//! ("actions"), a factory for new ones, and backward iteration over the ones
//! already emitted.

mod transcript;

pub use transcript::Transcript;

/// Stable identity of an emitted action, used to tag actions from the
/// plugin's side without touching the host's objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub u64);

/// Case change applied to the next word the host writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    CapFirstWord,
    LowerFirstChar,
    Upper,
    Lower,
    Title,
}

/// A single unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: ActionId,
    pub text: Option<String>,
    /// No space between the previous action and this one.
    pub prev_attach: bool,
    /// No space between this action and the next one.
    pub next_attach: bool,
    /// Text immediately before this action that it replaces.
    pub prev_replace: String,
    pub space_char: String,
    pub next_case: Option<Case>,
    /// Host command carried by this action, if any (e.g. `SET_CONFIG`).
    pub command: Option<String>,
}

impl Action {
    pub fn new(id: ActionId) -> Self {
        Self {
            id,
            text: None,
            prev_attach: false,
            next_attach: false,
            prev_replace: String::new(),
            space_char: " ".to_string(),
            next_case: None,
            command: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

/// Host context handed to the plugin for each command.
pub trait ActionContext {
    /// A blank action that will follow the most recent one.
    fn new_action(&mut self) -> Action;

    /// Previously emitted actions, most recent first.
    fn iter_last_actions(&self) -> Box<dyn Iterator<Item = &Action> + '_>;
}

/// Steno machine connection state, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Stopped,
    Initializing,
    Running,
    Disconnected,
}
