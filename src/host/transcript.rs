use super::{Action, ActionContext, ActionId};

/// In-memory list of emitted actions.
///
/// Stands in for the host's translation history, and renders the text the
/// host would have typed.
#[derive(Debug, Default)]
pub struct Transcript {
    actions: Vec<Action>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action produced by [`ActionContext::new_action`].
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Write a plain word, honouring the previous action's `next_attach`.
    pub fn write(&mut self, text: &str) -> ActionId {
        let action = self.new_action().with_text(text);
        let id = action.id;
        self.push(action);
        id
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The text as it would appear on screen.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (index, action) in self.actions.iter().enumerate() {
            if index > 0 && action.text.is_some() && !action.prev_attach {
                out.push_str(&action.space_char);
            }

            let replace = action.prev_replace.chars().count();
            if replace > 0 {
                let keep = out.chars().count().saturating_sub(replace);
                out = out.chars().take(keep).collect();
            }

            if let Some(text) = &action.text {
                out.push_str(text);
            }
        }
        out
    }
}

impl ActionContext for Transcript {
    fn new_action(&mut self) -> Action {
        let id = ActionId(self.next_id);
        self.next_id += 1;

        let mut action = Action::new(id);
        if let Some(last) = self.actions.last() {
            action.prev_attach = last.next_attach;
        }
        action
    }

    fn iter_last_actions(&self) -> Box<dyn Iterator<Item = &Action> + '_> {
        Box::new(self.actions.iter().rev())
    }
}
