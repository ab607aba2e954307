use crate::host::Action;

/// Visible text of previously emitted actions, most recent first.
///
/// Each part is an action's text plus the space the host put between it and
/// the following action. Text that a later action replaced through
/// `prev_replace` is cut off the end of the parts it covered, so the parts
/// concatenated in reverse give back exactly what is on screen.
pub struct LastParts<'a> {
    actions: Box<dyn Iterator<Item = &'a Action> + 'a>,
    next_action: Option<&'a Action>,
    replace: usize,
}

impl<'a> LastParts<'a> {
    pub fn new(actions: Box<dyn Iterator<Item = &'a Action> + 'a>) -> Self {
        Self {
            actions,
            next_action: None,
            replace: 0,
        }
    }
}

impl<'a> Iterator for LastParts<'a> {
    type Item = (&'a Action, String);

    fn next(&mut self) -> Option<Self::Item> {
        let action = self.actions.next()?;

        let mut part = action.text.clone().unwrap_or_default();
        if let Some(next) = self.next_action {
            if next.text.is_some() && !next.prev_attach {
                part.push_str(&next.space_char);
            }
        }

        if self.replace > 0 {
            let len = part.chars().count();
            if len > self.replace {
                part = part.chars().take(len - self.replace).collect();
                self.replace = 0;
            } else {
                self.replace -= len;
                part.clear();
            }
        }

        self.replace += action.prev_replace.chars().count();
        self.next_action = Some(action);

        Some((action, part))
    }
}
