//! Optional trailing action after a question or answer sign:
//!
//! - `QUESTION:FOLLOWING_STATEMENT:ELABORATE_AFTER:Okay`
//! - `ANSWER:FOLLOWING_INTERROGATIVE:YIELD_AFTER:Correct`

use super::{normalize, SignType, ARGUMENT_DIVIDER};
use crate::config::Config;
use crate::error::{QAndAError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowOnAction {
    /// Hand the floor over to the other side.
    YieldAfter,
    /// Finish the sentence and keep talking.
    ElaborateAfter,
}

impl FollowOnAction {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "YIELD_AFTER" => Some(FollowOnAction::YieldAfter),
            "ELABORATE_AFTER" => Some(FollowOnAction::ElaborateAfter),
            _ => None,
        }
    }
}

/// Append the follow-on to `sign_text`, if any.
///
/// `yield_text` produces the template used when the follow-on yields; it is
/// only evaluated for `YIELD_AFTER`.
pub(super) fn handle<F>(
    current_sign_type: Option<SignType>,
    sign_type: SignType,
    sign_text: String,
    follow_on_args: &[&str],
    config: &Config,
    yield_text: F,
) -> Result<(SignType, String)>
where
    F: FnOnce() -> String,
{
    if follow_on_args.is_empty() {
        return Ok((sign_type, sign_text));
    }

    let &[action, user_string] = follow_on_args else {
        return Err(QAndAError::invalid_command(format!(
            "Two follow on arguments must be provided. You gave: {}",
            follow_on_args.join(ARGUMENT_DIVIDER)
        )));
    };
    let action = normalize(action);

    match FollowOnAction::parse(&action) {
        Some(FollowOnAction::YieldAfter) => Ok((
            sign_type.yielded(),
            sign_text + user_string + &yield_text(),
        )),
        Some(FollowOnAction::ElaborateAfter) => Ok((
            sign_type,
            sign_text + user_string + &config.statement_elaborate(current_sign_type),
        )),
        None => Err(QAndAError::invalid_command(format!(
            "Unknown follow on action provided: {}",
            action
        ))),
    }
}
