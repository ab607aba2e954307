//! Question signs:
//!
//! - `QUESTION:INITIAL`
//! - `QUESTION:FOLLOWING_INTERROGATIVE`
//! - `QUESTION:FOLLOWING_STATEMENT:YIELD_AFTER:All right`

use super::{follow_on, normalize, SignType, SignVariant};
use crate::config::{Config, Ending};
use crate::error::{QAndAError, Result};

pub(super) fn sign(
    current_sign_type: Option<SignType>,
    args: &[&str],
    config: &Config,
) -> Result<(SignType, String)> {
    let (question_type, follow_on_args) = match args.split_first() {
        Some((question_type, rest)) => (normalize(question_type), rest),
        None => (String::new(), args),
    };

    if question_type.is_empty() {
        return Err(QAndAError::invalid_command("No question type provided"));
    }

    match SignVariant::parse(&question_type) {
        Some(SignVariant::Initial) => Ok((SignType::Question, config.question().to_string())),
        Some(SignVariant::Following(ending)) => follow_on::handle(
            current_sign_type,
            SignType::Question,
            config.question_following(ending, current_sign_type),
            follow_on_args,
            config,
            || config.answer_following(Ending::Interrogative, current_sign_type),
        ),
        None => Err(QAndAError::invalid_command(format!(
            "Unknown question type provided: {}",
            question_type
        ))),
    }
}
