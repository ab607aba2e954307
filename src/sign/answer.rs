//! Answer signs:
//!
//! - `ANSWER:FOLLOWING_INTERROGATIVE`
//! - `ANSWER:FOLLOWING_INTERRUPT`
//! - `ANSWER:FOLLOWING_INTERROGATIVE:ELABORATE_AFTER:Uh-huh`
//!
//! There is no `INITIAL` answer: an answer always responds to something.

use super::{follow_on, normalize, SignType, SignVariant};
use crate::config::{Config, Ending};
use crate::error::{QAndAError, Result};

pub(super) fn sign(
    current_sign_type: Option<SignType>,
    args: &[&str],
    config: &Config,
) -> Result<(SignType, String)> {
    let (answer_type, follow_on_args) = match args.split_first() {
        Some((answer_type, rest)) => (normalize(answer_type), rest),
        None => (String::new(), args),
    };

    if answer_type.is_empty() {
        return Err(QAndAError::invalid_command("No answer type provided"));
    }

    match SignVariant::parse(&answer_type) {
        Some(SignVariant::Following(ending)) => follow_on::handle(
            current_sign_type,
            SignType::Answer,
            config.answer_following(ending, current_sign_type),
            follow_on_args,
            config,
            || config.question_following(Ending::Statement, current_sign_type),
        ),
        Some(SignVariant::Initial) | None => Err(QAndAError::invalid_command(format!(
            "Unknown answer type provided: {}",
            answer_type
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_answer_type() {
        let err = sign(None, &[""], &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "No answer type provided");
    }

    #[test]
    fn test_initial_answer_is_unknown() {
        let err = sign(None, &["INITIAL"], &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown answer type provided: INITIAL");
    }

    #[test]
    fn test_answer_following_variants() {
        let config = Config::default();
        let current = Some(SignType::Question);

        assert_eq!(
            sign(current, &["following_interrogative"], &config).unwrap(),
            (SignType::Answer, "?\n\tA\t".to_string())
        );
        assert_eq!(
            sign(current, &["FOLLOWING_STATEMENT"], &config).unwrap(),
            (SignType::Answer, ".\n\tA\t".to_string())
        );
        assert_eq!(
            sign(current, &["FOLLOWING_INTERRUPT"], &config).unwrap(),
            (SignType::Answer, " --\n\tA\t".to_string())
        );
    }

    #[test]
    fn test_answer_yield_after_opens_question() {
        assert_eq!(
            sign(
                Some(SignType::Answer),
                &["FOLLOWING_INTERROGATIVE", "YIELD_AFTER", "Correct"],
                &Config::default()
            )
            .unwrap(),
            (SignType::Question, "?\n\tA\tCorrect.\n\tQ\t".to_string())
        );
    }

    #[test]
    fn test_answer_elaborate_after() {
        assert_eq!(
            sign(
                Some(SignType::Question),
                &["FOLLOWING_INTERROGATIVE", "ELABORATE_AFTER", "Uh-huh"],
                &Config::default()
            )
            .unwrap(),
            (SignType::Answer, "?\n\tA\tUh-huh. ".to_string())
        );
    }

    #[test]
    fn test_endings_come_from_the_current_sign_type() {
        let config =
            Config::from_json(r#"{ "question": { "ending": { "interrogative": "??" } } }"#)
                .unwrap();

        assert_eq!(
            sign(Some(SignType::Question), &["FOLLOWING_INTERROGATIVE"], &config).unwrap(),
            (SignType::Answer, "??\n\tA\t".to_string())
        );
        assert_eq!(
            sign(Some(SignType::Speaker), &["FOLLOWING_INTERROGATIVE"], &config).unwrap(),
            (SignType::Answer, "?\n\tA\t".to_string())
        );
    }
}
