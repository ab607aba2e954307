//! Speaker label signs, where the tag itself names the speaker:
//!
//! - `WITNESS:FOLLOWING_INTERROGATIVE`
//! - `COURT:FOLLOWING_STATEMENT`
//! - `COURT_REPORTER:INITIAL`

use super::{normalize, SignType, SignVariant, ARGUMENT_DIVIDER};
use crate::config::Config;
use crate::error::{QAndAError, Result};
use crate::speaker::SpeakerType;

pub(super) fn sign(
    current_sign_type: Option<SignType>,
    args: &[&str],
    config: &Config,
) -> Result<(SignType, String)> {
    if args.len() > 2 {
        return Err(QAndAError::invalid_command(format!(
            "Two speaker arguments must be provided. You gave: {}",
            args.join(ARGUMENT_DIVIDER)
        )));
    }

    let (speaker_tag, sign_tag) = extract_speaker_and_sign(args)?;

    let speaker_name = SpeakerType::parse(&speaker_tag)
        .and_then(|speaker_type| config.speaker_name(speaker_type))
        .ok_or_else(|| {
            QAndAError::invalid_command(format!(
                "Unknown speaker type provided: {}",
                speaker_tag
            ))
        })?;

    let speaker = match SignVariant::parse(&sign_tag) {
        Some(SignVariant::Initial) => config.speaker_for(speaker_name),
        Some(SignVariant::Following(ending)) => {
            config.speaker_following_for(ending, current_sign_type, speaker_name)
        }
        None => {
            return Err(QAndAError::invalid_command(format!(
                "Unknown sign type provided for {}: {}",
                speaker_tag, sign_tag
            )))
        }
    };

    Ok((SignType::Speaker, speaker))
}

/// Normalised `(speaker, sign)` tags from the first two args. Missing args
/// count as blank.
pub(super) fn extract_speaker_and_sign(args: &[&str]) -> Result<(String, String)> {
    let speaker_tag = args.first().map(|arg| normalize(arg)).unwrap_or_default();
    let sign_tag = args.get(1).map(|arg| normalize(arg)).unwrap_or_default();

    if speaker_tag.is_empty() {
        return Err(QAndAError::invalid_command("No speaker type provided"));
    }

    if sign_tag.is_empty() {
        return Err(QAndAError::invalid_command("No sign type provided"));
    }

    Ok((speaker_tag, sign_tag))
}
