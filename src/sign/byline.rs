//! Byline signs, announcing who takes up the questioning:
//!
//! - `BYLINE:PLAINTIFF_1:INITIAL`
//! - `BYLINE:DEFENSE_2:FOLLOWING_STATEMENT`

use super::{speaker, SignType, SignVariant, ARGUMENT_DIVIDER};
use crate::config::Config;
use crate::error::{QAndAError, Result};
use crate::speaker::SpeakerType;

pub(super) fn sign(
    current_sign_type: Option<SignType>,
    args: &[&str],
    config: &Config,
) -> Result<(SignType, String)> {
    if args.len() != 2 {
        return Err(QAndAError::invalid_command(format!(
            "Two byline arguments must be provided. You gave: {}",
            args.join(ARGUMENT_DIVIDER)
        )));
    }

    let (speaker_tag, sign_tag) = speaker::extract_speaker_and_sign(args)?;

    let speaker_type = SpeakerType::parse(&speaker_tag)
        .filter(SpeakerType::is_byline_eligible)
        .ok_or_else(|| {
            QAndAError::invalid_command(format!(
                "Unknown byline speaker type provided: {}",
                speaker_tag
            ))
        })?;

    let speaker_name = config.speaker_name(speaker_type).ok_or_else(|| {
        QAndAError::invalid_command(format!("No speaker name entry for: {}", speaker_type))
    })?;

    let byline = match SignVariant::parse(&sign_tag) {
        Some(SignVariant::Initial) => config.byline_for(speaker_name),
        Some(SignVariant::Following(ending)) => {
            config.byline_following_for(ending, current_sign_type, speaker_name)
        }
        None => {
            return Err(QAndAError::invalid_command(format!(
                "Unknown sign type provided for {} byline: {}",
                speaker_type, sign_tag
            )))
        }
    };

    Ok((SignType::Question, byline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byline_requires_two_args() {
        let config = Config::default();
        let cases: [(&[&str], &str); 3] = [
            (&[], ""),
            (&["PLAINTIFF_1"], "PLAINTIFF_1"),
            (&["PLAINTIFF_1", "X", "Y"], "PLAINTIFF_1:X:Y"),
        ];
        for (args, given) in cases {
            let err = sign(None, args, &config).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Two byline arguments must be provided. You gave: {}", given)
            );
        }
    }

    #[test]
    fn test_blank_byline_args() {
        let config = Config::default();
        let err = sign(None, &["", "INITIAL"], &config).unwrap_err();
        assert_eq!(err.to_string(), "No speaker type provided");

        let err = sign(None, &["PLAINTIFF_1", " "], &config).unwrap_err();
        assert_eq!(err.to_string(), "No sign type provided");
    }

    #[test]
    fn test_non_lawyer_byline_is_unknown() {
        let err = sign(None, &["COURT", "INITIAL"], &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown byline speaker type provided: COURT"
        );

        let err = sign(None, &["JUROR", "INITIAL"], &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown byline speaker type provided: JUROR"
        );
    }

    #[test]
    fn test_missing_speaker_name() {
        let mut config = Config::default();
        config.speaker_names.remove(&SpeakerType::Defense2);

        let err = sign(None, &["DEFENSE_2", "INITIAL"], &config).unwrap_err();
        assert_eq!(err.to_string(), "No speaker name entry for: DEFENSE_2");
    }

    #[test]
    fn test_unknown_byline_sign_type() {
        let err = sign(None, &["defense_1", "yielding"], &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown sign type provided for DEFENSE_1 byline: YIELDING"
        );
    }

    #[test]
    fn test_initial_byline() {
        assert_eq!(
            sign(None, &["plaintiff_1", "initial"], &Config::default()).unwrap(),
            (SignType::Question, "BY MR. STPHAO:\n\tQ\t".to_string())
        );
    }

    #[test]
    fn test_byline_following_variants() {
        let config = Config::default();
        let current = Some(SignType::Answer);

        assert_eq!(
            sign(current, &["DEFENSE_1", "FOLLOWING_INTERROGATIVE"], &config).unwrap(),
            (SignType::Question, "?\nBY MR. EUFPLT:\n\tQ\t".to_string())
        );
        assert_eq!(
            sign(current, &["DEFENSE_2", "FOLLOWING_STATEMENT"], &config).unwrap(),
            (SignType::Question, ".\nBY MR. EURBGS:\n\tQ\t".to_string())
        );
        assert_eq!(
            sign(current, &["PLAINTIFF_2", "FOLLOWING_INTERRUPT"], &config).unwrap(),
            (SignType::Question, " --\nBY MR. SKWRAO:\n\tQ\t".to_string())
        );
    }

    #[test]
    fn test_witness_byline_opens_question() {
        assert_eq!(
            sign(
                Some(SignType::Speaker),
                &["WITNESS", "FOLLOWING_STATEMENT"],
                &Config::default()
            )
            .unwrap(),
            (SignType::Question, ".\nBY THE WITNESS:\n\tQ\t".to_string())
        );
    }
}
