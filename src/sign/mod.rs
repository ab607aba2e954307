//! Reads a Q&A sign command and delegates to the handler picked by its
//! *first* token, producing the sign text and the new sign state.
//!
//! Commands look like:
//!
//! - `QUESTION:FOLLOWING_STATEMENT`
//! - `ANSWER:FOLLOWING_INTERROGATIVE:YIELD_AFTER:Correct`
//! - `BYLINE:PLAINTIFF_1:INITIAL`
//! - `COURT_REPORTER:INITIAL`

mod answer;
mod byline;
mod follow_on;
mod question;
mod speaker;

use std::fmt;
use tracing::debug;

use crate::config::{Config, Ending};
use crate::error::{QAndAError, Result};
use crate::speaker::SpeakerType;

pub const ARGUMENT_DIVIDER: &str = ":";

/// The kind of the most recently emitted sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignType {
    Question,
    Answer,
    Speaker,
}

impl SignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignType::Question => "QUESTION",
            SignType::Answer => "ANSWER",
            SignType::Speaker => "SPEAKER",
        }
    }

    /// The sign that takes over after a yield.
    pub fn yielded(&self) -> SignType {
        match self {
            SignType::Question => SignType::Answer,
            SignType::Answer | SignType::Speaker => SignType::Question,
        }
    }
}

impl fmt::Display for SignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a sign sits relative to the sentence before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignVariant {
    Initial,
    Following(Ending),
}

impl SignVariant {
    pub fn parse(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "INITIAL" => Some(SignVariant::Initial),
            "FOLLOWING_INTERROGATIVE" => Some(SignVariant::Following(Ending::Interrogative)),
            "FOLLOWING_STATEMENT" => Some(SignVariant::Following(Ending::Statement)),
            "FOLLOWING_INTERRUPT" => Some(SignVariant::Following(Ending::Interrupt)),
            _ => None,
        }
    }
}

/// Top-level sign families selected by the first command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignKind {
    Question,
    Answer,
    Byline,
    Speaker(SpeakerType),
}

impl SignKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "QUESTION" => Some(SignKind::Question),
            "ANSWER" => Some(SignKind::Answer),
            "BYLINE" => Some(SignKind::Byline),
            other => SpeakerType::parse(other).map(SignKind::Speaker),
        }
    }
}

/// Tag tokens are matched trimmed and case-insensitively.
pub(crate) fn normalize(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Produce the text for `args` given the sign emitted before it.
///
/// Returns the new current sign type alongside the text. Fails if the sign
/// type is blank or not recognised, or if the handler rejects its arguments.
pub fn format(
    current_sign_type: Option<SignType>,
    args: &[&str],
    config: &Config,
) -> Result<(SignType, String)> {
    let Some((sign_type, sign_type_args)) = args.split_first() else {
        return Err(QAndAError::invalid_command("No sign type provided"));
    };
    let sign_type = normalize(sign_type);

    if sign_type.is_empty() {
        return Err(QAndAError::invalid_command("No sign type provided"));
    }

    let (new_sign_type, text) = match SignKind::parse(&sign_type) {
        Some(SignKind::Question) => question::sign(current_sign_type, sign_type_args, config)?,
        Some(SignKind::Answer) => answer::sign(current_sign_type, sign_type_args, config)?,
        Some(SignKind::Byline) => byline::sign(current_sign_type, sign_type_args, config)?,
        Some(SignKind::Speaker(_)) => speaker::sign(current_sign_type, args, config)?,
        None => {
            return Err(QAndAError::invalid_command(format!(
                "Unknown sign type provided: {}",
                sign_type
            )))
        }
    };

    debug!(
        "Formatted {} after {:?} as {:?}",
        args.join(ARGUMENT_DIVIDER),
        current_sign_type,
        text
    );
    Ok((new_sign_type, text))
}
