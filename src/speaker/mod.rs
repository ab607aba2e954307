//! Speaker types recognised in commands and their default display names.

use std::fmt;

/// A participant whose name can appear in a speaker label or byline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpeakerType {
    Defense1,
    Defense2,
    Plaintiff1,
    Plaintiff2,
    Bailiff,
    Clerk,
    Court,
    CourtReporter,
    Videographer,
    Witness,
}

impl SpeakerType {
    pub const ALL: [SpeakerType; 10] = [
        SpeakerType::Defense1,
        SpeakerType::Defense2,
        SpeakerType::Plaintiff1,
        SpeakerType::Plaintiff2,
        SpeakerType::Bailiff,
        SpeakerType::Clerk,
        SpeakerType::Court,
        SpeakerType::CourtReporter,
        SpeakerType::Videographer,
        SpeakerType::Witness,
    ];

    /// Parse a command tag such as `PLAINTIFF_1`. Case-insensitive, trimmed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "DEFENSE_1" => Some(SpeakerType::Defense1),
            "DEFENSE_2" => Some(SpeakerType::Defense2),
            "PLAINTIFF_1" => Some(SpeakerType::Plaintiff1),
            "PLAINTIFF_2" => Some(SpeakerType::Plaintiff2),
            "BAILIFF" => Some(SpeakerType::Bailiff),
            "CLERK" => Some(SpeakerType::Clerk),
            "COURT" => Some(SpeakerType::Court),
            "COURT_REPORTER" => Some(SpeakerType::CourtReporter),
            "VIDEOGRAPHER" => Some(SpeakerType::Videographer),
            "WITNESS" => Some(SpeakerType::Witness),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeakerType::Defense1 => "DEFENSE_1",
            SpeakerType::Defense2 => "DEFENSE_2",
            SpeakerType::Plaintiff1 => "PLAINTIFF_1",
            SpeakerType::Plaintiff2 => "PLAINTIFF_2",
            SpeakerType::Bailiff => "BAILIFF",
            SpeakerType::Clerk => "CLERK",
            SpeakerType::Court => "COURT",
            SpeakerType::CourtReporter => "COURT_REPORTER",
            SpeakerType::Videographer => "VIDEOGRAPHER",
            SpeakerType::Witness => "WITNESS",
        }
    }

    /// Only the lawyers and the witness can open a line of questioning.
    pub fn is_byline_eligible(&self) -> bool {
        matches!(
            self,
            SpeakerType::Defense1
                | SpeakerType::Defense2
                | SpeakerType::Plaintiff1
                | SpeakerType::Plaintiff2
                | SpeakerType::Witness
        )
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            // Lawyer names are the most frequently changed.
            SpeakerType::Plaintiff1 => "MR. STPHAO",
            SpeakerType::Defense1 => "MR. EUFPLT",
            SpeakerType::Plaintiff2 => "MR. SKWRAO",
            SpeakerType::Defense2 => "MR. EURBGS",
            SpeakerType::Bailiff => "THE BAILIFF",
            SpeakerType::Clerk => "THE CLERK",
            SpeakerType::Court => "THE COURT",
            SpeakerType::CourtReporter => "THE COURT REPORTER",
            SpeakerType::Videographer => "THE VIDEOGRAPHER",
            SpeakerType::Witness => "THE WITNESS",
        }
    }
}

impl fmt::Display for SpeakerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(
            SpeakerType::parse(" court_reporter "),
            Some(SpeakerType::CourtReporter)
        );
        assert_eq!(SpeakerType::parse("Witness"), Some(SpeakerType::Witness));
        assert_eq!(SpeakerType::parse("JUROR"), None);
    }

    #[test]
    fn test_parse_round_trips_every_tag() {
        for speaker_type in SpeakerType::ALL {
            assert_eq!(SpeakerType::parse(speaker_type.as_str()), Some(speaker_type));
        }
    }

    #[test]
    fn test_byline_eligibility() {
        let eligible: Vec<SpeakerType> = SpeakerType::ALL
            .into_iter()
            .filter(SpeakerType::is_byline_eligible)
            .collect();

        assert_eq!(
            eligible,
            vec![
                SpeakerType::Defense1,
                SpeakerType::Defense2,
                SpeakerType::Plaintiff1,
                SpeakerType::Plaintiff2,
                SpeakerType::Witness,
            ]
        );
    }
}
