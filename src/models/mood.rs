//! Mood tags used as the browse dimension

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Fixed set of moods a song can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Energetic,
    Romantic,
    Sad,
    Happy,
    Relaxed,
}

impl Mood {
    /// All moods, in the order the add-track form offers them
    pub const ALL: [Mood; 5] = [
        Mood::Energetic,
        Mood::Romantic,
        Mood::Sad,
        Mood::Happy,
        Mood::Relaxed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "Energetic",
            Mood::Romantic => "Romantic",
            Mood::Sad => "Sad",
            Mood::Happy => "Happy",
            Mood::Relaxed => "Relaxed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = Error;

    /// Exact, case-sensitive match against the mood names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::InvalidMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert!(matches!(
            "happy".parse::<Mood>(),
            Err(Error::InvalidMood(m)) if m == "happy"
        ));
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&Mood::Relaxed).unwrap();
        assert_eq!(json, "\"Relaxed\"");
        let mood: Mood = serde_json::from_str("\"Romantic\"").unwrap();
        assert_eq!(mood, Mood::Romantic);
    }
}
