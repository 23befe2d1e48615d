//! CefrLevel - Reading difficulty label

use serde::{Deserialize, Serialize};

/// CEFR proficiency tier used as the difficulty label for a generated story
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum CefrLevel {
    #[default]
    A0,
    A1,
    #[serde(rename = "A1+")]
    A1Plus,
    A2,
    #[serde(rename = "A2+")]
    A2Plus,
    B1,
    B2,
}

impl CefrLevel {
    /// All levels, easiest first
    pub const ALL: [CefrLevel; 7] = [
        CefrLevel::A0,
        CefrLevel::A1,
        CefrLevel::A1Plus,
        CefrLevel::A2,
        CefrLevel::A2Plus,
        CefrLevel::B1,
        CefrLevel::B2,
    ];

    /// Short code, e.g. `A1+`
    pub fn code(&self) -> &'static str {
        match self {
            CefrLevel::A0 => "A0",
            CefrLevel::A1 => "A1",
            CefrLevel::A1Plus => "A1+",
            CefrLevel::A2 => "A2",
            CefrLevel::A2Plus => "A2+",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
        }
    }

    /// Display label shown in the level picker
    pub fn label(&self) -> &'static str {
        match self {
            CefrLevel::A0 => "A0 (Starter)",
            CefrLevel::A1 => "A1 (Beginner)",
            CefrLevel::A1Plus => "A1+ (Beginner Plus)",
            CefrLevel::A2 => "A2 (Elementary)",
            CefrLevel::A2Plus => "A2+ (Elementary Plus)",
            CefrLevel::B1 => "B1 (Intermediate)",
            CefrLevel::B2 => "B2 (Upper Intermediate)",
        }
    }

    /// Guidance shown under the picker and embedded into the prompt
    pub fn hint(&self) -> &'static str {
        match self {
            CefrLevel::A0 => {
                "Basic vocabulary, up to about 150 words, for preschoolers meeting English for the first time."
            }
            CefrLevel::A1 => {
                "Simple everyday expressions, up to about 250 words, for lower primary grades."
            }
            CefrLevel::A1Plus => {
                "Common short sentences, up to about 350 words, for middle primary grades."
            }
            CefrLevel::A2 => {
                "Can describe simple backgrounds, up to about 500 words, for upper primary grades."
            }
            CefrLevel::A2Plus => {
                "Handles simple exchanges, up to about 700 words, for junior high preparation."
            }
            CefrLevel::B1 => "Copes with topics such as travel and work, up to about 1000 words.",
            CefrLevel::B2 => "Understands the main ideas of complex texts, up to about 1500 words.",
        }
    }
}

impl std::fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', '-', ' '], "");
        match normalized.as_str() {
            "A0" => Ok(CefrLevel::A0),
            "A1" => Ok(CefrLevel::A1),
            "A1+" | "A1PLUS" => Ok(CefrLevel::A1Plus),
            "A2" => Ok(CefrLevel::A2),
            "A2+" | "A2PLUS" => Ok(CefrLevel::A2Plus),
            "B1" => Ok(CefrLevel::B1),
            "B2" => Ok(CefrLevel::B2),
            _ => Err(format!("Unknown CEFR level: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plus_levels() {
        assert_eq!("a1+".parse::<CefrLevel>().unwrap(), CefrLevel::A1Plus);
        assert_eq!("A2_plus".parse::<CefrLevel>().unwrap(), CefrLevel::A2Plus);
        assert!("C1".parse::<CefrLevel>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&CefrLevel::A1Plus).unwrap();
        assert_eq!(json, "\"A1+\"");
        let level: CefrLevel = serde_json::from_str("\"B2\"").unwrap();
        assert_eq!(level, CefrLevel::B2);
    }
}
