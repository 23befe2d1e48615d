//! Superpower - Premium-only hero ability

use serde::{Deserialize, Serialize};

/// Hero superpower; anything but `None` requires the premium flag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Superpower {
    #[default]
    None,
    Invisibility,
    Flight,
    FireBreath,
}

impl Superpower {
    pub const ALL: [Superpower; 4] = [
        Superpower::None,
        Superpower::Invisibility,
        Superpower::Flight,
        Superpower::FireBreath,
    ];

    pub fn is_premium(&self) -> bool {
        *self != Superpower::None
    }

    pub fn label(&self) -> &'static str {
        match self {
            Superpower::None => "None",
            Superpower::Invisibility => "Invisibility Cloak",
            Superpower::Flight => "Flight",
            Superpower::FireBreath => "Fire Breath",
        }
    }
}

impl std::fmt::Display for Superpower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Superpower::None => write!(f, "none"),
            Superpower::Invisibility => write!(f, "invisibility"),
            Superpower::Flight => write!(f, "flight"),
            Superpower::FireBreath => write!(f, "fire_breath"),
        }
    }
}

impl std::str::FromStr for Superpower {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "none" => Ok(Superpower::None),
            "invisibility" => Ok(Superpower::Invisibility),
            "flight" => Ok(Superpower::Flight),
            "fire_breath" => Ok(Superpower::FireBreath),
            _ => Err(format!("Unknown superpower: {}", s)),
        }
    }
}
