//! Built-in reference data: crops, pests and soil types.
//!
//! Everything here is fixed at compile time and read-only for the life of
//! the process. Lookups are by exact label, the same labels the front end
//! offers in its selection lists.

use crate::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Silty,
    Peaty,
}

impl SoilType {
    /// All soil types in display order.
    pub const ALL: [SoilType; 5] = [
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Silty,
        SoilType::Peaty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = AppError;

    /// Case-insensitive match against the five known labels.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        SoilType::ALL
            .into_iter()
            .find(|soil| soil.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidData(format!("Unknown soil type: '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rainfall {
    Low,
    Medium,
    High,
}

impl Rainfall {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rainfall::Low => "low",
            Rainfall::Medium => "medium",
            Rainfall::High => "high",
        }
    }
}

impl fmt::Display for Rainfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Dry,
    Rainy,
    Planting,
    Harvest,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Dry, Season::Rainy, Season::Planting, Season::Harvest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Dry => "Dry",
            Season::Rainy => "Rainy",
            Season::Planting => "Planting",
            Season::Harvest => "Harvest",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidData(format!("Unknown season: '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropRecord {
    pub name: &'static str,
    pub soils: &'static [SoilType],
    pub rainfall: Rainfall,
    /// Minimum and maximum growing temperature in °C.
    pub temp_range: (i32, i32),
}

impl CropRecord {
    /// Whether `soil` (an exact label) is one of this crop's soils.
    pub fn accepts_soil(&self, soil: &str) -> bool {
        self.soils.iter().any(|s| s.as_str() == soil)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PestRecord {
    pub name: &'static str,
    pub solution: &'static str,
    pub prevention: &'static str,
}

const CROPS: [CropRecord; 4] = [
    CropRecord {
        name: "Maize",
        soils: &[SoilType::Loamy, SoilType::Silty],
        rainfall: Rainfall::Medium,
        temp_range: (18, 32),
    },
    CropRecord {
        name: "Wheat",
        soils: &[SoilType::Clay, SoilType::Loamy],
        rainfall: Rainfall::Low,
        temp_range: (12, 25),
    },
    CropRecord {
        name: "Rice",
        soils: &[SoilType::Clay, SoilType::Silty],
        rainfall: Rainfall::High,
        temp_range: (20, 35),
    },
    CropRecord {
        name: "Beans",
        soils: &[SoilType::Loamy, SoilType::Sandy],
        rainfall: Rainfall::Medium,
        temp_range: (15, 30),
    },
];

const PESTS: [PestRecord; 3] = [
    PestRecord {
        name: "Aphids",
        solution: "Use neem oil or insecticidal soap",
        prevention: "Encourage beneficial insects",
    },
    PestRecord {
        name: "Cutworms",
        solution: "Apply diatomaceous earth around plants",
        prevention: "Use collars around seedlings",
    },
    PestRecord {
        name: "Powdery Mildew",
        solution: "Apply sulfur or potassium bicarbonate",
        prevention: "Ensure good air circulation",
    },
];

/// Read-only view over the built-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// Crops in table insertion order.
    pub fn crops(&self) -> &'static [CropRecord] {
        &CROPS
    }

    pub fn pests(&self) -> &'static [PestRecord] {
        &PESTS
    }

    pub fn soil_types(&self) -> &'static [SoilType] {
        &SoilType::ALL
    }

    pub fn crop(&self, name: &str) -> Option<&'static CropRecord> {
        CROPS.iter().find(|c| c.name == name)
    }

    pub fn pest(&self, name: &str) -> Option<&'static PestRecord> {
        PESTS.iter().find(|p| p.name == name)
    }
}
