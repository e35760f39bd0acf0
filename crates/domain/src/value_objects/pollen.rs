//! Pollen species, categories and severity levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six species reported by the air-quality endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollenSpecies {
    Alder,
    Birch,
    Grass,
    Mugwort,
    Olive,
    Ragweed,
}

impl PollenSpecies {
    /// All species, in the order they are requested
    pub const ALL: [Self; 6] = [
        Self::Alder,
        Self::Birch,
        Self::Grass,
        Self::Mugwort,
        Self::Olive,
        Self::Ragweed,
    ];

    /// Field name used by the air-quality API
    #[must_use]
    pub const fn api_field(self) -> &'static str {
        match self {
            Self::Alder => "alder_pollen",
            Self::Birch => "birch_pollen",
            Self::Grass => "grass_pollen",
            Self::Mugwort => "mugwort_pollen",
            Self::Olive => "olive_pollen",
            Self::Ragweed => "ragweed_pollen",
        }
    }

    /// Category the species counts towards
    #[must_use]
    pub const fn category(self) -> PollenCategory {
        match self {
            Self::Alder | Self::Birch | Self::Olive => PollenCategory::Tree,
            Self::Grass => PollenCategory::Grass,
            Self::Mugwort | Self::Ragweed => PollenCategory::Weed,
        }
    }
}

/// Semantic pollen category shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollenCategory {
    Tree,
    Grass,
    Weed,
}

impl PollenCategory {
    /// Display order of the category slots
    pub const ALL: [Self; 3] = [Self::Tree, Self::Grass, Self::Weed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tree => "Tree",
            Self::Grass => "Grass",
            Self::Weed => "Weed",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Tree => "🌳",
            Self::Grass => "🌾",
            Self::Weed => "🌿",
        }
    }
}

impl fmt::Display for PollenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a category total, scored 0-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollenLevel {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl PollenLevel {
    /// Highest possible score
    pub const MAX_SCORE: u8 = 4;

    /// Map a concentration total (grains/m³) to a level
    #[must_use]
    pub fn from_total(total: f64) -> Self {
        if total > 75.0 {
            Self::VeryHigh
        } else if total > 30.0 {
            Self::High
        } else if total > 10.0 {
            Self::Moderate
        } else if total > 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }

    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for PollenLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(PollenLevel::from_total(0.0), PollenLevel::None);
        assert_eq!(PollenLevel::from_total(0.1), PollenLevel::Low);
        assert_eq!(PollenLevel::from_total(10.0), PollenLevel::Low);
        assert_eq!(PollenLevel::from_total(10.5), PollenLevel::Moderate);
        assert_eq!(PollenLevel::from_total(30.0), PollenLevel::Moderate);
        assert_eq!(PollenLevel::from_total(31.0), PollenLevel::High);
        assert_eq!(PollenLevel::from_total(75.0), PollenLevel::High);
        assert_eq!(PollenLevel::from_total(75.1), PollenLevel::VeryHigh);
    }

    #[test]
    fn negative_and_nan_totals_score_zero() {
        assert_eq!(PollenLevel::from_total(-3.0), PollenLevel::None);
        assert_eq!(PollenLevel::from_total(f64::NAN), PollenLevel::None);
    }

    #[test]
    fn scores_and_labels() {
        assert_eq!(PollenLevel::None.score(), 0);
        assert_eq!(PollenLevel::VeryHigh.score(), PollenLevel::MAX_SCORE);
        assert_eq!(PollenLevel::VeryHigh.label(), "Very High");
        assert_eq!(PollenLevel::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn species_categories() {
        assert_eq!(PollenSpecies::Birch.category(), PollenCategory::Tree);
        assert_eq!(PollenSpecies::Alder.category(), PollenCategory::Tree);
        assert_eq!(PollenSpecies::Olive.category(), PollenCategory::Tree);
        assert_eq!(PollenSpecies::Grass.category(), PollenCategory::Grass);
        assert_eq!(PollenSpecies::Ragweed.category(), PollenCategory::Weed);
        assert_eq!(PollenSpecies::Mugwort.category(), PollenCategory::Weed);
    }

    #[test]
    fn api_fields_are_unique() {
        let mut fields: Vec<_> = PollenSpecies::ALL.iter().map(|s| s.api_field()).collect();
        fields.sort_unstable();
        fields.dedup();
        assert_eq!(fields.len(), PollenSpecies::ALL.len());
    }

    #[test]
    fn category_order() {
        let labels: Vec<_> = PollenCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Tree", "Grass", "Weed"]);
    }
}
