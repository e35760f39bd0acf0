//! Hourly pollen concentrations and their category summary

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::forecast::{ensure_parallel, ensure_strictly_increasing};
use crate::errors::DomainError;
use crate::time_index;
use crate::value_objects::{PollenCategory, PollenLevel, PollenSpecies};

/// Hourly pollen concentrations in grains/m³
///
/// Each species is its own column and may contain gaps. A column the
/// provider did not return is empty; any other column matches `time` in
/// length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PollenSeries {
    time: Vec<DateTime<FixedOffset>>,
    alder: Vec<Option<f64>>,
    birch: Vec<Option<f64>>,
    grass: Vec<Option<f64>>,
    mugwort: Vec<Option<f64>>,
    olive: Vec<Option<f64>>,
    ragweed: Vec<Option<f64>>,
}

impl PollenSeries {
    /// Start a series with a validated time axis and no species data
    ///
    /// # Errors
    ///
    /// Returns `NonIncreasingTime` if timestamps are out of order.
    pub fn new(time: Vec<DateTime<FixedOffset>>) -> Result<Self, DomainError> {
        ensure_strictly_increasing("pollen", &time)?;
        Ok(Self {
            time,
            ..Self::default()
        })
    }

    /// Attach the column for one species
    ///
    /// # Errors
    ///
    /// Returns `SeriesLengthMismatch` if a non-empty column does not match
    /// the time axis.
    pub fn with_species(
        mut self,
        species: PollenSpecies,
        values: Vec<Option<f64>>,
    ) -> Result<Self, DomainError> {
        if !values.is_empty() {
            ensure_parallel("pollen", species.api_field(), self.time.len(), values.len())?;
        }
        *self.column_mut(species) = values;
        Ok(self)
    }

    fn column_mut(&mut self, species: PollenSpecies) -> &mut Vec<Option<f64>> {
        match species {
            PollenSpecies::Alder => &mut self.alder,
            PollenSpecies::Birch => &mut self.birch,
            PollenSpecies::Grass => &mut self.grass,
            PollenSpecies::Mugwort => &mut self.mugwort,
            PollenSpecies::Olive => &mut self.olive,
            PollenSpecies::Ragweed => &mut self.ragweed,
        }
    }

    /// Raw column for one species
    #[must_use]
    pub fn values(&self, species: PollenSpecies) -> &[Option<f64>] {
        match species {
            PollenSpecies::Alder => &self.alder,
            PollenSpecies::Birch => &self.birch,
            PollenSpecies::Grass => &self.grass,
            PollenSpecies::Mugwort => &self.mugwort,
            PollenSpecies::Olive => &self.olive,
            PollenSpecies::Ragweed => &self.ragweed,
        }
    }

    /// Concentration at `index`; gaps and missing columns read as 0
    #[must_use]
    pub fn value_at(&self, species: PollenSpecies, index: usize) -> f64 {
        self.values(species)
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }

    /// Sum of the species of one category at `index`
    #[must_use]
    pub fn category_total(&self, category: PollenCategory, index: usize) -> f64 {
        PollenSpecies::ALL
            .iter()
            .filter(|species| species.category() == category)
            .map(|species| self.value_at(*species, index))
            .sum()
    }

    #[must_use]
    pub fn time(&self) -> &[DateTime<FixedOffset>] {
        &self.time
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Index of the reading the dashboard shows for `now`
    #[must_use]
    pub fn reading_index(&self, now: DateTime<Utc>) -> usize {
        time_index::latest_elapsed_index(&self.time, now)
    }
}

/// Total and severity of one pollen category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryReading {
    pub category: PollenCategory,
    pub total: f64,
    pub level: PollenLevel,
}

impl CategoryReading {
    #[must_use]
    pub fn new(category: PollenCategory, total: f64) -> Self {
        Self {
            category,
            total,
            level: PollenLevel::from_total(total),
        }
    }

    #[must_use]
    pub const fn score(&self) -> u8 {
        self.level.score()
    }
}

/// The three category slots shown on the dashboard
///
/// Always holds Tree, Grass and Weed in that order, even without data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollenSummary {
    readings: [CategoryReading; 3],
    reading_time: Option<DateTime<FixedOffset>>,
}

impl PollenSummary {
    /// All categories at score 0
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            readings: PollenCategory::ALL.map(|category| CategoryReading::new(category, 0.0)),
            reading_time: None,
        }
    }

    /// Summarise the readings at `index`
    #[must_use]
    pub fn at_index(series: &PollenSeries, index: usize) -> Self {
        Self {
            readings: PollenCategory::ALL
                .map(|category| CategoryReading::new(category, series.category_total(category, index))),
            reading_time: series.time().get(index).copied(),
        }
    }

    /// Summarise the most recently elapsed reading, or report no data
    #[must_use]
    pub fn from_series(series: Option<&PollenSeries>, now: DateTime<Utc>) -> Self {
        match series {
            Some(series) if !series.is_empty() => Self::at_index(series, series.reading_index(now)),
            _ => Self::unavailable(),
        }
    }

    #[must_use]
    pub const fn readings(&self) -> &[CategoryReading; 3] {
        &self.readings
    }

    /// Reading for one category
    #[must_use]
    pub fn get(&self, category: PollenCategory) -> CategoryReading {
        self.readings
            .iter()
            .find(|r| r.category == category)
            .copied()
            .unwrap_or_else(|| CategoryReading::new(category, 0.0))
    }

    /// Whether a pollen reading backs this summary
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.reading_time.is_some()
    }

    /// Timestamp of the summarised reading
    #[must_use]
    pub const fn reading_time(&self) -> Option<DateTime<FixedOffset>> {
        self.reading_time
    }
}
