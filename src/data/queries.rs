use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::model::{EruptionDataset, EruptionRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A query could not produce a meaningful answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query needs at least one record. Loading can succeed with zero
    /// records, so this is not a load failure.
    #[error("dataset contains no eruption records")]
    EmptyDataset,

    /// A half-open year range whose start does not precede its end.
    #[error("invalid year range: {start}..{end}")]
    InvalidYearRange { start: i32, end: i32 },
}

// ---------------------------------------------------------------------------
// Query surface
// ---------------------------------------------------------------------------

/// Analytical queries over a loaded dataset.
///
/// Every method is a pure read: the same dataset and arguments always give
/// the same answer. Filters preserve source order and never re-sort.
/// Records with an absent `year` or `VEI` fail any comparison against that
/// field.
impl EruptionDataset {
    /// Records whose eruption year falls in the half-open range
    /// `[start, end)`, in source order.
    ///
    /// `start >= end` is rejected rather than silently matching nothing.
    pub fn erupted_between(
        &self,
        start: i32,
        end: i32,
    ) -> Result<Vec<&EruptionRecord>, QueryError> {
        if start >= end {
            return Err(QueryError::InvalidYearRange { start, end });
        }
        Ok(self
            .records
            .iter()
            .filter(|r| r.year.is_some_and(|y| start <= y && y < end))
            .collect())
    }

    /// Names of eruptions with `VEI >= threshold`, in source order.
    /// Duplicate names are kept.
    pub fn names_with_min_vei(&self, threshold: u8) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.vei.is_some_and(|v| v >= threshold))
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Share of eruptions that triggered a tsunami, as a percentage in
    /// `[0, 100]`. An empty dataset yields `0.0`.
    pub fn tsunami_percentage(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let tsunamis = self.records.iter().filter(|r| r.caused_tsunami()).count();
        100.0 * tsunamis as f64 / self.records.len() as f64
    }

    /// The most frequent volcano type. Ties resolve to the
    /// lexicographically smallest type name.
    pub fn most_common_type(&self) -> Result<&str, QueryError> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.volcano_type.as_str()).or_default() += 1;
        }

        // Ascending key order plus a strict `>` means the smallest name
        // wins among equal counts.
        let mut best: Option<(&str, usize)> = None;
        for (volcano_type, count) in counts {
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((volcano_type, count));
            }
        }
        best.map(|(volcano_type, _)| volcano_type)
            .ok_or(QueryError::EmptyDataset)
    }

    /// Number of eruptions in the given country. Exact, case-sensitive
    /// match; a country absent from the dataset counts zero.
    pub fn eruption_count_in(&self, country: &str) -> usize {
        self.records.iter().filter(|r| r.country == country).count()
    }

    /// Arithmetic mean of summit elevations in metres.
    pub fn average_elevation(&self) -> Result<f64, QueryError> {
        if self.records.is_empty() {
            return Err(QueryError::EmptyDataset);
        }
        let total: f64 = self.records.iter().map(|r| r.elevation).sum();
        Ok(total / self.records.len() as f64)
    }

    /// Unique volcano types in order of first appearance.
    pub fn distinct_types(&self) -> Vec<&str> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut types = Vec::new();
        for record in &self.records {
            if seen.insert(record.volcano_type.as_str()) {
                types.push(record.volcano_type.as_str());
            }
        }
        types
    }

    /// Share of eruptions north of the equator, as a percentage in
    /// `[0, 100]`. An empty dataset yields `0.0`.
    pub fn northern_hemisphere_percentage(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let northern = self.records.iter().filter(|r| r.latitude > 0.0).count();
        100.0 * northern as f64 / self.records.len() as f64
    }

    /// Names of Southern-Hemisphere eruptions after `after_year` with
    /// exactly the given VEI and tsunami marker, in source order.
    ///
    /// Passing the empty string selects eruptions that did not trigger a
    /// tsunami.
    pub fn southern_names_matching(
        &self,
        after_year: i32,
        vei: u8,
        tsunami: &str,
    ) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.year.is_some_and(|y| y > after_year))
            .filter(|r| r.latitude < 0.0)
            .filter(|r| r.vei == Some(vei))
            .filter(|r| r.tsunami == tsunami)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Names of eruptions whose summit is at or above `min_elevation`
    /// metres, in source order.
    pub fn names_at_or_above(&self, min_elevation: f64) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.elevation >= min_elevation)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// The eruption with the highest recorded death toll.
    ///
    /// Unrecorded death tolls count as zero, so such records stay eligible.
    /// Ties resolve to the earliest record in source order.
    pub fn most_deadly(&self) -> Result<&EruptionRecord, QueryError> {
        let mut best: Option<&EruptionRecord> = None;
        for record in &self.records {
            let deaths = record.deaths.unwrap_or(0);
            if best.map_or(true, |b| deaths > b.deaths.unwrap_or(0)) {
                best = Some(record);
            }
        }
        best.ok_or(QueryError::EmptyDataset)
    }
}
