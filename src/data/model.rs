use serde::Deserialize;

// ---------------------------------------------------------------------------
// EruptionRecord – one row of the source dataset
// ---------------------------------------------------------------------------

/// A single recorded eruption.
///
/// Serde renames bind the fields to the column names used by the source
/// files (`Name`, `Country`, `Type`, `Year`, `Latitude`, `Elevation`,
/// `VEI`, `TSU`, `Deaths`); those names are stable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EruptionRecord {
    /// Volcano name, not unique across records.
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Country")]
    pub country: String,

    /// Volcanic landform category, e.g. "Stratovolcano".
    #[serde(rename = "Type")]
    pub volcano_type: String,

    /// Eruption year; negative values are BCE. `None` for undated eruptions.
    #[serde(rename = "Year", default)]
    pub year: Option<i32>,

    /// Signed latitude in degrees; positive values lie in the Northern
    /// Hemisphere.
    #[serde(rename = "Latitude")]
    pub latitude: f64,

    /// Summit elevation in metres. Negative for submarine vents.
    #[serde(rename = "Elevation")]
    pub elevation: f64,

    /// Volcanic Explosivity Index, 0–8. `None` where no index was assigned.
    #[serde(rename = "VEI", default)]
    pub vei: Option<u8>,

    /// Tsunami marker. The empty string means no tsunami was recorded; any
    /// non-empty marker means one was.
    #[serde(rename = "TSU", default)]
    pub tsunami: String,

    /// Recorded death toll, where known.
    #[serde(rename = "Deaths", default)]
    pub deaths: Option<u32>,
}

impl EruptionRecord {
    /// Whether this eruption triggered a tsunami.
    pub fn caused_tsunami(&self) -> bool {
        !self.tsunami.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EruptionDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset.
///
/// Records keep the order they had in the source file and cannot be
/// reassigned or mutated once the dataset is constructed; every query sees
/// the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct EruptionDataset {
    pub(crate) records: Vec<EruptionRecord>,
}

impl EruptionDataset {
    /// Build a dataset from already-parsed records, keeping their order.
    pub fn from_records(records: Vec<EruptionRecord>) -> Self {
        EruptionDataset { records }
    }

    /// Number of eruption records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn records(&self) -> &[EruptionRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields_deserialize_from_source_names() {
        let record: EruptionRecord = serde_json::from_str(
            r#"{
                "Name": "Krakatau",
                "Country": "Indonesia",
                "Type": "Caldera",
                "Year": 1883,
                "Latitude": -6.102,
                "Elevation": 813.0,
                "VEI": 6,
                "TSU": "tsu",
                "Deaths": 36417
            }"#,
        )
        .unwrap();

        assert_eq!(record.name, "Krakatau");
        assert_eq!(record.year, Some(1883));
        assert_eq!(record.vei, Some(6));
        assert!(record.caused_tsunami());
    }

    #[test]
    fn test_missing_optional_fields_deserialize_as_absent() {
        // Undated eruption with no VEI, no death toll, and no TSU key.
        let record: EruptionRecord = serde_json::from_str(
            r#"{
                "Name": "Ilopango",
                "Country": "El Salvador",
                "Type": "Caldera",
                "Year": null,
                "Latitude": 13.672,
                "Elevation": 450.0
            }"#,
        )
        .unwrap();

        assert_eq!(record.year, None);
        assert_eq!(record.vei, None);
        assert_eq!(record.deaths, None);
        assert!(!record.caused_tsunami());
    }

    #[test]
    fn test_dataset_preserves_source_order() {
        let a: EruptionRecord = serde_json::from_str(
            r#"{"Name": "A", "Country": "X", "Type": "Shield volcano",
                "Year": 1900, "Latitude": 1.0, "Elevation": 100.0}"#,
        )
        .unwrap();
        let b: EruptionRecord = serde_json::from_str(
            r#"{"Name": "B", "Country": "X", "Type": "Stratovolcano",
                "Year": 1800, "Latitude": -1.0, "Elevation": 200.0}"#,
        )
        .unwrap();

        let dataset = EruptionDataset::from_records(vec![a.clone(), b.clone()]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records(), &[a, b]);
    }
}
