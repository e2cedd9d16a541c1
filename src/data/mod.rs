/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → EruptionDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ EruptionDataset  │  Vec<EruptionRecord>, source order
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  queries  │  filters and aggregates → plain values
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod queries;
