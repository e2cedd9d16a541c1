//! Loader and query engine for a volcanic-eruption dataset.
//!
//! A dataset is loaded once, as a whole, and is immutable from then on;
//! every query is a pure read over the same record sequence. See
//! [`data::loader`] for the input formats and [`data::queries`] for the
//! query catalogue.

pub mod data;

pub use data::loader::{load, load_file, LoadError, DEFAULT_DATASET};
pub use data::model::{EruptionDataset, EruptionRecord};
pub use data::queries::QueryError;
