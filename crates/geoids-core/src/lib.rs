// crates/geoids-core/src/lib.rs

//! # geoids-core
//!
//! Converts the two GeoNames reference datasets (the `cities15000.txt`
//! tab-separated gazetteer and the `countryInfo.json` country file) into a
//! flat text file mapping an entity name to its GeoNames identifier. The
//! output feeds a downstream name-to-ID mapping build.
//!
//! The whole pipeline lives in [`transform::DatasetTransformer`]; everything
//! else is small supporting vocabulary (records, options, errors).

pub mod error;
pub mod format;
pub mod options;
pub mod record;
pub mod stats;
pub mod transform;

// Re-exports
pub use crate::error::{GeoIdsError, Result};
pub use crate::options::{IdentifierFormat, ShortRowPolicy, TransformOptions};
pub use crate::record::{CountryFile, CountryRecord, GeoId};
pub use crate::stats::TransformStats;
pub use crate::transform::DatasetTransformer;
