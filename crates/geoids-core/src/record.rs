// crates/geoids-core/src/record.rs

//! Serde types for the `countryInfo.json` side of the input.
//!
//! The city gazetteer has no record type of its own: it is read as raw
//! tab-separated records and indexed positionally, see
//! [`transform`](crate::transform).

use serde::Deserialize;
use std::fmt;

/// Top-level shape of `countryInfo.json`: a single object whose
/// `"geonames"` key holds the country array. A document without that key
/// fails deserialization outright.
#[derive(Debug, Deserialize)]
pub struct CountryFile {
    pub geonames: Vec<CountryRecord>,
}

/// One element of the `"geonames"` array. Extra keys (capital, area,
/// population, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "geonameId")]
    pub geoname_id: GeoId,
    #[serde(rename = "countryName")]
    pub country_name: String,
}

/// A GeoNames identifier as found in the JSON dataset.
///
/// GeoNames dumps are inconsistent about this field: depending on the
/// export it arrives as a JSON number or as a string. Both render the
/// same way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GeoId {
    Num(u64),
    Text(String),
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoId::Num(n) => write!(f, "{n}"),
            GeoId::Text(s) => f.write_str(s),
        }
    }
}
