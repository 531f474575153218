// crates/geoids-core/src/format.rs

use crate::options::IdentifierFormat;

/// Base of the canonical GeoNames entity URIs.
pub const GEONAMES_URI_BASE: &str = "http://sws.geonames.org/";

/// Renders a GeoNames ID in the given format. Pure and total for any id.
pub fn identifier(format: IdentifierFormat, id: &str) -> String {
    match format {
        IdentifierFormat::Uri => format!("{GEONAMES_URI_BASE}{id}/"),
        IdentifierFormat::Raw => id.to_owned(),
    }
}

/// Renders one output line (without trailing newline).
pub fn line(format: IdentifierFormat, id: &str, name: &str) -> String {
    format!("{}{}{}", identifier(format, id), format.delimiter(), name)
}
