// crates/geoids-core/src/transform.rs

//! # Dataset transformer
//!
//! One linear pass over each input: stream the city gazetteer row by
//! row, then parse the country file as a single JSON document, writing
//! one formatted line per qualifying record as it is seen. City lines
//! always precede country lines, each side in source order, and nothing
//! is deduplicated.
//!
//! The output handle is passed in explicitly and owned by the caller
//! (or opened with truncate semantics by [`DatasetTransformer::run_in_dir`]),
//! so there is no ambient global stream anywhere.

use crate::error::{GeoIdsError, Result};
use crate::format;
use crate::options::{ShortRowPolicy, TransformOptions};
use crate::record::CountryFile;
use crate::stats::TransformStats;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// The whole pipeline. Construct with [`TransformOptions`], then either
/// call [`run_in_dir`](Self::run_in_dir) against a directory holding the
/// fixed-name datasets, or drive the two process functions yourself with
/// arbitrary readers and writer.
#[derive(Debug, Clone)]
pub struct DatasetTransformer {
    options: TransformOptions,
}

impl DatasetTransformer {
    /// Fixed name of the tab-separated city gazetteer.
    pub const CITIES_FILENAME: &'static str = "cities15000.txt";
    /// Fixed name of the JSON country dataset.
    pub const COUNTRIES_FILENAME: &'static str = "countryInfo.json";
    /// Fixed name of the generated lookup file.
    pub const OUTPUT_FILENAME: &'static str = "geoids.txt";

    // Positional layout of the gazetteer rows. Column 1 (the native-script
    // name) and everything past the ASCII name are ignored.
    const GEOID_COL: usize = 0;
    const ASCII_NAME_COL: usize = 2;

    pub fn new(options: TransformOptions) -> Self {
        DatasetTransformer { options }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Streams the tab-separated city file, writing one line per
    /// qualifying row. Returns `(lines_written, rows_skipped)`.
    ///
    /// Rows with an empty ASCII name are dropped when
    /// `skip_empty_names` is set; rows with fewer than 3 columns follow
    /// the configured [`ShortRowPolicy`].
    pub fn process_cities<R: Read, W: Write>(&self, input: R, out: &mut W) -> Result<(usize, usize)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            // GeoNames dumps carry no quoting; a stray '"' in a name is data.
            .quoting(false)
            // Width checks are ours: the short-row policy decides, not the parser.
            .flexible(true)
            .from_reader(input);

        let mut written = 0usize;
        let mut skipped = 0usize;
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let line = idx as u64 + 1;

            let (geoid, name) = match (record.get(Self::GEOID_COL), record.get(Self::ASCII_NAME_COL)) {
                (Some(id), Some(name)) => (id, name),
                _ => match self.options.short_rows {
                    ShortRowPolicy::Fail => {
                        return Err(GeoIdsError::MalformedRow { line, found: record.len() })
                    }
                    ShortRowPolicy::Skip => {
                        warn!(line, columns = record.len(), "skipping short city row");
                        skipped += 1;
                        continue;
                    }
                },
            };

            if self.options.skip_empty_names && name.is_empty() {
                skipped += 1;
                continue;
            }

            writeln!(out, "{}", format::line(self.options.format, geoid, name))?;
            written += 1;
        }
        Ok((written, skipped))
    }

    /// Parses the country file as one JSON document and writes one line
    /// per element of its `"geonames"` array, unconditionally. Returns
    /// the number of lines written.
    pub fn process_countries<R: Read, W: Write>(&self, input: R, out: &mut W) -> Result<usize> {
        let doc: CountryFile = serde_json::from_reader(input)?;
        for country in &doc.geonames {
            let id = country.geoname_id.to_string();
            writeln!(out, "{}", format::line(self.options.format, &id, &country.country_name))?;
        }
        Ok(doc.geonames.len())
    }

    /// Runs both passes against the fixed-name datasets under `dir`,
    /// writing to `out`: cities fully, then countries appended, then a
    /// flush. On error, whatever was already written stays in `out`.
    pub fn run<W: Write>(&self, dir: &Path, out: &mut W) -> Result<TransformStats> {
        let cities = open_dataset(&dir.join(Self::CITIES_FILENAME))?;
        let (city_lines, skipped_rows) = self.process_cities(cities, out)?;
        info!(lines = city_lines, skipped = skipped_rows, "city pass done");

        let countries = open_dataset(&dir.join(Self::COUNTRIES_FILENAME))?;
        let country_lines = self.process_countries(countries, out)?;
        info!(lines = country_lines, "country pass done");

        out.flush()?;
        Ok(TransformStats { city_lines, country_lines, skipped_rows })
    }

    /// Full run against a working directory: truncates/creates
    /// `geoids.txt` there and regenerates it from the two inputs. Running
    /// twice over unchanged inputs yields byte-identical output.
    pub fn run_in_dir(&self, dir: impl AsRef<Path>) -> Result<TransformStats> {
        let dir = dir.as_ref();
        let out_path = dir.join(Self::OUTPUT_FILENAME);
        let mut out = BufWriter::new(File::create(&out_path)?);
        self.run(dir, &mut out)
    }
}

impl Default for DatasetTransformer {
    fn default() -> Self {
        DatasetTransformer::new(TransformOptions::default())
    }
}

fn open_dataset(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| GeoIdsError::NotFound { path: path.to_path_buf(), source: e })?;
    Ok(BufReader::new(file))
}
