// crates/geoids-core/tests/pipeline.rs
//
// End-to-end runs over fixture datasets in a temporary working directory.

use geoids_core::{
    DatasetTransformer, GeoIdsError, IdentifierFormat, TransformOptions,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CITIES_FIXTURE: &str = "\
290557\tAr Riyad\tRiyadh\tSA\t24.68\t46.72\tP\tPPLC\tSA\n\
292223\tDubayy\tDubai\tAE\t25.07\t55.17\tP\tPPLA\tAE\n\
2950159\tBerlin\t\tDE\t52.52\t13.40\tP\tPPLC\tDE\n";

const COUNTRIES_FIXTURE: &str = r#"{"geonames":[{"geonameId":3041565,"countryName":"Andorra","capital":"Andorra la Vella"},{"geonameId":290557,"countryName":"Saudi Arabia"}]}"#;

fn write_fixtures(dir: &Path) {
    fs::write(dir.join(DatasetTransformer::CITIES_FILENAME), CITIES_FIXTURE).unwrap();
    fs::write(dir.join(DatasetTransformer::COUNTRIES_FILENAME), COUNTRIES_FIXTURE).unwrap();
}

fn read_output(dir: &Path) -> String {
    fs::read_to_string(dir.join(DatasetTransformer::OUTPUT_FILENAME)).unwrap()
}

#[test]
fn uri_run_produces_cities_then_countries() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let stats = DatasetTransformer::default().run_in_dir(dir.path()).unwrap();
    assert_eq!(stats.city_lines, 2);
    assert_eq!(stats.country_lines, 2);
    assert_eq!(stats.skipped_rows, 1);
    assert_eq!(stats.total_lines(), 4);

    assert_eq!(
        read_output(dir.path()),
        "http://sws.geonames.org/290557/|Riyadh\n\
         http://sws.geonames.org/292223/|Dubai\n\
         http://sws.geonames.org/3041565/|Andorra\n\
         http://sws.geonames.org/290557/|Saudi Arabia\n"
    );
}

#[test]
fn raw_run_keeps_empty_names_and_uses_spaces() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let t = DatasetTransformer::new(TransformOptions::for_format(IdentifierFormat::Raw));
    let stats = t.run_in_dir(dir.path()).unwrap();
    assert_eq!(stats.city_lines, 3);
    assert_eq!(stats.skipped_rows, 0);

    assert_eq!(
        read_output(dir.path()),
        "290557 Riyadh\n\
         292223 Dubai\n\
         2950159 \n\
         3041565 Andorra\n\
         290557 Saudi Arabia\n"
    );
}

#[test]
fn rerun_over_unchanged_inputs_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let t = DatasetTransformer::default();
    t.run_in_dir(dir.path()).unwrap();
    let first = read_output(dir.path());
    t.run_in_dir(dir.path()).unwrap();
    assert_eq!(read_output(dir.path()), first);
}

#[test]
fn rerun_truncates_stale_output() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    // Plant an oversized stale artifact; the run must fully replace it.
    let out_path = dir.path().join(DatasetTransformer::OUTPUT_FILENAME);
    fs::write(&out_path, "x".repeat(64 * 1024)).unwrap();

    DatasetTransformer::default().run_in_dir(dir.path()).unwrap();
    let out = read_output(dir.path());
    assert!(out.starts_with("http://sws.geonames.org/290557/|Riyadh\n"));
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn missing_city_dataset_reports_its_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DatasetTransformer::COUNTRIES_FILENAME), COUNTRIES_FIXTURE).unwrap();

    let err = DatasetTransformer::default().run_in_dir(dir.path()).unwrap_err();
    match err {
        GeoIdsError::NotFound { path, .. } => {
            assert!(path.ends_with(DatasetTransformer::CITIES_FILENAME));
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[test]
fn malformed_country_json_aborts_after_city_pass() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DatasetTransformer::CITIES_FILENAME), CITIES_FIXTURE).unwrap();
    fs::write(dir.path().join(DatasetTransformer::COUNTRIES_FILENAME), "{broken").unwrap();

    let err = DatasetTransformer::default().run_in_dir(dir.path()).unwrap_err();
    assert!(matches!(err, GeoIdsError::Json(_)));
}
