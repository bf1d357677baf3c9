use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    logging: LoggingConfig,
}

#[test]
fn given_known_level_names_when_parsed_then_maps_to_filter() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("WARN", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        (" debug ", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        assert_that!(LogLevel::from_str(input).unwrap().0, eq(expected));
    }
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_that!(LogLevel::parse_lenient("verbose").0, eq(LevelFilter::Info));
}

#[test]
fn given_logging_table_when_deserialized_then_level_parsed() {
    // Given
    let toml_src = r#"
        [logging]
        level = "warn"
        colored = false
    "#;

    // When
    let wrapper: Wrapper = toml::from_str(toml_src).unwrap();

    // Then
    assert_that!(*wrapper.logging.level, eq(LevelFilter::Warn));
    assert_that!(wrapper.logging.colored, eq(false));
}
