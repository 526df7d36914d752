#![cfg(feature = "std")]

use log::LevelFilter;
use wordshift::{init_logging, level_from};

#[test]
fn level_names_parse() {
    assert_eq!(level_from(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE"), LevelFilter::Info), LevelFilter::Trace);
    assert_eq!(level_from(Some("off"), LevelFilter::Info), LevelFilter::Off);
}

#[test]
fn missing_or_bad_levels_use_the_default() {
    assert_eq!(level_from(None, LevelFilter::Warn), LevelFilter::Warn);
    assert_eq!(level_from(Some("loud"), LevelFilter::Error), LevelFilter::Error);
}

#[test]
fn init_twice_is_harmless() {
    init_logging(LevelFilter::Warn);
    init_logging(LevelFilter::Debug);
    log::warn!("logging initialized");
}
