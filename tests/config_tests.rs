use std::io::Write;

use rust_decimal_macros::dec;
use tempfile::NamedTempFile;
use ticketfinder::config::Config;
use ticketfinder::error::{ConfigError, Error};
use ticketfinder::scanner::ArbitrageScanner;
use ticketfinder::source::SourceKind;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn config_loads_full_file() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[scanner]
buy_fee_rate = 0.05
sell_fee_rate = 0.1
min_profit = 20
min_roi = 0.1

[sources]
enabled = ["stubhub", "ticketmaster"]

[sources.seatgeek]
per_page = 25

[server]
bind = "0.0.0.0:9000"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.scanner.buy_fee_rate, dec!(0.05));
    assert_eq!(config.scanner.min_profit, dec!(20));
    assert_eq!(
        config.sources.enabled,
        vec![SourceKind::Stubhub, SourceKind::Ticketmaster]
    );
    assert_eq!(config.sources.seatgeek.per_page, 25);
    assert_eq!(config.server.bind, "0.0.0.0:9000");

    let scanner = ArbitrageScanner::from_config(&config).unwrap();
    assert_eq!(scanner.source_names(), vec!["stubhub", "ticketmaster"]);
}

#[test]
fn config_rejects_invalid_fee_rate() {
    let file = write_temp_config("[scanner]\nsell_fee_rate = 1.5\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "sell_fee_rate",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid sell_fee_rate error, got {err}"),
        Ok(_) => panic!("Expected invalid sell_fee_rate error, got Ok"),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    let file = write_temp_config("[scanner\nmin_profit = 1\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn default_scanner_polls_all_sources_in_order() {
    let scanner = ArbitrageScanner::from_config(&Config::default()).unwrap();
    assert_eq!(
        scanner.source_names(),
        vec!["ticketmaster", "stubhub", "seatgeek"]
    );
}
