//! Config loading from fixture files

use tally::config::Config;
use tally::session::price_for_age;
use tally::ui::OutputMode;

mod support;
use support::fixtures::fixture_path;

#[test]
fn test_load_full_fixture() {
    let config = Config::load_from(&fixture_path("full_config")).unwrap();

    assert_eq!(config.defaults.pet_type, "cat");
    assert_eq!(config.defaults.output, OutputMode::Json);
    assert_eq!(config.session.sentinel, "done");
    assert_eq!(config.session.stop_answer, "n");
    assert_eq!(config.poll.verb, "live in");

    assert_eq!(price_for_age(3, &config.tickets), 0);
    assert_eq!(price_for_age(4, &config.tickets), 8);
    assert_eq!(price_for_age(12, &config.tickets), 14);
}

#[test]
fn test_project_fixture_over_global_fixture() {
    let config = Config::load_merged_from(
        Some(&fixture_path("global_config")),
        &fixture_path("full_config"),
    )
    .unwrap();

    // Project sets output and the whole tickets section
    assert_eq!(config.defaults.output, OutputMode::Json);
    assert_eq!(config.tickets.adult_price, 14);
}

#[test]
fn test_global_fixture_alone() {
    let config =
        Config::load_merged_from(Some(&fixture_path("global_config")), &fixture_path("missing"))
            .unwrap();

    assert_eq!(config.defaults.output, OutputMode::Quiet);
    assert_eq!(config.defaults.pet_type, "dog");
    assert_eq!(config.tickets.adult_price, 20);
    assert_eq!(config.tickets.child_price, 10);
}
