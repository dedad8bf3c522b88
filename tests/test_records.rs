//! Record behavior: description, greetings and counter rules

use tally::record::{CountedRecord, CounterError, Dog, Pet, Record, Restaurant};
use tally::ui::OutputMode;

mod support;
use support::builders::{RestaurantBuilder, UserBuilder};
use support::capture::capture;

// ============================================================================
// DESCRIBE
// ============================================================================

#[test]
fn test_describe_reproduces_every_field() {
    let restaurant = RestaurantBuilder::new("Pasta Palace")
        .with_cuisine("Italian")
        .build();
    let summary = restaurant.summary();
    assert!(summary.contains("Pasta Palace"));
    assert!(summary.contains("Italian"));

    let user = UserBuilder::new("Sarah", "Johnson")
        .with_age(30)
        .with_location("Los Angeles")
        .build();
    let summary = user.summary();
    for field in ["Sarah", "Johnson", "30", "sarah@email.com", "Los Angeles"] {
        assert!(summary.contains(field), "missing {field}");
    }

    let dog = Dog::new("Buddy", 3);
    assert!(dog.summary().contains("Buddy"));
    assert!(dog.summary().contains('3'));

    let pet = Pet::with_type("gili", "cat");
    assert!(pet.summary().contains("gili"));
    assert!(pet.summary().contains("cat"));
}

#[test]
fn test_describe_twice_is_identical() {
    let restaurant = RestaurantBuilder::new("Taco Town").with_served(12).build();
    assert_eq!(restaurant.summary(), restaurant.summary());

    let user = UserBuilder::new("John", "Smith").build();
    assert_eq!(user.describe(), user.describe());
}

#[test]
fn test_three_restaurants_describe_independently() {
    let restaurants = [
        Restaurant::new("Pasta Palace", "Italian"),
        Restaurant::new("Sushi Central", "Japanese"),
        Restaurant::new("Taco Town", "Mexican"),
    ];
    let taglines: Vec<String> = restaurants.iter().map(Restaurant::tagline).collect();
    assert_eq!(
        taglines,
        vec![
            "Pasta Palace serves Italian cuisine.",
            "Sushi Central serves Japanese cuisine.",
            "Taco Town serves Mexican cuisine.",
        ]
    );
}

// ============================================================================
// COUNTER RULES
// ============================================================================

#[test]
fn test_set_then_increment_then_reject() {
    let mut restaurant = Restaurant::new("Tony's Pizza", "Italian");
    assert_eq!(restaurant.count(), 0);

    restaurant.set_counter(50).unwrap();
    assert_eq!(restaurant.count(), 50);

    restaurant.increment_counter(25).unwrap();
    assert_eq!(restaurant.count(), 75);

    let err = restaurant.set_counter(-5).unwrap_err();
    assert_eq!(restaurant.count(), 75);
    assert!(matches!(err, CounterError::NegativeValue { value: -5, .. }));
}

#[test]
fn test_negative_increment_is_rejected() {
    let mut restaurant = RestaurantBuilder::new("Tony's Pizza").with_served(40).build();

    let err = restaurant.increment_counter(-10).unwrap_err();
    assert_eq!(restaurant.count(), 40);
    assert_eq!(
        err.to_string(),
        "Additional customers can't be negative! (got -10)"
    );
}

#[test]
fn test_increment_zero_is_allowed() {
    let mut restaurant = RestaurantBuilder::new("Tony's Pizza").with_served(40).build();
    restaurant.increment_counter(0).unwrap();
    assert_eq!(restaurant.count(), 40);
}

#[test]
fn test_records_do_not_share_counters() {
    let mut first = Restaurant::new("Pasta Palace", "Italian");
    let second = Restaurant::new("Sushi Central", "Japanese");

    first.set_counter(50).unwrap();
    first.increment_counter(5).unwrap();

    assert_eq!(first.count(), 55);
    assert_eq!(second.count(), 0);

    let mut john = UserBuilder::new("John", "Smith").build();
    let sarah = john.clone();
    john.record_login();
    assert_eq!(john.login_attempts(), 1);
    assert_eq!(sarah.login_attempts(), 0);
}

// ============================================================================
// DEMO WALKTHROUGH
// ============================================================================

#[test]
fn test_demo_walkthrough_passes() {
    let (output, buffer) = capture(OutputMode::Json);
    let outcomes = tally::demo::run_demo(&output);

    assert!(outcomes.iter().all(|o| o.passed()));
    let names: Vec<&str> = outcomes.iter().map(|o| o.name).collect();
    assert_eq!(
        names,
        vec![
            "set to 50",
            "increment by 25",
            "reject negative set",
            "second record untouched"
        ]
    );

    // Every line is a standalone JSON object
    for line in buffer.lines() {
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("level").is_some());
    }
    assert!(buffer.contents().contains(r#""level":"warning""#));
}
