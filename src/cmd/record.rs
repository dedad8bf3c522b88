//! Record commands: build a record from arguments, describe it, apply updates

use anyhow::Result;

use tally::config::Config;
use tally::record::{CountedRecord, Dog, Pet, Record, Restaurant, User};
use tally::ui::Output;

use super::report_counter;

/// Describe a restaurant, open it, then apply `--set` and `--add` in that order.
pub fn cmd_restaurant(
    output: &Output,
    name: &str,
    cuisine: &str,
    set: Option<i64>,
    add: Option<i64>,
) -> Result<()> {
    let mut restaurant = Restaurant::new(name, cuisine);

    output.record(&restaurant);
    output.info(&restaurant.tagline());
    output.info(&restaurant.greeting());

    if let Some(value) = set {
        output.step(&format!("Setting customers served to {}", value));
        let result = restaurant.set_counter(value);
        report_counter(output, &restaurant, result);
    }

    if let Some(delta) = add {
        output.step(&format!("Adding {} customers", delta));
        let result = restaurant.increment_counter(delta);
        report_counter(output, &restaurant, result);
    }

    Ok(())
}

/// Describe and greet a user, optionally counting logins.
pub fn cmd_user(
    output: &Output,
    first_name: &str,
    last_name: &str,
    age: u32,
    email: &str,
    location: &str,
    logins: Option<i64>,
) -> Result<()> {
    let mut user = User::new(first_name, last_name, age, email, location);

    output.record(&user);
    output.info(&user.greeting());

    if let Some(delta) = logins {
        output.step(&format!("Recording {} login attempts", delta));
        let result = user.increment_counter(delta);
        report_counter(output, &user, result);
    }

    Ok(())
}

pub fn cmd_dog(output: &Output, name: &str, age: u32, roll_over: bool) -> Result<()> {
    let dog = Dog::new(name, age);

    output.record(&dog);
    output.info(&dog.sit());
    if roll_over {
        output.info(&dog.roll_over());
    }

    Ok(())
}

/// Describe a pet; without `--type` the configured default type is used.
pub fn cmd_pet(
    output: &Output,
    config: &Config,
    name: &str,
    pet_type: Option<&str>,
) -> Result<()> {
    let pet = Pet::with_type(name, pet_type.unwrap_or(&config.defaults.pet_type));

    output.record(&pet);
    output.info(&pet.greeting());
    if pet_type.is_none() {
        output.detail("(default pet type)");
    }

    Ok(())
}
